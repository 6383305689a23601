//! Static city data for the trend dashboard
//!
//! Each city carries the base AQI its simulated series wanders around.

use super::City;

/// Static array of all selectable cities
pub static CITIES: [City; 10] = [
    City {
        id: "delhi",
        name: "Delhi",
        base_aqi: 180.0,
    },
    City {
        id: "mumbai",
        name: "Mumbai",
        base_aqi: 110.0,
    },
    City {
        id: "kolkata",
        name: "Kolkata",
        base_aqi: 150.0,
    },
    City {
        id: "chennai",
        name: "Chennai",
        base_aqi: 85.0,
    },
    City {
        id: "bengaluru",
        name: "Bengaluru",
        base_aqi: 70.0,
    },
    City {
        id: "hyderabad",
        name: "Hyderabad",
        base_aqi: 95.0,
    },
    City {
        id: "pune",
        name: "Pune",
        base_aqi: 80.0,
    },
    City {
        id: "ahmedabad",
        name: "Ahmedabad",
        base_aqi: 130.0,
    },
    City {
        id: "lucknow",
        name: "Lucknow",
        base_aqi: 165.0,
    },
    City {
        id: "jaipur",
        name: "Jaipur",
        base_aqi: 120.0,
    },
];

/// Returns a slice of all cities
pub fn all_cities() -> &'static [City] {
    &CITIES
}

/// Finds a city by id or display name, ignoring case
pub fn find_city(query: &str) -> Option<&'static City> {
    let query = query.trim();
    CITIES
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(query) || c.name.eq_ignore_ascii_case(query))
}

/// Returns the position of a city in the selector
pub fn city_index(id: &str) -> Option<usize> {
    CITIES.iter().position(|c| c.id == id)
}
