//! Core data models for aqitrend
//!
//! This module contains the static city list, the time-range selector and the
//! AQI category bands used throughout the application.

pub mod category;
pub mod city;

pub use category::AqiCategory;
pub use city::{all_cities, find_city};

use serde::Serialize;

/// A selectable city with the base AQI the simulated series is centred on
///
/// Uses `&'static str` for string fields to allow static initialization
/// of the CITIES array. Only `Serialize` is derived; look cities up again
/// with `find_city` when starting from an id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    /// Unique identifier for the city
    pub id: &'static str,
    /// Human-readable name of the city
    pub name: &'static str,
    /// Typical AQI for the city, used as the centre of the random walk
    pub base_aqi: f64,
}

/// Time-range selector for the trend dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Last 7 days
    #[default]
    Week,
    /// Last 14 days
    Fortnight,
    /// Last 30 days
    Month,
}

impl TimeRange {
    /// All ranges in selector order
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Fortnight, TimeRange::Month];

    /// Number of days to step back from today
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Fortnight => 14,
            TimeRange::Month => 30,
        }
    }

    /// Label shown in the header
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Fortnight => "Last 14 days",
            TimeRange::Month => "Last 30 days",
        }
    }

    /// Returns the next range, wrapping from Month back to Week
    pub fn next(self) -> Self {
        match self {
            TimeRange::Week => TimeRange::Fortnight,
            TimeRange::Fortnight => TimeRange::Month,
            TimeRange::Month => TimeRange::Week,
        }
    }

    /// Parses a range argument: a day count or a name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "7" | "week" => Some(TimeRange::Week),
            "14" | "fortnight" => Some(TimeRange::Fortnight),
            "30" | "month" => Some(TimeRange::Month),
            _ => None,
        }
    }
}
