//! AQI category bands
//!
//! Maps an AQI value onto the US EPA bands used to label and colour readings.

use ratatui::style::Color;
use serde::Serialize;

/// AQI category band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// All bands from cleanest to worst
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Returns the band containing `aqi`
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitive,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    /// Human-readable band name
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Inclusive AQI range of the band, `None` upper bound for Hazardous
    pub fn range(self) -> (u32, Option<u32>) {
        match self {
            AqiCategory::Good => (0, Some(50)),
            AqiCategory::Moderate => (51, Some(100)),
            AqiCategory::UnhealthyForSensitive => (101, Some(150)),
            AqiCategory::Unhealthy => (151, Some(200)),
            AqiCategory::VeryUnhealthy => (201, Some(300)),
            AqiCategory::Hazardous => (301, None),
        }
    }

    /// Terminal colour for the band
    pub fn color(self) -> Color {
        match self {
            AqiCategory::Good => Color::Green,
            AqiCategory::Moderate => Color::Yellow,
            AqiCategory::UnhealthyForSensitive => Color::LightRed,
            AqiCategory::Unhealthy => Color::Red,
            AqiCategory::VeryUnhealthy => Color::Magenta,
            AqiCategory::Hazardous => Color::LightMagenta,
        }
    }
}
