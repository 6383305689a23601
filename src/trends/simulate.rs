//! Synthetic series and pattern-row generation

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::{RandomSource, TrendError};
use crate::data::AqiCategory;

/// Lowest AQI a simulated sample can take
pub const MIN_AQI: f64 = 10.0;
/// Highest AQI a simulated sample can take
pub const MAX_AQI: f64 = 300.0;
/// Half-width of the daily jitter around the base value
const DAILY_JITTER: f64 = 20.0;
/// Half-width of the jitter applied to pattern rows
const PATTERN_JITTER: f64 = 10.0;
/// Half-width of the hourly forecast jitter
const FORECAST_JITTER: f64 = 12.0;
/// Upper bound of a forecast value (the top of the AQI scale)
pub const FORECAST_MAX_AQI: f64 = 500.0;
/// Number of hourly forecast entries
pub const FORECAST_HOURS: u32 = 24;

/// Weekday labels for the weekly pattern row
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Hour-of-day labels for the hourly pattern row
pub const HOUR_LABELS: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

/// Cosmetic up/down marker shown next to each timeline entry
///
/// Drawn independently of the AQI value and never used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMark {
    Up,
    Down,
}

impl TrendMark {
    /// Glyph shown in the timeline
    pub fn glyph(self) -> &'static str {
        match self {
            TrendMark::Up => "\u{2191}",   // ↑
            TrendMark::Down => "\u{2193}", // ↓
        }
    }
}

/// One simulated daily reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSample {
    /// Calendar day of the reading
    pub date: NaiveDate,
    /// AQI value, always within `[10, 300]`
    pub aqi: u32,
    /// Cosmetic marker
    pub mark: TrendMark,
}

/// One labelled value of a synthetic pattern row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub label: String,
    pub value: u32,
}

/// One hour of the simulated 24-hour forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastEntry {
    /// Hour label, `"01:00"` through `"24:00"`
    pub hour: String,
    /// Forecast AQI within `[0, 500]`
    pub aqi: u32,
    pub category: AqiCategory,
}

/// Generates `days + 1` daily samples ending at `today`, oldest first.
///
/// Each AQI is `clamp(base + uniform(-20, 20), 10, 300)` rounded to the
/// nearest integer. For every sample the AQI draw comes first, then a coin
/// flip picks the mark (`< 0.5` is up).
///
/// # Errors
/// Returns [`TrendError::DateOutOfRange`] if `today - days` cannot be
/// represented as a calendar date.
pub fn generate_trend_data<R: RandomSource + ?Sized>(
    base: f64,
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<TrendSample>, TrendError> {
    let start = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or(TrendError::DateOutOfRange { today, days })?;

    let mut samples = Vec::with_capacity(days as usize + 1);
    for (offset, date) in start.iter_days().take(days as usize + 1).enumerate() {
        let raw = base + rng.uniform(-DAILY_JITTER, DAILY_JITTER);
        let aqi = raw.clamp(MIN_AQI, MAX_AQI).round() as u32;
        let mark = if rng.next_unit() < 0.5 {
            TrendMark::Up
        } else {
            TrendMark::Down
        };
        tracing::trace!(offset, %date, aqi, "generated sample");
        samples.push(TrendSample { date, aqi, mark });
    }

    Ok(samples)
}

/// Builds one pattern row: `round(avg + uniform(-10, 10))` per label, in
/// label order.
pub fn synthetic_pattern_row<R: RandomSource + ?Sized>(
    labels: &[&str],
    avg: f64,
    rng: &mut R,
) -> Vec<PatternEntry> {
    labels
        .iter()
        .map(|label| PatternEntry {
            label: (*label).to_string(),
            value: (avg + rng.uniform(-PATTERN_JITTER, PATTERN_JITTER))
                .round()
                .max(0.0) as u32,
        })
        .collect()
}

/// Builds a 24-hour forecast around `base`, one entry per hour starting at
/// `01:00`.
///
/// Each value is `clamp(round(base + uniform(-12, 12)), 0, 500)` and carries
/// the category it falls in.
pub fn generate_forecast<R: RandomSource + ?Sized>(
    base: u32,
    rng: &mut R,
) -> Vec<ForecastEntry> {
    (1..=FORECAST_HOURS)
        .map(|hour| {
            let raw = f64::from(base) + rng.uniform(-FORECAST_JITTER, FORECAST_JITTER);
            let aqi = raw.round().clamp(0.0, FORECAST_MAX_AQI) as u32;
            ForecastEntry {
                hour: format!("{:02}:00", hour),
                aqi,
                category: AqiCategory::from_aqi(aqi),
            }
        })
        .collect()
}
