//! Simulated AQI trends
//!
//! Generates a synthetic daily AQI series for a city and derives everything the
//! dashboard shows from it: summary statistics, a trend classification, the
//! weekday/hour pattern rows and a 24-hour forecast from the latest reading.
//! All functions here are pure given an injected [`RandomSource`] and
//! reference date; nothing touches the terminal.

mod analysis;
mod random;
mod report;
mod simulate;

pub use analysis::{classify, summarize, Summary, TrendAnalysis, TrendDirection, TREND_THRESHOLD};
pub use random::{RandomSource, ReplaySource};
pub use report::{build_report, TrendReport};
pub use simulate::{
    generate_forecast, generate_trend_data, synthetic_pattern_row, ForecastEntry, PatternEntry,
    TrendMark, TrendSample, FORECAST_HOURS, FORECAST_MAX_AQI, HOUR_LABELS, WEEKDAY_LABELS,
};

use thiserror::Error;

/// Errors that can occur while building or analysing a trend series
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Statistics were requested for a series with no samples
    #[error("cannot analyse an empty AQI series")]
    EmptySeries,
    /// Stepping back from the reference date left the calendar range
    #[error("cannot step back {days} days from {today}")]
    DateOutOfRange { today: chrono::NaiveDate, days: u32 },
}
