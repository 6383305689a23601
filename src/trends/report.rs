//! Dashboard report: one generation pass plus everything derived from it

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    classify, generate_forecast, generate_trend_data, summarize, synthetic_pattern_row,
    ForecastEntry, PatternEntry, RandomSource, Summary, TrendAnalysis, TrendError, TrendSample,
    HOUR_LABELS, WEEKDAY_LABELS,
};
use crate::data::{AqiCategory, City, TimeRange};

/// Everything the trend dashboard renders for one city and range
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub city: City,
    pub range: TimeRange,
    /// Reference date the series ends on
    pub generated_for: NaiveDate,
    pub samples: Vec<TrendSample>,
    pub summary: Summary,
    pub category: AqiCategory,
    pub analysis: TrendAnalysis,
    /// Synthetic average per weekday
    pub weekly: Vec<PatternEntry>,
    /// Synthetic average per hour of day
    pub hourly: Vec<PatternEntry>,
    /// Next 24 hours, starting from the latest reading
    pub forecast: Vec<ForecastEntry>,
}

impl TrendReport {
    /// Trend-analysis sentence for this report's city
    pub fn analysis_sentence(&self) -> String {
        self.analysis.sentence(self.city.name)
    }

    /// Samples newest first, as listed in the timeline
    pub fn recent_first(&self) -> impl Iterator<Item = &TrendSample> {
        self.samples.iter().rev()
    }
}

/// Generates a series for `city` over `range` and derives the summary,
/// classification, pattern rows and forecast from it.
///
/// Random draws happen in a fixed order: the series, the weekday row, the
/// hourly row, then the forecast.
pub fn build_report<R: RandomSource + ?Sized>(
    city: &City,
    range: TimeRange,
    today: NaiveDate,
    rng: &mut R,
) -> Result<TrendReport, TrendError> {
    let samples = generate_trend_data(city.base_aqi, range.days(), today, rng)?;
    let summary = summarize(&samples)?;
    let analysis = classify(&samples)?;

    let avg = f64::from(summary.avg);
    let weekly = synthetic_pattern_row(&WEEKDAY_LABELS, avg, rng);
    let hourly = synthetic_pattern_row(&HOUR_LABELS, avg, rng);
    let latest = samples.last().map_or(summary.avg, |s| s.aqi);
    let forecast = generate_forecast(latest, rng);

    Ok(TrendReport {
        city: *city,
        range,
        generated_for: today,
        category: AqiCategory::from_aqi(summary.avg),
        samples,
        summary,
        analysis,
        weekly,
        hourly,
        forecast,
    })
}
