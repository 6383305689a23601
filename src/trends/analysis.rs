//! Summary statistics and trend classification

use serde::Serialize;

use super::{TrendError, TrendSample};

/// Minimum difference between the recent and earlier averages before a
/// trend counts as increasing or decreasing
pub const TREND_THRESHOLD: f64 = 5.0;

/// Number of samples averaged at each end of the series
const WINDOW: usize = 3;

/// Min/avg/max over a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Mean AQI rounded to the nearest integer
    pub avg: u32,
    pub max: u32,
    pub min: u32,
}

/// Direction of the trend between the start and end of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Icon shown next to the trend text
    pub fn icon(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "\u{2B06}", // ⬆
            TrendDirection::Decreasing => "\u{2B07}", // ⬇
            TrendDirection::Stable => "\u{1F4CA}",    // 📊
        }
    }

    /// Short trend label
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
        }
    }

    /// Human-readable description of what the trend means for air quality
    pub fn message(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Air quality is getting worse",
            TrendDirection::Decreasing => "Air quality is improving",
            TrendDirection::Stable => "Air quality is holding steady",
        }
    }
}

/// Result of comparing the start and end of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// Mean of the last three readings
    pub recent_avg: f64,
    /// Mean of the first three readings
    pub earlier_avg: f64,
}

impl TrendAnalysis {
    /// Icon for the classified direction
    pub fn icon(&self) -> &'static str {
        self.direction.icon()
    }

    /// Message for the classified direction
    pub fn message(&self) -> &'static str {
        self.direction.message()
    }

    /// One-sentence analysis shown under the trend
    pub fn sentence(&self, city: &str) -> String {
        let change = self.recent_avg - self.earlier_avg;
        match self.direction {
            TrendDirection::Increasing => format!(
                "AQI in {} rose from an average of {:.0} to {:.0} (+{:.0}); pollution levels are climbing.",
                city, self.earlier_avg, self.recent_avg, change
            ),
            TrendDirection::Decreasing => format!(
                "AQI in {} fell from an average of {:.0} to {:.0} ({:.0}); pollution levels are easing.",
                city, self.earlier_avg, self.recent_avg, change
            ),
            TrendDirection::Stable => format!(
                "AQI in {} stayed near {:.0} (within {:.0} points of {:.0} earlier).",
                city, self.recent_avg, TREND_THRESHOLD, self.earlier_avg
            ),
        }
    }
}

/// Computes the rounded mean and exact extrema of the AQI values.
///
/// # Errors
/// Returns [`TrendError::EmptySeries`] for an empty slice.
pub fn summarize(samples: &[TrendSample]) -> Result<Summary, TrendError> {
    let first = samples.first().ok_or(TrendError::EmptySeries)?;

    let mut sum: u64 = 0;
    let mut max = first.aqi;
    let mut min = first.aqi;
    for sample in samples {
        sum += u64::from(sample.aqi);
        max = max.max(sample.aqi);
        min = min.min(sample.aqi);
    }

    let avg = (sum as f64 / samples.len() as f64).round() as u32;
    Ok(Summary { avg, max, min })
}

/// Classifies the trend by comparing the mean of the last three readings
/// against the mean of the first three.
///
/// Series shorter than three samples average whatever is available at each
/// end, so a single sample is always stable.
///
/// # Errors
/// Returns [`TrendError::EmptySeries`] for an empty slice.
pub fn classify(samples: &[TrendSample]) -> Result<TrendAnalysis, TrendError> {
    if samples.is_empty() {
        return Err(TrendError::EmptySeries);
    }

    let window = WINDOW.min(samples.len());
    let earlier_avg = mean(&samples[..window]);
    let recent_avg = mean(&samples[samples.len() - window..]);

    let direction = if recent_avg > earlier_avg + TREND_THRESHOLD {
        TrendDirection::Increasing
    } else if recent_avg < earlier_avg - TREND_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    Ok(TrendAnalysis {
        direction,
        recent_avg,
        earlier_avg,
    })
}

fn mean(samples: &[TrendSample]) -> f64 {
    let sum: u64 = samples.iter().map(|s| u64::from(s.aqi)).sum();
    sum as f64 / samples.len() as f64
}
