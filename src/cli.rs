//! Command-line interface parsing for aqitrend
//!
//! This module handles parsing of CLI arguments using clap: the initial city,
//! time range and tab, an optional seed for reproducible runs, the JSON
//! snapshot mode and the log file location.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{all_cities, find_city, City, TimeRange};
use crate::tabs::Tab;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified city is not in the city list
    #[error("Invalid city: '{0}'. Valid cities: {}", city_ids())]
    InvalidCity(String),
    /// The specified time range is not supported
    #[error("Invalid range: '{0}'. Valid ranges: 7, 14, 30 (or week, fortnight, month)")]
    InvalidRange(String),
    /// The specified tab name is not recognized
    #[error("Invalid tab: '{0}'. Valid tabs: timeline, stats, patterns, categories, forecast")]
    InvalidTab(String),
}

fn city_ids() -> String {
    all_cities()
        .iter()
        .map(|c| c.id)
        .collect::<Vec<_>>()
        .join(", ")
}

/// aqitrend - Simulated air quality trends in the terminal
#[derive(Parser, Debug)]
#[command(name = "aqitrend")]
#[command(about = "Simulated air quality trends by city")]
#[command(version)]
pub struct Cli {
    /// City to show first, by id or name (e.g. delhi, mumbai)
    #[arg(long, value_name = "CITY")]
    pub city: Option<String>,

    /// Time range in days: 7, 14 or 30 (or week, fortnight, month)
    #[arg(long, value_name = "RANGE")]
    pub range: Option<String>,

    /// Tab to open on: timeline, stats, patterns, categories or forecast
    #[arg(long, value_name = "TAB")]
    pub tab: Option<String>,

    /// Seed for a reproducible simulated series
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print one trend report as JSON and exit instead of opening the dashboard
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file instead of the default data directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// City selected at startup
    pub city: &'static City,
    /// Time range selected at startup
    pub range: TimeRange,
    /// Tab active at startup
    pub tab: Tab,
    /// Seed for the random source, `None` for the thread RNG
    pub seed: Option<u64>,
    /// Whether to print a JSON snapshot instead of running the TUI
    pub json: bool,
    /// Explicit log file path
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            city: &all_cities()[0],
            range: TimeRange::default(),
            tab: Tab::default(),
            seed: None,
            json: false,
            log_file: None,
        }
    }
}

/// Parses a city argument into a city from the static list.
pub fn parse_city_arg(s: &str) -> Result<&'static City, CliError> {
    find_city(s).ok_or_else(|| CliError::InvalidCity(s.to_string()))
}

/// Parses a range argument into a TimeRange.
pub fn parse_range_arg(s: &str) -> Result<TimeRange, CliError> {
    TimeRange::from_str(s).ok_or_else(|| CliError::InvalidRange(s.to_string()))
}

/// Parses a tab argument into a Tab.
pub fn parse_tab_arg(s: &str) -> Result<Tab, CliError> {
    Tab::from_str(s).ok_or_else(|| CliError::InvalidTab(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with defaults for anything not given
    /// * `Err(CliError)` if a city, range or tab was not recognized
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let defaults = StartupConfig::default();

        let city = match &cli.city {
            Some(city) => parse_city_arg(city)?,
            None => defaults.city,
        };
        let range = match &cli.range {
            Some(range) => parse_range_arg(range)?,
            None => defaults.range,
        };
        let tab = match &cli.tab {
            Some(tab) => parse_tab_arg(tab)?,
            None => defaults.tab,
        };

        Ok(StartupConfig {
            city,
            range,
            tab,
            seed: cli.seed,
            json: cli.json,
            log_file: cli.log_file.clone(),
        })
    }
}
