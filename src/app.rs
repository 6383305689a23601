//! Application state management for aqitrend
//!
//! This module contains the main application state: the tab controller, the
//! city and time-range selectors, and the current trend report. Keyboard input
//! is translated into tab selections and selector changes; every selector
//! change regenerates the report through [`App::refresh_dashboard`].

use chrono::{DateTime, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::cli::StartupConfig;
use crate::data::city::city_index;
use crate::data::{all_cities, City, TimeRange};
use crate::tabs::TabController;
use crate::trends::{build_report, RandomSource, TrendError, TrendReport};

/// Main application struct managing state and data
pub struct App {
    /// Which tab and panel are active
    pub tabs: TabController,
    /// Index of the selected city in the city list
    pub city_index: usize,
    /// Selected time range
    pub range: TimeRange,
    /// Most recently generated report
    pub report: Option<TrendReport>,
    /// Error from the last failed regeneration, shown in the footer
    pub last_error: Option<String>,
    /// Timestamp of the last regeneration
    pub last_refresh: Option<DateTime<Local>>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Random source for the simulated series
    rng: Box<dyn RandomSource>,
    /// Fixed reference date; `None` uses today's local date
    fixed_today: Option<NaiveDate>,
}

impl App {
    /// Creates a new App with default selectors and the thread RNG
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// A configured seed selects a seeded [`StdRng`]; otherwise the thread
    /// RNG is used. The report is not generated until the first
    /// [`App::refresh_dashboard`] call.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };
        Self::with_source(config, rng, None)
    }

    /// Creates a new App with an explicit random source and reference date
    pub fn with_source(
        config: StartupConfig,
        rng: Box<dyn RandomSource>,
        fixed_today: Option<NaiveDate>,
    ) -> Self {
        Self {
            tabs: TabController::new(config.tab),
            city_index: city_index(config.city.id).unwrap_or(0),
            range: config.range,
            report: None,
            last_error: None,
            last_refresh: None,
            should_quit: false,
            show_help: false,
            rng,
            fixed_today,
        }
    }

    /// Returns the selected city
    pub fn city(&self) -> &'static City {
        let cities = all_cities();
        &cities[self.city_index % cities.len()]
    }

    /// Reference date the series ends on
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Regenerates the report for the current city and range.
    ///
    /// On failure the previous report is kept and the error is recorded for
    /// the footer.
    pub fn refresh_dashboard(&mut self) {
        if let Err(e) = self.try_refresh().map(|_| ()) {
            warn!(city = self.city().id, error = %e, "failed to regenerate trend report");
            self.last_error = Some(e.to_string());
        }
    }

    /// Regenerates the report, returning it or the generation error
    pub fn try_refresh(&mut self) -> Result<&TrendReport, TrendError> {
        let city = self.city();
        let today = self.today();
        let report = build_report(city, self.range, today, &mut self.rng)?;
        debug!(
            city = city.id,
            days = self.range.days(),
            avg = report.summary.avg,
            min = report.summary.min,
            max = report.summary.max,
            direction = report.analysis.direction.label(),
            "regenerated trend report"
        );
        self.last_error = None;
        self.last_refresh = Some(Local::now());
        Ok(&*self.report.insert(report))
    }

    /// Selects the next city, wrapping at the end, and regenerates
    pub fn next_city(&mut self) {
        self.city_index = (self.city_index + 1) % all_cities().len();
        info!(city = self.city().id, "city changed");
        self.refresh_dashboard();
    }

    /// Selects the previous city, wrapping at the start, and regenerates
    pub fn previous_city(&mut self) {
        let count = all_cities().len();
        self.city_index = (self.city_index + count - 1) % count;
        info!(city = self.city().id, "city changed");
        self.refresh_dashboard();
    }

    /// Cycles to the next time range and regenerates
    pub fn cycle_range(&mut self) {
        self.range = self.range.next();
        info!(days = self.range.days(), "time range changed");
        self.refresh_dashboard();
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Tab`/`→`/`l`: Next tab
    /// - `Shift-Tab`/`←`/`h`: Previous tab
    /// - `1`-`5`: Select tab by position
    /// - `c`/`C`: Next/previous city
    /// - `t`: Cycle time range
    /// - `r`: Regenerate the series
    /// - `?`: Toggle help
    /// - `q`/`Esc`: Quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.tabs.next();
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.tabs.previous();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.tabs.select_index(index);
            }
            KeyCode::Char('c') => {
                self.next_city();
            }
            KeyCode::Char('C') => {
                self.previous_city();
            }
            KeyCode::Char('t') => {
                self.cycle_range();
            }
            KeyCode::Char('r') => {
                self.refresh_dashboard();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
