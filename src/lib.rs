//! aqitrend library
//!
//! Exposes the simulation, tab controller, application state and rendering
//! so the binary and the integration tests share one implementation.

pub mod app;
pub mod cli;
pub mod data;
pub mod logging;
pub mod tabs;
pub mod trends;
pub mod ui;
