//! UI rendering module for aqitrend
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Rendering only reads [`App`]
//! state; nothing is written back.
//!
//! [`App`]: crate::app::App

pub mod dashboard;
pub mod help_overlay;
pub mod widgets;

pub use dashboard::render as render_dashboard;
pub use help_overlay::render as render_help_overlay;
