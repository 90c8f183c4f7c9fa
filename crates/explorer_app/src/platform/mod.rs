//! Terminal front end: configuration, logging, effect execution and the ratatui UI.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
