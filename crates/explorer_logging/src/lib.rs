#![deny(missing_docs)]
//! Shared logging utilities for the movie explorer workspace.
//!
//! This crate provides the `explorer_*` logging macros used across the codebase,
//! a file logger for the terminal UI and a minimal test initializer for the
//! global logger.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! explorer_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a logger that writes to `path`, truncating any previous log.
///
/// The terminal UI owns stdout, so the application logs to a file only.
/// Returns the IO error if the file cannot be created; a logger that was
/// already installed is left in place.
pub fn initialize_file_logger(path: &Path, level: LevelFilter) -> std::io::Result<()> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    let _ = CombinedLogger::init(vec![WriteLogger::new(level, config, file)]);
    Ok(())
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
