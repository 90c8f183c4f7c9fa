//! Platform logging initialization for the movie explorer.
//!
//! Writes logs to `./movie_explorer.log` in the current working directory;
//! the terminal itself belongs to the UI.

use std::path::PathBuf;

use log::LevelFilter;

const LOG_FILENAME: &str = "movie_explorer.log";

pub fn initialize(level: LevelFilter) {
    let log_path = PathBuf::from(".").join(LOG_FILENAME);
    if let Err(err) = explorer_logging::initialize_file_logger(&log_path, level) {
        eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
    }
}
