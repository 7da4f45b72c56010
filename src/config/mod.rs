//! Configuration loading for the StudyDeck dashboard.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, save_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};

/// Where the configuration lives unless a path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
