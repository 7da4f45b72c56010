use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// High-level app configuration. Stored on disk in the sectioned layout of
/// `tables::ConfigTables`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_url: String,
    pub request_timeout_secs: u64,
    /// Token used when no cached session exists.
    pub auth_token: Option<String>,
    pub cache_dir: String,
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
    /// Per-attempt countdown; 0 disables it.
    pub quiz_time_limit_secs: u64,
    pub timer_interval_ms: u64,
    pub auto_submit_on_time_up: bool,
    pub documents_page_size: u32,
    pub flashcards_page_size: u32,
    pub quizzes_page_size: u32,
    pub max_upload_bytes: u64,
    pub toast_duration_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_url: defaults::default_server_url(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
            auth_token: None,
            cache_dir: defaults::default_cache_dir(),
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            log_level: defaults::default_log_level(),
            quiz_time_limit_secs: 0,
            timer_interval_ms: defaults::default_timer_interval_ms(),
            auto_submit_on_time_up: defaults::default_auto_submit_on_time_up(),
            documents_page_size: defaults::default_documents_page_size(),
            flashcards_page_size: defaults::default_flashcards_page_size(),
            quizzes_page_size: defaults::default_quizzes_page_size(),
            max_upload_bytes: defaults::default_max_upload_bytes(),
            toast_duration_secs: defaults::default_toast_duration_secs(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs.max(1))
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
