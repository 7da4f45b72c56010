use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::{Deserialize, Serialize};

/// On-disk layout of `config.toml`: one table per concern.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    quiz: QuizConfig,
    #[serde(default)]
    lists: ListsConfig,
    #[serde(default)]
    ui: UiConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            server_url: tables.server.url,
            request_timeout_secs: tables.server.request_timeout_secs,
            auth_token: tables.server.auth_token.filter(|t| !t.trim().is_empty()),
            cache_dir: tables.server.cache_dir,
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            log_level: tables.logging.log_level,
            quiz_time_limit_secs: tables.quiz.time_limit_secs,
            timer_interval_ms: tables.quiz.timer_interval_ms,
            auto_submit_on_time_up: tables.quiz.auto_submit_on_time_up,
            documents_page_size: tables.lists.documents_page_size,
            flashcards_page_size: tables.lists.flashcards_page_size,
            quizzes_page_size: tables.lists.quizzes_page_size,
            max_upload_bytes: tables.lists.max_upload_bytes,
            toast_duration_secs: tables.ui.toast_duration_secs,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            server: ServerConfig {
                url: config.server_url.clone(),
                request_timeout_secs: config.request_timeout_secs,
                auth_token: config.auth_token.clone(),
                cache_dir: config.cache_dir.clone(),
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                window_width: config.window_width,
                window_height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            quiz: QuizConfig {
                time_limit_secs: config.quiz_time_limit_secs,
                timer_interval_ms: config.timer_interval_ms,
                auto_submit_on_time_up: config.auto_submit_on_time_up,
            },
            lists: ListsConfig {
                documents_page_size: config.documents_page_size,
                flashcards_page_size: config.flashcards_page_size,
                quizzes_page_size: config.quizzes_page_size,
                max_upload_bytes: config.max_upload_bytes,
            },
            ui: UiConfig {
                toast_duration_secs: config.toast_duration_secs,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ServerConfig {
    #[serde(default = "defaults::default_server_url")]
    url: String,
    #[serde(default = "defaults::default_request_timeout_secs")]
    request_timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default = "defaults::default_cache_dir")]
    cache_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: defaults::default_server_url(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
            auth_token: None,
            cache_dir: defaults::default_cache_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct QuizConfig {
    #[serde(default)]
    time_limit_secs: u64,
    #[serde(default = "defaults::default_timer_interval_ms")]
    timer_interval_ms: u64,
    #[serde(default = "defaults::default_auto_submit_on_time_up")]
    auto_submit_on_time_up: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            time_limit_secs: 0,
            timer_interval_ms: defaults::default_timer_interval_ms(),
            auto_submit_on_time_up: defaults::default_auto_submit_on_time_up(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ListsConfig {
    #[serde(default = "defaults::default_documents_page_size")]
    documents_page_size: u32,
    #[serde(default = "defaults::default_flashcards_page_size")]
    flashcards_page_size: u32,
    #[serde(default = "defaults::default_quizzes_page_size")]
    quizzes_page_size: u32,
    #[serde(default = "defaults::default_max_upload_bytes")]
    max_upload_bytes: u64,
}

impl Default for ListsConfig {
    fn default() -> Self {
        ListsConfig {
            documents_page_size: defaults::default_documents_page_size(),
            flashcards_page_size: defaults::default_flashcards_page_size(),
            quizzes_page_size: defaults::default_quizzes_page_size(),
            max_upload_bytes: defaults::default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_toast_duration_secs")]
    toast_duration_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            toast_duration_secs: defaults::default_toast_duration_secs(),
        }
    }
}
