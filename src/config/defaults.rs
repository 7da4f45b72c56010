pub(crate) fn default_server_url() -> String {
    "http://localhost:5000/api".to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    30
}

pub(crate) fn default_cache_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_timer_interval_ms() -> u64 {
    1000
}

pub(crate) fn default_auto_submit_on_time_up() -> bool {
    true
}

pub(crate) fn default_documents_page_size() -> u32 {
    10
}

pub(crate) fn default_flashcards_page_size() -> u32 {
    20
}

pub(crate) fn default_quizzes_page_size() -> u32 {
    20
}

pub(crate) fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

pub(crate) fn default_toast_duration_secs() -> u64 {
    4
}
