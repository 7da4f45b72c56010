use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let tables: ConfigTables = toml::from_str(contents)?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&ConfigTables::from(config))
}

/// Write the config back to disk. Failures are logged, never fatal.
pub fn save_config(path: &Path, config: &AppConfig) {
    let contents = match serialize_config(config) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Could not serialize config: {err}");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Could not create config directory: {err}");
            return;
        }
    }
    match fs::write(path, contents) {
        Ok(()) => debug!(path = %path.display(), "Saved config"),
        Err(err) => warn!(path = %path.display(), "Could not write config: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server_url, "http://localhost:5000/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.timer_interval_ms, 1000);
        assert_eq!(config.quiz_time_limit_secs, 0);
        assert!(config.auto_submit_on_time_up);
        assert_eq!(config.documents_page_size, 10);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn sections_override_individual_fields() {
        let config = parse_config(
            r#"
            [server]
            url = "https://study.example.com/api"
            auth_token = "   "

            [appearance]
            theme = "night"

            [logging]
            log_level = "debug"

            [quiz]
            time_limit_secs = 600
            auto_submit_on_time_up = false
            "#,
        )
        .expect("valid config");

        assert_eq!(config.server_url, "https://study.example.com/api");
        assert_eq!(config.auth_token, None);
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.quiz_time_limit_secs, 600);
        assert!(!config.auto_submit_on_time_up);
        assert_eq!(config.timer_interval_ms, 1000);
        assert_eq!(config.cache_dir, ".cache");
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Night;
        config.auth_token = Some("jwt".to_string());
        config.quizzes_page_size = 5;
        let text = serialize_config(&config).expect("serialize");
        assert_eq!(parse_config(&text).expect("parse"), config);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "studydeck-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[quiz\ntime_limit_secs = ").expect("write temp config");
        assert_eq!(load_config(&path), AppConfig::default());
        let _ = fs::remove_file(&path);
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
