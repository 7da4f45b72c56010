use super::super::state::App;
use crate::config::AppConfig;
use std::path::PathBuf;
use std::time::Duration;
use studydeck_core::api::ApiClient;
use studydeck_core::timer::ManualClock;

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.cache_dir = std::env::temp_dir()
        .join(format!("studydeck-app-test-{}", std::process::id()))
        .to_string_lossy()
        .into_owned();
    config
}

fn build_app(config: AppConfig, token: Option<&str>, clock: ManualClock) -> App {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1))
        .expect("client")
        .with_token(token.map(str::to_string));
    App::with_clock(
        config,
        PathBuf::from("/tmp/studydeck-test-config.toml"),
        client,
        Box::new(clock),
    )
}

pub(super) fn signed_in_app() -> App {
    build_app(test_config(), Some("test-token"), ManualClock::new())
}

pub(super) fn signed_out_app() -> App {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client");
    App::new(
        test_config(),
        PathBuf::from("/tmp/studydeck-test-config.toml"),
        client,
    )
}

/// Signed-in app whose attempt timer runs on virtual time.
pub(super) fn timed_app(time_limit_secs: u64, auto_submit: bool) -> (App, ManualClock) {
    let mut config = test_config();
    config.quiz_time_limit_secs = time_limit_secs;
    config.auto_submit_on_time_up = auto_submit;
    let clock = ManualClock::new();
    let app = build_app(config, Some("test-token"), clock.clone());
    (app, clock)
}
