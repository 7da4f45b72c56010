//! Entry point for the StudyDeck dashboard.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional config path argument.
//! - Load user configuration (default `conf/config.toml`).
//! - Build the REST client, restoring a cached session token.
//! - Launch the GUI application.

mod app;
mod cache;
mod config;

use crate::app::run_app;
use crate::cache::load_session;
use crate::config::{DEFAULT_CONFIG_PATH, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use studydeck_core::api::ApiClient;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config_path = parse_args()?;
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        config = %config_path.display(),
        server = %config.server_url,
        level = %config.log_level,
        "Starting StudyDeck"
    );
    info!(
        time_limit_secs = config.quiz_time_limit_secs,
        interval_ms = config.timer_interval_ms,
        auto_submit = config.auto_submit_on_time_up,
        "Active quiz timer configuration"
    );

    let cached = load_session(Path::new(&config.cache_dir), &config.server_url);
    if cached.is_some() {
        info!("Resuming cached session");
    }
    let token = cached
        .map(|session| session.token)
        .or_else(|| config.auth_token.clone());
    let client = ApiClient::new(&config.server_url, config.request_timeout())
        .map_err(|err| anyhow!("{err}"))
        .context("Failed to build the API client")?
        .with_token(token);

    run_app(config, config_path, client).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(PathBuf::from(DEFAULT_CONFIG_PATH));
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: studydeck [path-to-config.toml]"));
    }
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("Config file not found: {}", path.display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
