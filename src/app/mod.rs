mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};
use std::path::PathBuf;
use studydeck_core::api::ApiClient;

/// Helper to launch the dashboard with the loaded config and client.
pub fn run_app(config: AppConfig, config_path: PathBuf, client: ApiClient) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(720.0, 480.0)),
        ..window::Settings::default()
    };

    iced::application("StudyDeck", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| match app.config.theme {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        })
        .run_with(move || App::bootstrap(config, config_path, client))
}
