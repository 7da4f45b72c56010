mod constants;
mod library;
mod ui;

use crate::config::AppConfig;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;
use studydeck_core::api::{ApiClient, User};
use studydeck_core::attempt::QuizSession;
use studydeck_core::timer::{BoxedClock, QuizTimer, SystemClock, TimerOptions};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use library::{
    DashboardState, DocumentsState, FlashcardsState, ListState, QuizzesState,
};
pub use library::DifficultyChoice;
pub(in crate::app) use ui::{AttemptUi, AuthForm, AuthMode, ToastKind, ToastState};
pub use ui::Screen;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) config_path: PathBuf,
    pub(super) client: ApiClient,
    pub(super) screen: Screen,
    pub(super) user: Option<User>,
    pub(super) auth: AuthForm,
    pub(super) dashboard: DashboardState,
    pub(super) documents: DocumentsState,
    pub(super) flashcards: FlashcardsState,
    pub(super) quizzes: QuizzesState,
    pub(super) attempt: QuizSession<BoxedClock>,
    pub(super) attempt_ui: AttemptUi,
    pub(super) toasts: ToastState,
}

impl App {
    pub(super) fn new(config: AppConfig, config_path: PathBuf, client: ApiClient) -> App {
        App::with_clock(config, config_path, client, Box::new(SystemClock))
    }

    pub(super) fn with_clock(
        config: AppConfig,
        config_path: PathBuf,
        client: ApiClient,
        clock: BoxedClock,
    ) -> App {
        let timer = QuizTimer::with_clock(timer_options(&config), clock);
        let screen = if client.token().is_some() {
            Screen::Dashboard
        } else {
            Screen::Auth
        };
        App {
            screen,
            user: None,
            auth: AuthForm::default(),
            dashboard: DashboardState::default(),
            documents: DocumentsState::new(config.documents_page_size),
            flashcards: FlashcardsState::new(config.flashcards_page_size),
            quizzes: ListState::new(config.quizzes_page_size),
            attempt: QuizSession::new(timer),
            attempt_ui: AttemptUi::default(),
            toasts: ToastState::default(),
            config,
            config_path,
            client,
        }
    }

    pub(super) fn bootstrap(
        config: AppConfig,
        config_path: PathBuf,
        client: ApiClient,
    ) -> (App, Task<Message>) {
        let mut app = App::new(config, config_path, client);
        info!(
            server = %app.client.base_url(),
            signed_in = app.is_signed_in(),
            "Bootstrapping dashboard"
        );
        let task = app.boot();
        (app, task)
    }

    pub(super) fn is_signed_in(&self) -> bool {
        self.client.token().is_some()
    }

    pub(super) fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        let ttl = self.config.toast_duration();
        self.toasts.push(kind, message.into(), Instant::now(), ttl);
    }

    pub(super) fn user_label(&self) -> String {
        match &self.user {
            Some(user) if !user.name.trim().is_empty() => user.name.clone(),
            Some(user) => user.email.clone(),
            None => "Signed in".to_string(),
        }
    }
}

fn timer_options(config: &AppConfig) -> TimerOptions {
    TimerOptions {
        auto_start: false,
        time_limit_secs: config.quiz_time_limit_secs,
        interval: config.timer_interval(),
    }
}
