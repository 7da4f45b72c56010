use super::super::state::{App, AttemptUi, Screen, ToastKind};
use super::Effect;
use studydeck_core::api::ApiError;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn initial_effects(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_signed_in() {
            effects.push(Effect::FetchCurrentUser);
            self.refresh_screen(&mut effects);
        }
        effects
    }

    pub(super) fn handle_navigate(&mut self, screen: Screen, effects: &mut Vec<Effect>) {
        if !self.is_signed_in() {
            self.screen = Screen::Auth;
            return;
        }
        if screen.is_quiz() || screen == Screen::Auth {
            debug!(?screen, "Ignoring direct navigation");
            return;
        }
        self.leave_attempt();
        self.screen = screen;
        self.refresh_screen(effects);
    }

    /// Re-fetch whatever the current screen shows.
    pub(super) fn refresh_screen(&mut self, effects: &mut Vec<Effect>) {
        match self.screen {
            Screen::Dashboard => self.request_dashboard(effects),
            Screen::Documents => {
                let page = self.documents.list.page.current_page();
                self.request_documents(page, effects);
            }
            Screen::Flashcards => {
                let page = self.flashcards.list.page.current_page();
                self.request_flashcards(page, effects);
            }
            Screen::Quizzes => {
                let page = self.quizzes.page.current_page();
                self.request_quizzes(page, effects);
            }
            Screen::Auth | Screen::Attempt | Screen::Review => {}
        }
    }

    /// Drop the open quiz, if any. Pending responses for it become stale.
    pub(super) fn leave_attempt(&mut self) {
        if self.screen.is_quiz() {
            info!(
                quiz_id = %self.attempt.meta().id,
                phase = ?self.attempt.phase(),
                "Leaving quiz"
            );
        }
        self.attempt.reset();
        self.attempt_ui = AttemptUi::default();
    }

    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Theme changed");
        effects.push(Effect::SaveConfig);
    }

    /// Show the error to the user; a rejected token also ends the session.
    pub(super) fn report_error(&mut self, err: &ApiError, effects: &mut Vec<Effect>) {
        warn!("Request failed: {err}");
        if err.is_unauthorized() && self.is_signed_in() {
            self.sign_out(effects);
            self.push_toast(
                ToastKind::Error,
                "Your session has expired. Please sign in again.",
            );
            return;
        }
        self.push_toast(ToastKind::Error, err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::{signed_in_app, signed_out_app};

    #[test]
    fn signed_out_users_stay_on_auth() {
        let mut app = signed_out_app();
        assert_eq!(app.screen, Screen::Auth);
        assert!(app.initial_effects().is_empty());

        let mut effects = Vec::new();
        app.handle_navigate(Screen::Documents, &mut effects);
        assert_eq!(app.screen, Screen::Auth);
        assert!(effects.is_empty());
    }

    #[test]
    fn sidebar_navigation_loads_the_screen() {
        let mut app = signed_in_app();
        let boot = app.initial_effects();
        assert!(matches!(boot[0], Effect::FetchCurrentUser));
        assert!(matches!(boot[1], Effect::LoadDashboard(_)));

        let mut effects = Vec::new();
        app.handle_navigate(Screen::Quizzes, &mut effects);
        assert_eq!(app.screen, Screen::Quizzes);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadQuizzes { request, .. }] if request.page == 1 && request.limit == 20
        ));

        effects.clear();
        app.handle_navigate(Screen::Attempt, &mut effects);
        assert_eq!(app.screen, Screen::Quizzes);
        assert!(effects.is_empty());
    }

    #[test]
    fn theme_toggle_is_saved() {
        let mut app = signed_in_app();
        let before = app.config.theme;
        let mut effects = Vec::new();
        app.handle_toggle_theme(&mut effects);
        assert_ne!(app.config.theme, before);
        assert!(matches!(effects.as_slice(), [Effect::SaveConfig]));
    }

    #[test]
    fn unauthorized_errors_sign_out() {
        let mut app = signed_in_app();
        app.screen = Screen::Documents;
        let mut effects = Vec::new();
        app.report_error(
            &ApiError::Status {
                status: 401,
                message: Some("Invalid token".to_string()),
            },
            &mut effects,
        );
        assert!(!app.is_signed_in());
        assert_eq!(app.screen, Screen::Auth);
        assert!(effects.iter().any(|e| matches!(e, Effect::ClearSession)));
        assert_eq!(app.toasts.items.len(), 1);
    }
}
