use super::super::state::{App, AuthForm, AuthMode, Screen, ToastKind};
use super::{AuthRequest, Effect};
use studydeck_core::api::{ApiError, AuthSession, LoginForm, RegisterForm, User};
use tracing::{info, warn};

impl App {
    pub(super) fn handle_toggle_auth_mode(&mut self) {
        self.auth.mode = match self.auth.mode {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        };
        self.auth.error = None;
    }

    pub(super) fn handle_submit_auth(&mut self, effects: &mut Vec<Effect>) {
        if self.auth.submitting {
            return;
        }
        let email = self.auth.email.trim().to_string();
        let password = self.auth.password.clone();
        let name = self.auth.name.trim().to_string();

        let missing = email.is_empty()
            || password.is_empty()
            || (self.auth.mode == AuthMode::Register && name.is_empty());
        if missing {
            self.auth.error = Some("Please fill in all fields.".to_string());
            return;
        }

        self.auth.submitting = true;
        self.auth.error = None;
        let request = match self.auth.mode {
            AuthMode::SignIn => AuthRequest::Login(LoginForm { email, password }),
            AuthMode::Register => AuthRequest::Register(RegisterForm {
                name,
                email,
                password,
            }),
        };
        info!(mode = ?self.auth.mode, "Submitting credentials");
        effects.push(Effect::Authenticate(request));
    }

    pub(super) fn handle_auth_completed(
        &mut self,
        result: Result<AuthSession, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        self.auth.submitting = false;
        let session = match result {
            Ok(session) => session,
            Err(err) => {
                warn!("Authentication failed: {err}");
                self.auth.error = Some(err.user_message());
                return;
            }
        };

        let welcome = match self.auth.mode {
            AuthMode::SignIn => "Signed in successfully!",
            AuthMode::Register => "Account created successfully!",
        };
        self.client.set_token(Some(session.token));
        if !self.is_signed_in() {
            self.auth.error = Some(studydeck_core::api::GENERIC_ERROR_MESSAGE.to_string());
            return;
        }
        self.auth = AuthForm::default();
        match session.user {
            Some(user) => self.user = Some(user),
            None => effects.push(Effect::FetchCurrentUser),
        }
        info!("Session established");
        effects.push(Effect::PersistSession);
        self.push_toast(ToastKind::Success, welcome);
        self.screen = Screen::Dashboard;
        self.refresh_screen(effects);
    }

    pub(super) fn handle_user_loaded(
        &mut self,
        result: Result<User, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(user) => {
                info!(user = %user.email, "Loaded current user");
                self.user = Some(user);
                effects.push(Effect::PersistSession);
            }
            Err(err) if err.is_unauthorized() => self.report_error(&err, effects),
            Err(err) => warn!("Could not load the current user: {err}"),
        }
    }

    /// Forget the token and every per-user view.
    pub(super) fn sign_out(&mut self, effects: &mut Vec<Effect>) {
        if self.is_signed_in() {
            info!("Signing out");
        }
        self.leave_attempt();
        self.client.set_token(None);
        self.user = None;
        self.dashboard.clear();
        self.documents.list.clear();
        self.documents.generating.clear();
        self.documents.uploading = false;
        self.flashcards.list.clear();
        self.flashcards.revealed.clear();
        self.quizzes.clear();
        self.screen = Screen::Auth;
        effects.push(Effect::ClearSession);
    }
}
