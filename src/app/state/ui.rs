use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Dashboard,
    Documents,
    Flashcards,
    Quizzes,
    Attempt,
    Review,
}

impl Screen {
    /// Entries shown in the sidebar, in order.
    pub const SIDEBAR: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Documents,
        Screen::Flashcards,
        Screen::Quizzes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Auth => "Sign in",
            Screen::Dashboard => "Dashboard",
            Screen::Documents => "Documents",
            Screen::Flashcards => "Flashcards",
            Screen::Quizzes => "Quizzes",
            Screen::Attempt => "Quiz",
            Screen::Review => "Quiz review",
        }
    }

    /// Screens that are only reached by opening a specific quiz.
    pub fn is_quiz(self) -> bool {
        matches!(self, Screen::Attempt | Screen::Review)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub(in crate::app) mode: AuthMode,
    pub(in crate::app) name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) password: String,
    pub(in crate::app) submitting: bool,
    pub(in crate::app) error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub(in crate::app) id: u64,
    pub(in crate::app) kind: ToastKind,
    pub(in crate::app) message: String,
    pub(in crate::app) expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    pub(in crate::app) items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub(in crate::app) fn push(
        &mut self,
        kind: ToastKind,
        message: String,
        now: Instant,
        ttl: Duration,
    ) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message,
            expires_at: now + ttl,
        });
        self.next_id
    }

    pub(in crate::app) fn expire(&mut self, now: Instant) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub(in crate::app) fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub(in crate::app) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-attempt UI flags that are not part of the attempt itself.
#[derive(Debug, Default)]
pub struct AttemptUi {
    pub(in crate::app) critical_warned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_and_dismiss() {
        let mut toasts = ToastState::default();
        let now = Instant::now();
        let first = toasts.push(ToastKind::Info, "one".into(), now, Duration::from_secs(1));
        let second = toasts.push(ToastKind::Error, "two".into(), now, Duration::from_secs(5));
        assert_ne!(first, second);

        toasts.expire(now + Duration::from_secs(2));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].id, second);

        toasts.dismiss(second);
        assert!(toasts.is_empty());
    }
}
