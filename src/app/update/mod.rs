use std::path::PathBuf;
use studydeck_core::api::{FlashcardFilter, LoginForm, RegisterForm};
use studydeck_core::attempt::{AttemptMode, SubmitRequest};
use studydeck_core::pagination::PageRequest;
use studydeck_core::ticket::Ticket;

mod attempt;
mod auth;
mod core;
mod library;
mod navigation;
#[cfg(test)]
mod test_support;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    SaveConfig,
    PersistSession,
    ClearSession,
    Authenticate(AuthRequest),
    FetchCurrentUser,
    LoadDashboard(Ticket),
    LoadDocuments {
        ticket: Ticket,
        request: PageRequest,
    },
    UploadDocuments(Vec<PathBuf>),
    GenerateFlashcards(String),
    GenerateQuiz(String),
    LoadFlashcards {
        ticket: Ticket,
        request: PageRequest,
        filter: FlashcardFilter,
    },
    LoadQuizzes {
        ticket: Ticket,
        request: PageRequest,
    },
    LoadQuiz {
        ticket: Ticket,
        quiz_id: String,
        mode: AttemptMode,
    },
    SubmitAttempt(SubmitRequest),
    ScrollQuestionToTop,
}

#[derive(Debug)]
pub(super) enum AuthRequest {
    Login(LoginForm),
    Register(RegisterForm),
}
