//! REST client for the study backend plus the wire shapes it speaks.

mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE, server_message};
pub use models::{
    AttemptOutcome, AttemptSubmission, AuthSession, DashboardQuiz, DashboardStats, Document,
    DocumentRef, DocumentType, Flashcard, FlashcardFilter, LoginForm, QuestionResult,
    QuizItemRecord, QuizRecord, RegisterForm, SubmittedAnswer, TagCount, User, WireKind,
};
