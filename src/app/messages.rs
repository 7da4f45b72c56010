use super::state::{DifficultyChoice, Screen};
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;
use studydeck_core::api::{
    ApiError, AttemptOutcome, AuthSession, DashboardStats, Document, Flashcard, QuizRecord, User,
};
use studydeck_core::pagination::Page;
use studydeck_core::quiz::QuizDetails;
use studydeck_core::ticket::Ticket;

/// Messages emitted by the UI and by finished background work.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleTheme,
    AuthNameChanged(String),
    AuthEmailChanged(String),
    AuthPasswordChanged(String),
    ToggleAuthMode,
    SubmitAuth,
    AuthCompleted(Result<AuthSession, ApiError>),
    UserLoaded(Result<User, ApiError>),
    SignOut,
    RefreshDashboard,
    DashboardLoaded {
        ticket: Ticket,
        result: Result<DashboardStats, ApiError>,
    },
    LoadDocuments(u32),
    DocumentsLoaded {
        ticket: Ticket,
        result: Result<Page<Document>, ApiError>,
    },
    UploadPathsChanged(String),
    UploadDocuments,
    UploadCompleted(Result<Document, ApiError>),
    GenerateFlashcards(String),
    FlashcardsGenerated {
        document_id: String,
        result: Result<String, ApiError>,
    },
    GenerateQuiz(String),
    QuizGenerated {
        document_id: String,
        result: Result<String, ApiError>,
    },
    LoadFlashcards(u32),
    FlashcardsLoaded {
        ticket: Ticket,
        result: Result<Page<Flashcard>, ApiError>,
    },
    FlashcardDifficultyChanged(DifficultyChoice),
    FlashcardTagsChanged(String),
    ApplyFlashcardFilter,
    ToggleFlashcardAnswer(String),
    LoadQuizzes(u32),
    QuizzesLoaded {
        ticket: Ticket,
        result: Result<Page<QuizRecord>, ApiError>,
    },
    OpenQuiz(String),
    ReviewQuiz(String),
    QuizLoaded {
        ticket: Ticket,
        result: Result<QuizDetails, ApiError>,
    },
    StartQuiz,
    SelectQuestion(usize),
    NextQuestion,
    PreviousQuestion,
    OptionChosen(usize),
    AnswerInputChanged(String),
    SubmitQuiz,
    QuizSubmitted {
        ticket: Ticket,
        result: Result<AttemptOutcome, ApiError>,
    },
    LeaveQuiz,
    Tick(Instant),
    ExpireToasts(Instant),
    DismissToast(u64),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
