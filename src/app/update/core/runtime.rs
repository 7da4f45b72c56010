use super::super::super::messages::Message;
use super::super::super::state::{App, QUESTION_SCROLL_ID};
use super::super::{AuthRequest, Effect};
use crate::cache::{CachedSession, clear_session, save_session};
use crate::config::save_config;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use std::path::Path;
use studydeck_core::attempt::AttemptMode;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                save_config(&self.config_path, &self.config);
                Task::none()
            }
            Effect::PersistSession => {
                if let Some(token) = self.client.token() {
                    let session = CachedSession {
                        token: token.to_string(),
                        user_name: self.user.as_ref().map(|u| u.name.clone()),
                        user_email: self.user.as_ref().map(|u| u.email.clone()),
                    };
                    save_session(
                        Path::new(&self.config.cache_dir),
                        &self.config.server_url,
                        &session,
                    );
                }
                Task::none()
            }
            Effect::ClearSession => {
                clear_session(Path::new(&self.config.cache_dir), &self.config.server_url);
                Task::none()
            }
            Effect::Authenticate(request) => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        match request {
                            AuthRequest::Login(form) => client.login(&form).await,
                            AuthRequest::Register(form) => client.register(&form).await,
                        }
                    },
                    Message::AuthCompleted,
                )
            }
            Effect::FetchCurrentUser => {
                let client = self.client.clone();
                Task::perform(
                    async move { client.current_user().await },
                    Message::UserLoaded,
                )
            }
            Effect::LoadDashboard(ticket) => {
                let client = self.client.clone();
                debug!(%ticket, "Dispatching dashboard load");
                Task::perform(async move { client.dashboard_stats().await }, move |result| {
                    Message::DashboardLoaded { ticket, result }
                })
            }
            Effect::LoadDocuments { ticket, request } => {
                let client = self.client.clone();
                debug!(%ticket, page = request.page, "Dispatching documents load");
                Task::perform(async move { client.list_documents(request).await }, move |result| {
                    Message::DocumentsLoaded { ticket, result }
                })
            }
            Effect::UploadDocuments(paths) => {
                let client = self.client.clone();
                info!(files = paths.len(), "Uploading documents");
                Task::perform(
                    async move { client.upload_documents(&paths).await },
                    Message::UploadCompleted,
                )
            }
            Effect::GenerateFlashcards(document_id) => {
                let client = self.client.clone();
                info!(%document_id, "Requesting flashcard generation");
                Task::perform(
                    async move {
                        let result = client.generate_flashcards(&document_id).await;
                        Message::FlashcardsGenerated {
                            document_id,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::GenerateQuiz(document_id) => {
                let client = self.client.clone();
                info!(%document_id, "Requesting quiz generation");
                Task::perform(
                    async move {
                        let result = client.generate_quiz(&document_id).await;
                        Message::QuizGenerated {
                            document_id,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadFlashcards {
                ticket,
                request,
                filter,
            } => {
                let client = self.client.clone();
                debug!(%ticket, page = request.page, "Dispatching flashcards load");
                Task::perform(
                    async move { client.list_flashcards(request, &filter).await },
                    move |result| Message::FlashcardsLoaded { ticket, result },
                )
            }
            Effect::LoadQuizzes { ticket, request } => {
                let client = self.client.clone();
                debug!(%ticket, page = request.page, "Dispatching quizzes load");
                Task::perform(
                    async move { client.list_quizzes(request, None).await },
                    move |result| Message::QuizzesLoaded { ticket, result },
                )
            }
            Effect::LoadQuiz {
                ticket,
                quiz_id,
                mode,
            } => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        match mode {
                            AttemptMode::Live => client.quiz(&quiz_id).await,
                            AttemptMode::Review => client.attempt(&quiz_id).await,
                        }
                    },
                    move |result| Message::QuizLoaded { ticket, result },
                )
            }
            Effect::SubmitAttempt(request) => {
                let client = self.client.clone();
                let ticket = request.ticket;
                Task::perform(
                    async move {
                        client
                            .submit_attempt(&request.quiz_id, &request.submission)
                            .await
                    },
                    move |result| Message::QuizSubmitted { ticket, result },
                )
            }
            Effect::ScrollQuestionToTop => {
                scrollable::snap_to(QUESTION_SCROLL_ID.clone(), RelativeOffset::START)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
