use super::super::super::messages::Message;
use super::super::super::state::{App, Screen};
use super::super::Effect;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Navigate(screen) => self.handle_navigate(screen, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::AuthNameChanged(name) => self.auth.name = name,
            Message::AuthEmailChanged(email) => self.auth.email = email,
            Message::AuthPasswordChanged(password) => self.auth.password = password,
            Message::ToggleAuthMode => self.handle_toggle_auth_mode(),
            Message::SubmitAuth => self.handle_submit_auth(&mut effects),
            Message::AuthCompleted(result) => self.handle_auth_completed(result, &mut effects),
            Message::UserLoaded(result) => self.handle_user_loaded(result, &mut effects),
            Message::SignOut => self.sign_out(&mut effects),
            Message::RefreshDashboard => self.request_dashboard(&mut effects),
            Message::DashboardLoaded { ticket, result } => {
                self.handle_dashboard_loaded(ticket, result, &mut effects)
            }
            Message::LoadDocuments(page) => self.request_documents(page, &mut effects),
            Message::DocumentsLoaded { ticket, result } => {
                self.handle_documents_loaded(ticket, result, &mut effects)
            }
            Message::UploadPathsChanged(input) => self.documents.upload_input = input,
            Message::UploadDocuments => self.handle_upload_documents(&mut effects),
            Message::UploadCompleted(result) => self.handle_upload_completed(result, &mut effects),
            Message::GenerateFlashcards(document_id) => {
                self.handle_generate_flashcards(document_id, &mut effects)
            }
            Message::FlashcardsGenerated {
                document_id,
                result,
            } => self.handle_flashcards_generated(document_id, result, &mut effects),
            Message::GenerateQuiz(document_id) => {
                self.handle_generate_quiz(document_id, &mut effects)
            }
            Message::QuizGenerated {
                document_id,
                result,
            } => self.handle_quiz_generated(document_id, result, &mut effects),
            Message::LoadFlashcards(page) => self.request_flashcards(page, &mut effects),
            Message::FlashcardsLoaded { ticket, result } => {
                self.handle_flashcards_loaded(ticket, result, &mut effects)
            }
            Message::FlashcardDifficultyChanged(choice) => {
                self.flashcards.difficulty = choice;
                self.request_flashcards(1, &mut effects);
            }
            Message::FlashcardTagsChanged(tags) => self.flashcards.tags_input = tags,
            Message::ApplyFlashcardFilter => self.request_flashcards(1, &mut effects),
            Message::ToggleFlashcardAnswer(card_id) => self.handle_toggle_flashcard_answer(card_id),
            Message::LoadQuizzes(page) => self.request_quizzes(page, &mut effects),
            Message::QuizzesLoaded { ticket, result } => {
                self.handle_quizzes_loaded(ticket, result, &mut effects)
            }
            Message::OpenQuiz(quiz_id) => self.handle_open_quiz(quiz_id, &mut effects),
            Message::ReviewQuiz(quiz_id) => self.handle_review_quiz(quiz_id, &mut effects),
            Message::QuizLoaded { ticket, result } => {
                self.handle_quiz_loaded(ticket, result, &mut effects)
            }
            Message::StartQuiz => self.handle_start_quiz(&mut effects),
            Message::SelectQuestion(index) => self.handle_select_question(index, &mut effects),
            Message::NextQuestion => self.handle_next_question(&mut effects),
            Message::PreviousQuestion => self.handle_previous_question(&mut effects),
            Message::OptionChosen(index) => self.handle_option_chosen(index),
            Message::AnswerInputChanged(answer) => self.handle_answer_input(answer),
            Message::SubmitQuiz => self.handle_submit_quiz(&mut effects),
            Message::QuizSubmitted { ticket, result } => {
                self.handle_quiz_submitted(ticket, result, &mut effects)
            }
            Message::LeaveQuiz => self.handle_navigate(Screen::Quizzes, &mut effects),
            Message::Tick(_) => self.handle_tick(&mut effects),
            Message::ExpireToasts(now) => self.toasts.expire(now),
            Message::DismissToast(id) => self.toasts.dismiss(id),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(&key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }

    /// Arrow keys page through questions on the quiz screens.
    fn shortcut_message_for_key(&self, key: &Key, modifiers: Modifiers) -> Option<Message> {
        if !self.screen.is_quiz() || !modifiers.is_empty() {
            return None;
        }
        match key {
            Key::Named(Named::ArrowRight) => Some(Message::NextQuestion),
            Key::Named(Named::ArrowLeft) => Some(Message::PreviousQuestion),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::signed_in_app;

    #[test]
    fn arrow_keys_only_navigate_on_quiz_screens() {
        let mut app = signed_in_app();
        let right = Key::Named(Named::ArrowRight);
        assert!(
            app.shortcut_message_for_key(&right, Modifiers::empty())
                .is_none()
        );

        app.screen = Screen::Attempt;
        assert!(matches!(
            app.shortcut_message_for_key(&right, Modifiers::empty()),
            Some(Message::NextQuestion)
        ));
        assert!(
            app.shortcut_message_for_key(&right, Modifiers::SHIFT)
                .is_none()
        );
    }
}
