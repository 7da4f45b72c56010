use super::super::state::{App, ToastKind};
use super::Effect;
use std::path::PathBuf;
use studydeck_core::api::{ApiError, DashboardStats, Document, Flashcard, QuizRecord};
use studydeck_core::format::format_bytes;
use studydeck_core::pagination::Page;
use studydeck_core::ticket::Ticket;
use tracing::info;

impl App {
    pub(super) fn request_dashboard(&mut self, effects: &mut Vec<Effect>) {
        let ticket = self.dashboard.begin();
        effects.push(Effect::LoadDashboard(ticket));
    }

    pub(super) fn handle_dashboard_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<DashboardStats, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(err) = self.dashboard.finish(ticket, result) {
            self.report_error(&err, effects);
        }
    }

    pub(super) fn request_documents(&mut self, page: u32, effects: &mut Vec<Effect>) {
        let request = self.documents.list.request(page);
        let ticket = self.documents.list.begin();
        effects.push(Effect::LoadDocuments { ticket, request });
    }

    pub(super) fn handle_documents_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Page<Document>, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(err) = self.documents.list.finish(ticket, "documents", result) {
            self.report_error(&err, effects);
        }
    }

    pub(super) fn handle_upload_documents(&mut self, effects: &mut Vec<Effect>) {
        if self.documents.uploading {
            return;
        }
        match validate_upload(&self.documents.upload_input, self.config.max_upload_bytes) {
            Ok(paths) => {
                self.documents.uploading = true;
                effects.push(Effect::UploadDocuments(paths));
            }
            Err(message) => self.push_toast(ToastKind::Error, message),
        }
    }

    pub(super) fn handle_upload_completed(
        &mut self,
        result: Result<Document, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        self.documents.uploading = false;
        match result {
            Ok(document) => {
                info!(document = %document.id, "Document uploaded");
                self.documents.upload_input.clear();
                self.push_toast(ToastKind::Success, "Document uploaded successfully!");
                self.request_documents(1, effects);
            }
            Err(err) => self.report_error(&err, effects),
        }
    }

    pub(super) fn handle_generate_flashcards(
        &mut self,
        document_id: String,
        effects: &mut Vec<Effect>,
    ) {
        if self.documents.generating.insert(document_id.clone()) {
            effects.push(Effect::GenerateFlashcards(document_id));
        }
    }

    pub(super) fn handle_flashcards_generated(
        &mut self,
        document_id: String,
        result: Result<String, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        self.documents.generating.remove(&document_id);
        match result {
            Ok(message) => {
                let message = if message.trim().is_empty() {
                    "Flashcards generated successfully!".to_string()
                } else {
                    message
                };
                self.push_toast(ToastKind::Success, message);
                let page = self.documents.list.page.current_page();
                self.request_documents(page, effects);
            }
            Err(err) => self.report_error(&err, effects),
        }
    }

    pub(super) fn handle_generate_quiz(&mut self, document_id: String, effects: &mut Vec<Effect>) {
        if self.documents.generating.insert(document_id.clone()) {
            effects.push(Effect::GenerateQuiz(document_id));
        }
    }

    pub(super) fn handle_quiz_generated(
        &mut self,
        document_id: String,
        result: Result<String, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        self.documents.generating.remove(&document_id);
        match result {
            Ok(quiz_id) => {
                info!(%document_id, %quiz_id, "Quiz generated");
                self.push_toast(ToastKind::Success, "Quiz generated successfully!");
                self.handle_open_quiz(quiz_id, effects);
            }
            Err(err) => self.report_error(&err, effects),
        }
    }

    pub(super) fn request_flashcards(&mut self, page: u32, effects: &mut Vec<Effect>) {
        let request = self.flashcards.list.request(page);
        let filter = self.flashcards.filter();
        let ticket = self.flashcards.list.begin();
        effects.push(Effect::LoadFlashcards {
            ticket,
            request,
            filter,
        });
    }

    pub(super) fn handle_flashcards_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Page<Flashcard>, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(err) = self.flashcards.list.finish(ticket, "flashcards", result) {
            self.report_error(&err, effects);
        }
    }

    pub(super) fn handle_toggle_flashcard_answer(&mut self, card_id: String) {
        if !self.flashcards.revealed.remove(&card_id) {
            self.flashcards.revealed.insert(card_id);
        }
    }

    pub(super) fn request_quizzes(&mut self, page: u32, effects: &mut Vec<Effect>) {
        let request = self.quizzes.request(page);
        let ticket = self.quizzes.begin();
        effects.push(Effect::LoadQuizzes { ticket, request });
    }

    pub(super) fn handle_quizzes_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Page<QuizRecord>, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(err) = self.quizzes.finish(ticket, "quizzes", result) {
            self.report_error(&err, effects);
        }
    }
}

/// Split the comma separated path list and check it against the size cap.
fn validate_upload(input: &str, max_bytes: u64) -> Result<Vec<PathBuf>, String> {
    let paths: Vec<PathBuf> = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect();
    if paths.is_empty() {
        return Err("No files selected for upload.".to_string());
    }

    let mut total: u64 = 0;
    for path in &paths {
        let metadata = std::fs::metadata(path)
            .map_err(|err| format!("Cannot read {}: {err}", path.display()))?;
        if !metadata.is_file() {
            return Err(format!("{} is not a file.", path.display()));
        }
        total = total.saturating_add(metadata.len());
    }
    if total > max_bytes {
        return Err(format!(
            "Total file size exceeds {}. Please select smaller files.",
            format_bytes(max_bytes)
        ));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::signed_in_app;
    use std::fs;

    fn temp_file(name: &str, bytes: usize) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "studydeck-upload-{}-{name}",
            std::process::id()
        ));
        fs::write(&path, vec![b'x'; bytes]).expect("write temp file");
        path
    }

    #[test]
    fn upload_requires_files_within_the_cap() {
        assert_eq!(
            validate_upload(" , ", 100),
            Err("No files selected for upload.".to_string())
        );

        let small = temp_file("small.txt", 40);
        let other = temp_file("other.txt", 70);
        let input = format!("{}, {}", small.display(), other.display());

        assert_eq!(validate_upload(&input, 200), Ok(vec![small.clone(), other.clone()]));
        let err = validate_upload(&input, 100).unwrap_err();
        assert!(err.starts_with("Total file size exceeds"));

        let _ = fs::remove_file(small);
        let _ = fs::remove_file(other);
    }

    #[test]
    fn empty_upload_toasts_instead_of_sending() {
        let mut app = signed_in_app();
        let mut effects = Vec::new();
        app.handle_upload_documents(&mut effects);
        assert!(effects.is_empty());
        assert_eq!(app.toasts.items.len(), 1);
        assert!(!app.documents.uploading);
    }

    #[test]
    fn generation_requests_are_not_duplicated() {
        let mut app = signed_in_app();
        let mut effects = Vec::new();
        app.handle_generate_flashcards("doc-1".to_string(), &mut effects);
        app.handle_generate_flashcards("doc-1".to_string(), &mut effects);
        assert_eq!(effects.len(), 1);

        effects.clear();
        app.handle_flashcards_generated(
            "doc-1".to_string(),
            Ok("Flashcards generation started".to_string()),
            &mut effects,
        );
        assert!(app.documents.generating.is_empty());
        assert!(matches!(effects.as_slice(), [Effect::LoadDocuments { .. }]));
    }

    #[test]
    fn generated_quiz_opens_for_attempt() {
        let mut app = signed_in_app();
        let mut effects = Vec::new();
        app.handle_quiz_generated("doc-1".to_string(), Ok("quiz-9".to_string()), &mut effects);
        assert_eq!(app.screen, crate::app::state::Screen::Attempt);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadQuiz { quiz_id, .. }] if quiz_id == "quiz-9"
        ));
    }

    #[test]
    fn revealing_a_flashcard_toggles() {
        let mut app = signed_in_app();
        app.handle_toggle_flashcard_answer("card-1".to_string());
        assert!(app.flashcards.revealed.contains("card-1"));
        app.handle_toggle_flashcard_answer("card-1".to_string());
        assert!(app.flashcards.revealed.is_empty());
    }
}
