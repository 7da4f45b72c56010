//! Wire shapes exchanged with the backend.
//!
//! Records mirror the JSON field names (`_id`, camelCase) and are converted
//! into the domain types in [`crate::quiz`] at the edge.

use crate::pagination::Pagination;
use crate::quiz::{AttemptQuestion, Difficulty, QuestionKind, QuizDetails, QuizQuestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "true_false")]
    TrueFalse,
    #[serde(rename = "fill_blank")]
    FillInBlank,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItemRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub kind: WireKind,
    pub prompt: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizItemRecord {
    pub fn into_question(self, index: usize) -> QuizQuestion {
        let kind = match self.kind {
            WireKind::MultipleChoice => QuestionKind::MultipleChoice {
                options: self.options.unwrap_or_default(),
            },
            WireKind::TrueFalse => QuestionKind::TrueFalse,
            WireKind::FillInBlank => QuestionKind::FillInBlank,
        };
        QuizQuestion {
            id: self.id.unwrap_or_else(|| format!("q{}", index + 1)),
            kind,
            prompt: self.prompt,
            tags: self.tags,
            difficulty: self.difficulty,
        }
    }

    /// Convert into attempt state; review loads seed the answer from `userAnswer`.
    pub fn into_attempt_question(mut self, index: usize, seed_answers: bool) -> AttemptQuestion {
        let answer = if seed_answers {
            Some(self.user_answer.take().unwrap_or_default())
        } else {
            None
        };
        let is_correct = self.is_correct;
        let correct_answer = self.correct_answer.take();
        let explanation = self.explanation.take();
        AttemptQuestion {
            question: self.into_question(index),
            answer,
            is_correct,
            correct_answer,
            explanation,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Option<Vec<QuizItemRecord>>,
    #[serde(default)]
    pub attempted: bool,
    #[serde(default)]
    pub attempted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuizRecord {
    pub fn question_count(&self) -> usize {
        self.items.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn into_details(self, requested_id: &str, seed_answers: bool) -> QuizDetails {
        let id = if self.id.is_empty() {
            requested_id.to_string()
        } else {
            self.id
        };
        let questions = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_attempt_question(index, seed_answers))
            .collect();
        QuizDetails {
            id,
            title: self.title,
            created_at: self.created_at,
            attempted_at: self.attempted_date,
            score: self.score,
            duration_secs: self.duration,
            questions,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizEnvelope {
    #[serde(default)]
    pub quiz: Option<QuizRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_index: usize,
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptSubmission {
    pub answers: Vec<SubmittedAnswer>,
    /// Seconds spent on the attempt.
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutcome {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub results: Vec<QuestionResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AttemptResponse {
    pub attempt: AttemptOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
    Txt,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Docx => "DOCX",
            DocumentType::Txt => "TXT",
            DocumentType::Other => "File",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: DocumentType,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub size: u64,
    /// Whether flashcard generation has finished for this document.
    #[serde(default)]
    pub flash_card_status: bool,
    #[serde(default)]
    pub flashcards: u32,
    #[serde(default)]
    pub quizzes: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DocumentRef {
    Id(String),
    Full(Box<Document>),
}

impl DocumentRef {
    pub fn title(&self) -> Option<&str> {
        match self {
            DocumentRef::Id(_) => None,
            DocumentRef::Full(doc) => Some(doc.title.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub document: Option<DocumentRef>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FlashcardFilter {
    pub document: Option<String>,
    pub tags: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl FlashcardFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(document) = self.document.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("document", document.to_string()));
        }
        if let Some(tags) = self.tags.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("tags", tags.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_query_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentList {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlashcardList {
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizList {
    #[serde(default)]
    pub quizzes: Vec<QuizRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub document: Document,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneratedQuiz {
    pub quiz_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuiz {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total_ques: u32,
    #[serde(default)]
    pub correct_answer: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagCount {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_doc: u32,
    pub total_flashcard: u32,
    pub total_quiz: u32,
    pub quiz_list: Vec<DashboardQuiz>,
    pub document_generated: u32,
    pub document_waiting: u32,
    pub easy_quiz: u32,
    pub medium_quiz: u32,
    pub hard_quiz: u32,
    pub total_ques: u32,
    pub avg_duration: f64,
    pub percent_avg_duration: f64,
    pub avg_score: f64,
    pub percent_avg_score: f64,
    pub total_flashcard_tags: u32,
    pub flash_cards_tags: Vec<TagCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUser {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_items_decode_into_question_kinds() {
        let json = r#"{
            "quiz": {
                "_id": "quiz-7",
                "title": "Cell biology",
                "createdAt": "2025-03-01T10:00:00Z",
                "items": [
                    {"_id": "a", "kind": "mcq", "prompt": "Powerhouse?", "options": ["Nucleus", "Mitochondria"], "tags": ["cells"], "difficulty": "easy"},
                    {"_id": "b", "kind": "true_false", "prompt": "DNA is a protein.", "tags": [], "difficulty": "medium"},
                    {"kind": "fill_blank", "prompt": "The ___ stores genes.", "tags": ["dna"], "difficulty": "hard"}
                ]
            }
        }"#;
        let envelope: QuizEnvelope = serde_json::from_str(json).unwrap();
        let details = envelope.quiz.unwrap().into_details("quiz-7", false);

        assert_eq!(details.title, "Cell biology");
        assert!(details.created_at.is_some());
        assert_eq!(details.questions.len(), 3);
        assert_eq!(
            details.questions[0].question.kind,
            QuestionKind::MultipleChoice {
                options: vec!["Nucleus".to_string(), "Mitochondria".to_string()]
            }
        );
        assert_eq!(details.questions[1].question.kind, QuestionKind::TrueFalse);
        assert_eq!(details.questions[2].question.kind, QuestionKind::FillInBlank);
        assert_eq!(details.questions[2].question.id, "q3");
        assert_eq!(details.questions[2].question.difficulty, Difficulty::Hard);
        assert!(details.questions.iter().all(|q| q.answer.is_none()));
    }

    #[test]
    fn review_items_seed_answers_and_results() {
        let json = r#"{
            "_id": "quiz-9",
            "title": "Review",
            "attempted": true,
            "score": 50,
            "duration": 84,
            "items": [
                {"kind": "true_false", "prompt": "Sky is blue", "userAnswer": "True", "isCorrect": true, "correctAnswer": "True", "explanation": "Rayleigh scattering"},
                {"kind": "fill_blank", "prompt": "2 + 2 = ___", "isCorrect": false, "correctAnswer": "4"}
            ]
        }"#;
        let record: QuizRecord = serde_json::from_str(json).unwrap();
        let details = record.into_details("quiz-9", true);

        assert_eq!(details.duration_secs, Some(84));
        assert_eq!(details.questions[0].answer.as_deref(), Some("True"));
        assert_eq!(details.questions[0].is_correct, Some(true));
        assert_eq!(
            details.questions[0].explanation.as_deref(),
            Some("Rayleigh scattering")
        );
        assert_eq!(details.questions[1].answer.as_deref(), Some(""));
        assert_eq!(details.questions[1].correct_answer.as_deref(), Some("4"));
    }

    #[test]
    fn submission_serializes_with_camel_case_fields() {
        let submission = AttemptSubmission {
            answers: vec![SubmittedAnswer {
                question_index: 0,
                user_answer: "True".to_string(),
            }],
            duration: 42,
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "answers": [{"questionIndex": 0, "userAnswer": "True"}],
                "duration": 42
            })
        );
    }

    #[test]
    fn flashcard_document_may_be_id_or_object() {
        let by_id: Flashcard = serde_json::from_str(
            r#"{"_id": "f1", "document": "d1", "question": "Q", "answer": "A", "difficulty": "easy"}"#,
        )
        .unwrap();
        assert_eq!(by_id.document, Some(DocumentRef::Id("d1".to_string())));

        let populated: Flashcard = serde_json::from_str(
            r#"{"_id": "f2", "document": {"_id": "d2", "title": "Notes", "type": "pdf"}, "question": "Q", "answer": "A"}"#,
        )
        .unwrap();
        assert_eq!(
            populated.document.as_ref().and_then(DocumentRef::title),
            Some("Notes")
        );
    }

    #[test]
    fn flashcard_filter_skips_empty_values() {
        let filter = FlashcardFilter {
            document: Some(String::new()),
            tags: Some("  biology ".to_string()),
            difficulty: Some(Difficulty::Hard),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("tags", "biology".to_string()),
                ("difficulty", "hard".to_string())
            ]
        );
    }

    #[test]
    fn dashboard_stats_tolerate_missing_fields() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalDoc": 3, "avgScore": 72.5, "flashCardsTags": [{"label": "dna", "value": 4}]}"#,
        )
        .unwrap();
        assert_eq!(stats.total_doc, 3);
        assert_eq!(stats.total_quiz, 0);
        assert_eq!(stats.flash_cards_tags[0].label, "dna");
    }
}
