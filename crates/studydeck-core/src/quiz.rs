//! Domain types for quizzes as the attempt flow sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

impl Difficulty {
    pub fn as_query_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String> },
    TrueFalse,
    FillInBlank,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "Multiple choice",
            QuestionKind::TrueFalse => "True / False",
            QuestionKind::FillInBlank => "Fill in the blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    /// Whether `answer` is a legal response for this kind of question.
    pub fn accepts(&self, answer: &str) -> bool {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options.iter().any(|o| o == answer),
            QuestionKind::TrueFalse => answer == TRUE_LABEL || answer == FALSE_LABEL,
            QuestionKind::FillInBlank => true,
        }
    }

    /// Fixed choices offered to the user; empty for free-text questions.
    pub fn choices(&self) -> Vec<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                options.iter().map(String::as_str).collect()
            }
            QuestionKind::TrueFalse => vec![TRUE_LABEL, FALSE_LABEL],
            QuestionKind::FillInBlank => Vec::new(),
        }
    }
}

/// A question together with the user's answer and, once graded, its result.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptQuestion {
    pub question: QuizQuestion,
    pub answer: Option<String>,
    pub is_correct: Option<bool>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

impl AttemptQuestion {
    pub fn new(question: QuizQuestion) -> Self {
        Self {
            question,
            answer: None,
            is_correct: None,
            correct_answer: None,
            explanation: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }
}

/// Everything the attempt flow needs from a loaded quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDetails {
    pub id: String,
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub attempted_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
    pub duration_secs: Option<u64>,
    pub questions: Vec<AttemptQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(kind: QuestionKind) -> QuizQuestion {
        QuizQuestion {
            id: "q1".to_string(),
            kind,
            prompt: "Prompt".to_string(),
            tags: Vec::new(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn multiple_choice_accepts_only_listed_options() {
        let q = question(QuestionKind::MultipleChoice {
            options: vec!["Paris".to_string(), "Rome".to_string()],
        });
        assert!(q.accepts("Rome"));
        assert!(!q.accepts("rome"));
        assert_eq!(q.choices(), vec!["Paris", "Rome"]);
    }

    #[test]
    fn true_false_uses_capitalised_labels() {
        let q = question(QuestionKind::TrueFalse);
        assert!(q.accepts("True"));
        assert!(q.accepts("False"));
        assert!(!q.accepts("yes"));
    }

    #[test]
    fn fill_in_blank_accepts_any_text_but_blank_is_unanswered() {
        let q = question(QuestionKind::FillInBlank);
        assert!(q.accepts(""));
        assert!(q.choices().is_empty());

        let mut attempt = AttemptQuestion::new(q);
        attempt.answer = Some("   ".to_string());
        assert!(!attempt.is_answered());
        attempt.answer = Some("mitochondria".to_string());
        assert!(attempt.is_answered());
    }
}
