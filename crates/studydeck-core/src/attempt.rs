//! Quiz attempt flow.
//!
//! `QuizSession` owns the questions of one quiz, the selected question, the
//! answers and the attempt timer. Network calls happen elsewhere: the session
//! hands out a [`Ticket`] when a load or submission starts and only applies
//! the completion if that ticket is still current.
//!
//! Operations called in the wrong state are ignored and return `false` /
//! `None`; the UI is expected to disable the matching controls.

use crate::api::{ApiError, AttemptOutcome, AttemptSubmission, SubmittedAnswer};
use crate::quiz::{AttemptQuestion, QuizDetails};
use crate::ticket::{Generation, Ticket};
use crate::timer::{Clock, QuizTimer, SystemClock, TimerEvent};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptMode {
    /// A fresh, timed attempt that ends in a submission.
    Live,
    /// Read-only replay of a submitted attempt.
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    Idle,
    Loading,
    NotStarted,
    InProgress,
    Submitting,
    Submitted,
    Review,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { questions: usize },
    Failed(String),
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(AttemptOutcome),
    Failed(String),
    Stale,
}

/// Everything needed to send a submission to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub ticket: Ticket,
    pub quiz_id: String,
    pub submission: AttemptSubmission,
}

/// Header information about the loaded quiz.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizMeta {
    pub id: String,
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub attempted_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
    pub duration_secs: Option<u64>,
}

#[derive(Debug)]
pub struct QuizSession<C: Clock = SystemClock> {
    generation: Generation,
    phase: AttemptPhase,
    mode: AttemptMode,
    meta: QuizMeta,
    questions: Vec<AttemptQuestion>,
    selected: Option<usize>,
    started: bool,
    timer: QuizTimer<C>,
    outcome: Option<AttemptOutcome>,
}

impl<C: Clock> QuizSession<C> {
    pub fn new(timer: QuizTimer<C>) -> Self {
        let mut timer = timer;
        // Auto-start applies to attempts, not to an empty session.
        timer.stop();
        Self {
            generation: Generation::new(),
            phase: AttemptPhase::Idle,
            mode: AttemptMode::Live,
            meta: QuizMeta::default(),
            questions: Vec::new(),
            selected: None,
            started: false,
            timer,
            outcome: None,
        }
    }

    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub fn mode(&self) -> AttemptMode {
        self.mode
    }

    pub fn meta(&self) -> &QuizMeta {
        &self.meta
    }

    pub fn questions(&self) -> &[AttemptQuestion] {
        &self.questions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_question(&self) -> Option<&AttemptQuestion> {
        self.selected.and_then(|idx| self.questions.get(idx))
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn timer(&self) -> &QuizTimer<C> {
        &self.timer
    }

    pub fn outcome(&self) -> Option<&AttemptOutcome> {
        self.outcome.as_ref()
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn is_read_only(&self) -> bool {
        matches!(
            self.phase,
            AttemptPhase::Review | AttemptPhase::Submitted | AttemptPhase::Submitting
        )
    }

    pub fn can_submit(&self) -> bool {
        self.started && self.phase == AttemptPhase::InProgress
    }

    pub fn has_previous(&self) -> bool {
        self.selected.is_some_and(|idx| idx > 0)
    }

    pub fn has_next(&self) -> bool {
        match self.selected {
            Some(idx) => idx + 1 < self.questions.len(),
            None => !self.questions.is_empty(),
        }
    }

    /// Drop the current quiz and start fetching another one.
    pub fn begin_load(&mut self, quiz_id: &str, mode: AttemptMode) -> Ticket {
        self.clear();
        self.mode = mode;
        self.meta.id = quiz_id.to_string();
        self.phase = AttemptPhase::Loading;
        let ticket = self.generation.advance();
        debug!(quiz_id, ?mode, %ticket, "Loading quiz");
        ticket
    }

    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<QuizDetails, ApiError>,
    ) -> LoadOutcome {
        if let Err(stale) = self.generation.check_current(ticket, "load") {
            debug!("Discarding quiz load: {stale}");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(details) => {
                let count = details.questions.len();
                self.meta = QuizMeta {
                    id: details.id,
                    title: details.title,
                    created_at: details.created_at,
                    attempted_at: details.attempted_at,
                    score: details.score,
                    duration_secs: details.duration_secs,
                };
                self.questions = details.questions;
                if self.mode == AttemptMode::Live {
                    // Anything the server echoed back is not ours to submit.
                    for question in &mut self.questions {
                        question.answer = None;
                    }
                }
                self.selected = None;
                self.started = false;
                self.phase = match self.mode {
                    AttemptMode::Live => AttemptPhase::NotStarted,
                    AttemptMode::Review => AttemptPhase::Review,
                };
                info!(
                    quiz_id = %self.meta.id,
                    questions = count,
                    mode = ?self.mode,
                    "Quiz loaded"
                );
                LoadOutcome::Loaded { questions: count }
            }
            Err(err) => {
                warn!(quiz_id = %self.meta.id, "Quiz load failed: {err}");
                self.phase = AttemptPhase::Idle;
                LoadOutcome::Failed(err.user_message())
            }
        }
    }

    pub fn start(&mut self) -> bool {
        if self.mode != AttemptMode::Live || self.phase != AttemptPhase::NotStarted {
            return false;
        }
        self.started = true;
        self.timer.start();
        if !self.questions.is_empty() {
            self.selected = Some(0);
        }
        self.phase = AttemptPhase::InProgress;
        info!(quiz_id = %self.meta.id, "Attempt started");
        true
    }

    pub fn select_question(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            debug!(index, len = self.questions.len(), "Ignoring out-of-range selection");
            return false;
        }
        match self.phase {
            AttemptPhase::NotStarted => {
                self.start();
            }
            AttemptPhase::InProgress
            | AttemptPhase::Submitting
            | AttemptPhase::Submitted
            | AttemptPhase::Review => {}
            AttemptPhase::Idle | AttemptPhase::Loading => return false,
        }
        self.selected = Some(index);
        true
    }

    pub fn select_next(&mut self) -> bool {
        let next = self.selected.map_or(0, |idx| idx + 1);
        self.select_question(next)
    }

    pub fn select_previous(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx > 0 => self.select_question(idx - 1),
            _ => false,
        }
    }

    /// Set the answer of the selected question.
    pub fn record_answer(&mut self, answer: impl Into<String>) -> bool {
        if self.phase != AttemptPhase::InProgress {
            return false;
        }
        let Some(question) = self.selected.and_then(|idx| self.questions.get_mut(idx)) else {
            return false;
        };
        let answer = answer.into();
        if !question.question.accepts(&answer) {
            debug!(question = %question.question.id, "Rejected answer for question kind");
            return false;
        }
        question.answer = Some(answer);
        true
    }

    /// Freeze the attempt and package it for the backend.
    ///
    /// Unanswered questions are submitted as empty strings.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.can_submit() {
            return None;
        }
        self.timer.pause();
        self.phase = AttemptPhase::Submitting;
        let answers = self
            .questions
            .iter()
            .enumerate()
            .map(|(question_index, q)| SubmittedAnswer {
                question_index,
                user_answer: q.answer.clone().unwrap_or_default(),
            })
            .collect();
        let ticket = self.generation.advance();
        let duration = self.timer.elapsed_secs();
        info!(
            quiz_id = %self.meta.id,
            answered = self.answered_count(),
            total = self.questions.len(),
            duration,
            %ticket,
            "Submitting attempt"
        );
        Some(SubmitRequest {
            ticket,
            quiz_id: self.meta.id.clone(),
            submission: AttemptSubmission { answers, duration },
        })
    }

    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<AttemptOutcome, ApiError>,
    ) -> SubmitOutcome {
        if let Err(stale) = self.generation.check_current(ticket, "submit") {
            debug!("Discarding submission result: {stale}");
            return SubmitOutcome::Stale;
        }
        if self.phase != AttemptPhase::Submitting {
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(outcome) => {
                for (question, graded) in self.questions.iter_mut().zip(&outcome.results) {
                    question.is_correct = Some(graded.is_correct);
                    question.correct_answer = Some(graded.correct_answer.clone());
                    question.explanation = graded.explanation.clone();
                }
                self.meta.score = Some(outcome.score);
                self.meta.duration_secs = Some(self.timer.elapsed_secs());
                self.phase = AttemptPhase::Submitted;
                self.outcome = Some(outcome.clone());
                info!(
                    quiz_id = %self.meta.id,
                    score = outcome.score,
                    correct = outcome.correct_answers,
                    total = outcome.total_questions,
                    "Attempt submitted"
                );
                SubmitOutcome::Submitted(outcome)
            }
            Err(err) => {
                warn!(quiz_id = %self.meta.id, "Submission failed: {err}");
                self.phase = AttemptPhase::InProgress;
                self.timer.resume();
                SubmitOutcome::Failed(err.user_message())
            }
        }
    }

    pub fn tick(&mut self) -> Vec<TimerEvent> {
        self.timer.tick()
    }

    /// Tear the attempt down, discarding any in-flight work.
    pub fn reset(&mut self) {
        self.generation.invalidate();
        self.clear();
    }

    fn clear(&mut self) {
        self.timer.stop();
        self.phase = AttemptPhase::Idle;
        self.meta = QuizMeta::default();
        self.questions.clear();
        self.selected = None;
        self.started = false;
        self.outcome = None;
    }
}
