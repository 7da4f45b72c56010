use super::super::state::{App, AttemptUi, Screen, ToastKind};
use super::Effect;
use studydeck_core::api::{ApiError, AttemptOutcome};
use studydeck_core::attempt::{AttemptMode, LoadOutcome, SubmitOutcome};
use studydeck_core::format::{format_clock, format_score, is_critical};
use studydeck_core::quiz::QuizDetails;
use studydeck_core::ticket::Ticket;
use studydeck_core::timer::TimerEvent;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_open_quiz(&mut self, quiz_id: String, effects: &mut Vec<Effect>) {
        self.open_quiz(quiz_id, AttemptMode::Live, effects);
    }

    pub(super) fn handle_review_quiz(&mut self, quiz_id: String, effects: &mut Vec<Effect>) {
        self.open_quiz(quiz_id, AttemptMode::Review, effects);
    }

    fn open_quiz(&mut self, quiz_id: String, mode: AttemptMode, effects: &mut Vec<Effect>) {
        if !self.is_signed_in() {
            return;
        }
        self.attempt_ui = AttemptUi::default();
        let ticket = self.attempt.begin_load(&quiz_id, mode);
        self.screen = match mode {
            AttemptMode::Live => Screen::Attempt,
            AttemptMode::Review => Screen::Review,
        };
        effects.push(Effect::LoadQuiz {
            ticket,
            quiz_id,
            mode,
        });
    }

    pub(super) fn handle_quiz_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<QuizDetails, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        let failure = result.as_ref().err().cloned();
        match self.attempt.finish_load(ticket, result) {
            LoadOutcome::Loaded { .. } => {
                if self.attempt.mode() == AttemptMode::Live {
                    self.push_toast(ToastKind::Success, "Quiz loaded successfully!");
                }
            }
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(_) => {
                if let Some(err) = failure {
                    self.report_error(&err, effects);
                }
                if self.is_signed_in() {
                    self.leave_attempt();
                    self.screen = Screen::Quizzes;
                    self.refresh_screen(effects);
                }
            }
        }
    }

    pub(super) fn handle_start_quiz(&mut self, effects: &mut Vec<Effect>) {
        if self.attempt.start() {
            effects.push(Effect::ScrollQuestionToTop);
        }
    }

    pub(super) fn handle_select_question(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if self.attempt.select_question(index) {
            effects.push(Effect::ScrollQuestionToTop);
        }
    }

    pub(super) fn handle_next_question(&mut self, effects: &mut Vec<Effect>) {
        if self.attempt.select_next() {
            effects.push(Effect::ScrollQuestionToTop);
        }
    }

    pub(super) fn handle_previous_question(&mut self, effects: &mut Vec<Effect>) {
        if self.attempt.select_previous() {
            effects.push(Effect::ScrollQuestionToTop);
        }
    }

    pub(super) fn handle_option_chosen(&mut self, index: usize) {
        let choice = self
            .attempt
            .selected_question()
            .and_then(|q| q.question.choices().get(index).map(|c| c.to_string()));
        match choice {
            Some(choice) => {
                self.attempt.record_answer(choice);
            }
            None => debug!(index, "Ignoring choice outside the selected question"),
        }
    }

    pub(super) fn handle_answer_input(&mut self, answer: String) {
        self.attempt.record_answer(answer);
    }

    pub(super) fn handle_submit_quiz(&mut self, effects: &mut Vec<Effect>) {
        match self.attempt.begin_submit() {
            Some(request) => effects.push(Effect::SubmitAttempt(request)),
            None => debug!(phase = ?self.attempt.phase(), "Submit ignored"),
        }
    }

    pub(super) fn handle_quiz_submitted(
        &mut self,
        ticket: Ticket,
        result: Result<AttemptOutcome, ApiError>,
        effects: &mut Vec<Effect>,
    ) {
        let failure = result.as_ref().err().cloned();
        match self.attempt.finish_submit(ticket, result) {
            SubmitOutcome::Submitted(outcome) => {
                self.push_toast(
                    ToastKind::Success,
                    format!(
                        "Quiz submitted successfully! Score: {} ({}/{})",
                        format_score(outcome.score),
                        outcome.correct_answers,
                        outcome.total_questions
                    ),
                );
                self.leave_attempt();
                self.screen = Screen::Quizzes;
                self.refresh_screen(effects);
            }
            SubmitOutcome::Failed(_) => {
                if let Some(err) = failure {
                    self.report_error(&err, effects);
                }
            }
            SubmitOutcome::Stale => {}
        }
    }

    pub(super) fn handle_tick(&mut self, effects: &mut Vec<Effect>) {
        for event in self.attempt.tick() {
            match event {
                TimerEvent::Tick { remaining_secs, .. } => {
                    let limit = self.attempt.timer().time_limit_secs();
                    if !self.attempt_ui.critical_warned && is_critical(remaining_secs, limit) {
                        self.attempt_ui.critical_warned = true;
                        self.push_toast(
                            ToastKind::Warning,
                            format!("Only {} left!", format_clock(remaining_secs)),
                        );
                    }
                }
                TimerEvent::TimeUp { elapsed_secs } => {
                    info!(elapsed_secs, quiz_id = %self.attempt.meta().id, "Quiz time is up");
                    self.push_toast(ToastKind::Warning, "Time is up!");
                    if self.config.auto_submit_on_time_up {
                        self.handle_submit_quiz(effects);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::update::test_support::{signed_in_app, timed_app};
    use std::time::{Duration, Instant};
    use studydeck_core::timer::ManualClock;
    use studydeck_core::attempt::AttemptPhase;
    use studydeck_core::quiz::{AttemptQuestion, Difficulty, QuestionKind, QuizQuestion};

    fn quiz(count: usize) -> QuizDetails {
        QuizDetails {
            id: "quiz-1".to_string(),
            title: "Cells".to_string(),
            created_at: None,
            attempted_at: None,
            score: None,
            duration_secs: None,
            questions: (0..count)
                .map(|idx| {
                    AttemptQuestion::new(QuizQuestion {
                        id: format!("q{idx}"),
                        kind: QuestionKind::MultipleChoice {
                            options: vec!["A".to_string(), "B".to_string()],
                        },
                        prompt: format!("Question {idx}"),
                        tags: Vec::new(),
                        difficulty: Difficulty::Easy,
                    })
                })
                .collect(),
        }
    }

    fn loaded_app(count: usize) -> App {
        load_quiz(signed_in_app(), count)
    }

    fn load_quiz(mut app: App, count: usize) -> App {
        let mut effects = Vec::new();
        app.handle_open_quiz("quiz-1".to_string(), &mut effects);
        let Some(Effect::LoadQuiz { ticket, .. }) = effects.pop() else {
            panic!("expected a quiz load");
        };
        app.handle_quiz_loaded(ticket, Ok(quiz(count)), &mut effects);
        app
    }

    #[test]
    fn load_failure_returns_to_the_quiz_list() {
        let mut app = signed_in_app();
        let mut effects = Vec::new();
        app.handle_open_quiz("missing".to_string(), &mut effects);
        assert_eq!(app.screen, Screen::Attempt);
        let Some(Effect::LoadQuiz { ticket, .. }) = effects.pop() else {
            panic!("expected a quiz load");
        };

        app.handle_quiz_loaded(
            ticket,
            Err(ApiError::NotFound("Quiz".to_string())),
            &mut effects,
        );
        assert_eq!(app.screen, Screen::Quizzes);
        assert_eq!(app.attempt.phase(), AttemptPhase::Idle);
        assert!(
            app.toasts
                .items
                .iter()
                .any(|t| t.kind == ToastKind::Error && t.message == "Quiz not found")
        );
        assert!(effects.iter().any(|e| matches!(e, Effect::LoadQuizzes { .. })));
    }

    #[test]
    fn choosing_an_option_records_its_text() {
        let mut app = loaded_app(2);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);
        app.handle_option_chosen(1);
        assert_eq!(
            app.attempt
                .selected_question()
                .and_then(|q| q.answer.as_deref()),
            Some("B")
        );
        app.handle_option_chosen(5);
        assert_eq!(app.attempt.answered_count(), 1);
    }

    #[test]
    fn successful_submit_toasts_and_leaves() {
        let mut app = loaded_app(2);
        let mut effects = Vec::new();
        app.handle_select_question(0, &mut effects);
        app.handle_option_chosen(0);
        effects.clear();

        app.handle_submit_quiz(&mut effects);
        let Some(Effect::SubmitAttempt(request)) = effects.pop() else {
            panic!("expected a submission");
        };
        assert_eq!(request.submission.answers.len(), 2);
        assert_eq!(request.submission.answers[1].user_answer, "");

        app.handle_quiz_submitted(
            request.ticket,
            Ok(AttemptOutcome {
                score: 50.0,
                correct_answers: 1,
                total_questions: 2,
                results: Vec::new(),
            }),
            &mut effects,
        );
        assert_eq!(app.screen, Screen::Quizzes);
        assert!(
            app.toasts
                .items
                .iter()
                .any(|t| t.kind == ToastKind::Success && t.message.starts_with("Quiz submitted"))
        );
    }

    #[test]
    fn failed_submit_keeps_the_attempt_open() {
        let mut app = loaded_app(1);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);
        app.handle_submit_quiz(&mut effects);
        let Some(Effect::SubmitAttempt(request)) = effects.pop() else {
            panic!("expected a submission");
        };

        app.handle_quiz_submitted(request.ticket, Err(ApiError::Timeout), &mut effects);
        assert_eq!(app.screen, Screen::Attempt);
        assert_eq!(app.attempt.phase(), AttemptPhase::InProgress);
        assert!(app.attempt.timer().is_running());
        assert!(app.toasts.items.iter().any(|t| t.kind == ToastKind::Error));
    }

    #[test]
    fn leaving_mid_submit_discards_the_response() {
        let mut app = loaded_app(1);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);
        app.handle_submit_quiz(&mut effects);
        let Some(Effect::SubmitAttempt(request)) = effects.pop() else {
            panic!("expected a submission");
        };
        app.handle_navigate(Screen::Dashboard, &mut effects);
        let toasts_before = app.toasts.items.len();

        effects.clear();
        app.handle_quiz_submitted(request.ticket, Err(ApiError::Timeout), &mut effects);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.toasts.items.len(), toasts_before);
        assert!(effects.is_empty());
    }

    fn tick_for(app: &mut App, clock: &ManualClock, secs: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        for _ in 0..secs {
            clock.advance(Duration::from_secs(1));
            effects.extend(app.reduce(Message::Tick(Instant::now())));
        }
        effects
    }

    fn count_toasts(app: &App, kind: ToastKind) -> usize {
        app.toasts.items.iter().filter(|t| t.kind == kind).count()
    }

    #[test]
    fn critical_zone_warns_exactly_once() {
        let (app, clock) = timed_app(100, true);
        let mut app = load_quiz(app, 2);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);

        // Threshold is min(100 / 10, 60) = 10 seconds remaining.
        tick_for(&mut app, &clock, 89);
        assert_eq!(count_toasts(&app, ToastKind::Warning), 0);

        tick_for(&mut app, &clock, 1);
        assert_eq!(count_toasts(&app, ToastKind::Warning), 1);
        assert!(
            app.toasts
                .items
                .iter()
                .any(|t| t.message == "Only 00:10 left!")
        );

        tick_for(&mut app, &clock, 5);
        assert_eq!(count_toasts(&app, ToastKind::Warning), 1);
    }

    #[test]
    fn time_up_auto_submits_when_enabled() {
        let (app, clock) = timed_app(5, true);
        let mut app = load_quiz(app, 2);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);
        app.handle_option_chosen(0);

        let effects = tick_for(&mut app, &clock, 6);
        let submissions: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::SubmitAttempt(request) => Some(request),
                _ => None,
            })
            .collect();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].submission.duration, 5);
        assert_eq!(app.attempt.phase(), AttemptPhase::Submitting);
        assert!(app.toasts.items.iter().any(|t| t.message == "Time is up!"));
    }

    #[test]
    fn time_up_waits_for_the_user_when_auto_submit_is_off() {
        let (app, clock) = timed_app(5, false);
        let mut app = load_quiz(app, 2);
        let mut effects = Vec::new();
        app.handle_start_quiz(&mut effects);

        let effects = tick_for(&mut app, &clock, 6);
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::SubmitAttempt(_)))
        );
        assert!(app.toasts.items.iter().any(|t| t.message == "Time is up!"));
        assert_eq!(app.attempt.phase(), AttemptPhase::InProgress);
        assert!(!app.attempt.timer().is_running());
        assert!(app.attempt.can_submit());
    }
}
