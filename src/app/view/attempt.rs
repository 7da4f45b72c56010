use super::super::messages::Message;
use super::super::state::{App, NAVIGATOR_COLUMNS, QUESTION_SCROLL_ID, SECTION_SPACING};
use super::header;
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, radio, row, scrollable, text,
    text_input,
};
use iced::{Element, Length};
use studydeck_core::attempt::{AttemptMode, AttemptPhase};
use studydeck_core::format::{
    format_clock, format_date, format_date_time, format_duration_short, format_score, is_critical,
};
use studydeck_core::quiz::{AttemptQuestion, QuestionKind};

impl App {
    pub(super) fn attempt_view(&self) -> Element<'_, Message> {
        let session = &self.attempt;
        let meta = session.meta();
        let title = if meta.title.is_empty() {
            "Quiz"
        } else {
            meta.title.as_str()
        };
        let leave = button("Leave")
            .style(button::secondary)
            .on_press_maybe(
                (session.phase() != AttemptPhase::Submitting).then_some(Message::LeaveQuiz),
            );

        match session.phase() {
            AttemptPhase::Idle | AttemptPhase::Loading => {
                return column![header(title, Some(leave.into())), text("Loading quiz...")]
                    .spacing(SECTION_SPACING)
                    .into();
            }
            _ => {}
        }

        let mut content = Column::new()
            .spacing(SECTION_SPACING)
            .push(header(title, Some(leave.into())))
            .push(self.attempt_summary());

        if session.questions().is_empty() {
            return content.push(text("This quiz has no questions.")).into();
        }

        if session.phase() == AttemptPhase::NotStarted {
            content = content.push(
                button("Start quiz")
                    .style(button::success)
                    .on_press(Message::StartQuiz),
            );
        }

        content
            .push(self.question_navigator())
            .push(
                scrollable(self.question_panel())
                    .id(QUESTION_SCROLL_ID.clone())
                    .height(Length::Fill),
            )
            .push(self.attempt_controls())
            .into()
    }

    fn attempt_summary(&self) -> Element<'_, Message> {
        let session = &self.attempt;
        let meta = session.meta();
        let total = session.questions().len();

        let info = match session.mode() {
            AttemptMode::Review => {
                let score = meta
                    .score
                    .map(format_score)
                    .unwrap_or_else(|| "-".to_string());
                let duration = meta
                    .duration_secs
                    .map(format_duration_short)
                    .unwrap_or_else(|| "-".to_string());
                let correct = session
                    .questions()
                    .iter()
                    .filter(|q| q.is_correct == Some(true))
                    .count();
                text(format!(
                    "Score {score} ({correct}/{total}) in {duration} - attempted {}",
                    format_date_time(meta.attempted_at.as_ref())
                ))
            }
            AttemptMode::Live => text(format!(
                "{} of {total} answered - created {}",
                session.answered_count(),
                format_date(meta.created_at.as_ref())
            )),
        };

        let mut summary = row![info.size(14), horizontal_space()]
            .spacing(12)
            .align_y(Vertical::Center);
        if session.mode() == AttemptMode::Live {
            summary = summary.push(self.timer_label());
        }
        summary.into()
    }

    fn timer_label(&self) -> Element<'_, Message> {
        let timer = self.attempt.timer();
        let elapsed = timer.elapsed_secs();
        let limit = timer.time_limit_secs();
        if limit == 0 {
            return text(format_clock(elapsed)).size(22).into();
        }

        let remaining = timer.remaining_secs();
        let label = text(format!(
            "{} / {} left",
            format_clock(elapsed),
            format_clock(remaining)
        ))
        .size(22);
        if timer.is_time_up() || is_critical(remaining, limit) {
            label.style(text::danger).into()
        } else {
            label.into()
        }
    }

    fn question_navigator(&self) -> Element<'_, Message> {
        let session = &self.attempt;
        let review = session.mode() == AttemptMode::Review;
        let selected = session.selected_index();

        let rows = session
            .questions()
            .chunks(NAVIGATOR_COLUMNS)
            .enumerate()
            .map(|(chunk_idx, chunk)| {
                let cells = chunk.iter().enumerate().map(|(offset, question)| {
                    let index = chunk_idx * NAVIGATOR_COLUMNS + offset;
                    let style = if selected == Some(index) {
                        button::primary
                    } else if review {
                        match question.is_correct {
                            Some(true) => button::success,
                            Some(false) => button::danger,
                            None => button::secondary,
                        }
                    } else if question.is_answered() {
                        button::secondary
                    } else {
                        button::text
                    };
                    button(text((index + 1).to_string()).size(14))
                        .width(Length::Fixed(40.0))
                        .style(style)
                        .on_press(Message::SelectQuestion(index))
                        .into()
                });
                Row::with_children(cells).spacing(6).into()
            });

        Column::with_children(rows).spacing(6).into()
    }

    fn question_panel(&self) -> Element<'_, Message> {
        let session = &self.attempt;
        let Some(index) = session.selected_index() else {
            let hint = if session.mode() == AttemptMode::Review {
                "Pick a question to see how it was answered."
            } else {
                "Pick a question or start the quiz."
            };
            return container(text(hint)).padding(16).into();
        };
        let Some(entry) = session.selected_question() else {
            return container(text("Question unavailable.")).padding(16).into();
        };

        let question = &entry.question;
        let mut meta_line = format!(
            "Question {} of {} - {} - {}",
            index + 1,
            session.questions().len(),
            question.kind.label(),
            question.difficulty
        );
        if !question.tags.is_empty() {
            meta_line.push_str(&format!(" - #{}", question.tags.join(" #")));
        }

        let mut panel = Column::new()
            .spacing(12)
            .push(text(meta_line).size(12))
            .push(text(&question.prompt).size(20))
            .push(self.answer_input(entry));

        if session.mode() == AttemptMode::Review {
            panel = panel.push(review_notes(entry));
        }

        container(panel)
            .padding(16)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    fn answer_input<'a>(&'a self, entry: &'a AttemptQuestion) -> Element<'a, Message> {
        let editable = !self.attempt.is_read_only();
        match &entry.question.kind {
            QuestionKind::FillInBlank => {
                let input = text_input("Type your answer", entry.answer.as_deref().unwrap_or(""))
                    .padding(10);
                if editable {
                    input
                        .on_input(Message::AnswerInputChanged)
                        .on_submit(Message::NextQuestion)
                        .into()
                } else {
                    input.into()
                }
            }
            QuestionKind::MultipleChoice { .. } | QuestionKind::TrueFalse => {
                let choices = entry.question.choices();
                let chosen = entry
                    .answer
                    .as_deref()
                    .and_then(|answer| choices.iter().position(|choice| *choice == answer));
                let options = choices.iter().enumerate().map(|(idx, choice)| {
                    if editable {
                        radio(*choice, idx, chosen, Message::OptionChosen).into()
                    } else {
                        let marker = if chosen == Some(idx) { "(x)" } else { "( )" };
                        text(format!("{marker} {choice}")).into()
                    }
                });
                Column::with_children(options).spacing(8).into()
            }
        }
    }

    fn attempt_controls(&self) -> Element<'_, Message> {
        let session = &self.attempt;
        let mut controls = row![
            button("Previous")
                .style(button::secondary)
                .on_press_maybe(session.has_previous().then_some(Message::PreviousQuestion)),
            button("Next")
                .style(button::secondary)
                .on_press_maybe(session.has_next().then_some(Message::NextQuestion)),
            horizontal_space(),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        if session.mode() == AttemptMode::Live {
            let submitting = session.phase() == AttemptPhase::Submitting;
            controls = controls.push(
                button(if submitting { "Submitting..." } else { "Submit" })
                    .style(button::success)
                    .on_press_maybe(session.can_submit().then_some(Message::SubmitQuiz)),
            );
        }
        controls.into()
    }
}

fn review_notes(entry: &AttemptQuestion) -> Element<'_, Message> {
    let verdict = match entry.is_correct {
        Some(true) => text("Correct").style(text::success),
        Some(false) => text("Incorrect").style(text::danger),
        None => text("Not graded"),
    };
    let mut notes = Column::new().spacing(6).push(verdict);
    if !entry.is_answered() {
        notes = notes.push(text("No answer given."));
    }
    if let Some(correct) = &entry.correct_answer {
        notes = notes.push(text(format!("Correct answer: {correct}")));
    }
    if let Some(explanation) = &entry.explanation {
        notes = notes.push(text(explanation).size(14));
    }
    notes.into()
}
