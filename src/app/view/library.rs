use super::super::messages::Message;
use super::super::state::{App, DifficultyChoice, SECTION_SPACING};
use super::{empty_state, header, pager, stat_card};
use iced::alignment::Vertical;
use iced::widget::{
    Column, button, column, container, horizontal_rule, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Element, Length};
use studydeck_core::api::{DashboardStats, Document, Flashcard, QuizRecord};
use studydeck_core::format::{
    format_bytes, format_date, format_date_time, format_duration_short, format_score,
};

impl App {
    pub(super) fn dashboard_view(&self) -> Element<'_, Message> {
        let refresh = button("Refresh")
            .style(button::secondary)
            .on_press_maybe((!self.dashboard.loading).then_some(Message::RefreshDashboard));
        let title = header("Dashboard", Some(refresh.into()));

        let Some(stats) = &self.dashboard.stats else {
            return column![
                title,
                empty_state(self.dashboard.loading, None, "No statistics yet.")
            ]
            .spacing(SECTION_SPACING)
            .into();
        };

        let content = column![
            title,
            totals_row(stats),
            row![
                stat_card("Documents with flashcards", stats.document_generated.to_string()),
                stat_card("Documents waiting", stats.document_waiting.to_string()),
                stat_card(
                    "Average score",
                    format!(
                        "{} ({:+.1}%)",
                        format_score(stats.avg_score),
                        stats.percent_avg_score
                    ),
                ),
                stat_card(
                    "Average duration",
                    format!(
                        "{} ({:+.1}%)",
                        format_duration_short(stats.avg_duration.max(0.0).round() as u64),
                        stats.percent_avg_duration
                    ),
                ),
            ]
            .spacing(SECTION_SPACING),
            row![difficulty_panel(stats), tags_panel(stats)].spacing(SECTION_SPACING),
            recent_quizzes(stats),
        ]
        .spacing(SECTION_SPACING);

        scrollable(content).height(Length::Fill).into()
    }

    pub(super) fn documents_view(&self) -> Element<'_, Message> {
        let state = &self.documents;
        let upload = row![
            text_input(
                "Paths of files to upload, separated by commas",
                &state.upload_input
            )
            .on_input(Message::UploadPathsChanged)
            .on_submit(Message::UploadDocuments)
            .padding(8)
            .width(Length::Fill),
            button(if state.uploading { "Uploading..." } else { "Upload" })
                .on_press_maybe((!state.uploading).then_some(Message::UploadDocuments)),
        ]
        .spacing(8)
        .align_y(Vertical::Center);
        let limit = text(format!(
            "PDF, DOCX or TXT. Up to {} in total.",
            format_bytes(self.config.max_upload_bytes)
        ))
        .size(12);

        let list: Element<'_, Message> = if state.list.page.items.is_empty() {
            empty_state(
                state.list.loading,
                state.list.error.as_deref(),
                "No documents uploaded yet.",
            )
        } else {
            let rows = state
                .list
                .page
                .items
                .iter()
                .map(|document| self.document_row(document));
            scrollable(Column::with_children(rows).spacing(8))
                .height(Length::Fill)
                .into()
        };

        column![
            header("Documents", None),
            upload,
            limit,
            list,
            pager(&state.list.page, Message::LoadDocuments),
        ]
        .spacing(SECTION_SPACING)
        .into()
    }

    fn document_row<'a>(&'a self, document: &'a Document) -> Element<'a, Message> {
        let busy = self.documents.generating.contains(&document.id);
        let flashcard_action = (!busy && !document.flash_card_status)
            .then(|| Message::GenerateFlashcards(document.id.clone()));
        let quiz_action = (!busy).then(|| Message::GenerateQuiz(document.id.clone()));

        let details = column![
            text(&document.title).size(18),
            text(format!(
                "{} - {} - uploaded {}",
                document.kind,
                format_bytes(document.size),
                format_date(document.created_at.as_ref())
            ))
            .size(12),
            text(format!(
                "{} flashcards, {} quizzes",
                document.flashcards, document.quizzes
            ))
            .size(12),
        ]
        .spacing(2)
        .width(Length::Fill);

        let flashcard_label = if document.flash_card_status {
            "Flashcards ready"
        } else if busy {
            "Working..."
        } else {
            "Generate flashcards"
        };

        container(
            row![
                details,
                button(flashcard_label)
                    .style(button::secondary)
                    .on_press_maybe(flashcard_action),
                button("Generate quiz").on_press_maybe(quiz_action),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        )
        .padding(12)
        .style(container::rounded_box)
        .into()
    }

    pub(super) fn flashcards_view(&self) -> Element<'_, Message> {
        let state = &self.flashcards;
        let filters = row![
            pick_list(
                DifficultyChoice::ALL,
                Some(state.difficulty),
                Message::FlashcardDifficultyChanged,
            ),
            text_input("Tags, comma separated", &state.tags_input)
                .on_input(Message::FlashcardTagsChanged)
                .on_submit(Message::ApplyFlashcardFilter)
                .padding(8)
                .width(Length::Fill),
            button("Apply").on_press(Message::ApplyFlashcardFilter),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        let list: Element<'_, Message> = if state.list.page.items.is_empty() {
            empty_state(
                state.list.loading,
                state.list.error.as_deref(),
                "No flashcards match these filters.",
            )
        } else {
            let cards = state
                .list
                .page
                .items
                .iter()
                .map(|card| self.flashcard_card(card));
            scrollable(Column::with_children(cards).spacing(8))
                .height(Length::Fill)
                .into()
        };

        column![
            header("Flashcards", None),
            filters,
            list,
            pager(&state.list.page, Message::LoadFlashcards),
        ]
        .spacing(SECTION_SPACING)
        .into()
    }

    fn flashcard_card<'a>(&'a self, card: &'a Flashcard) -> Element<'a, Message> {
        let revealed = self.flashcards.revealed.contains(&card.id);
        let source = card
            .document
            .as_ref()
            .and_then(|doc| doc.title())
            .map(|title| format!(" - {title}"))
            .unwrap_or_default();

        let mut body = Column::new()
            .spacing(6)
            .push(text(format!("{}{}", card.difficulty, source)).size(12))
            .push(text(&card.question).size(18));
        if revealed {
            body = body.push(horizontal_rule(1)).push(text(&card.answer));
        }
        if !card.tags.is_empty() {
            body = body.push(text(format!("#{}", card.tags.join(" #"))).size(12));
        }
        body = body.push(
            button(if revealed { "Hide answer" } else { "Show answer" })
                .style(button::secondary)
                .on_press(Message::ToggleFlashcardAnswer(card.id.clone())),
        );

        container(body)
            .padding(12)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    pub(super) fn quizzes_view(&self) -> Element<'_, Message> {
        let state = &self.quizzes;
        let list: Element<'_, Message> = if state.page.items.is_empty() {
            empty_state(
                state.loading,
                state.error.as_deref(),
                "No quizzes yet. Generate one from a document.",
            )
        } else {
            let rows = state.page.items.iter().map(quiz_row);
            scrollable(Column::with_children(rows).spacing(8))
                .height(Length::Fill)
                .into()
        };

        column![
            header("Quizzes", None),
            list,
            pager(&state.page, Message::LoadQuizzes),
        ]
        .spacing(SECTION_SPACING)
        .into()
    }
}

fn totals_row(stats: &DashboardStats) -> Element<'_, Message> {
    row![
        stat_card("Documents", stats.total_doc.to_string()),
        stat_card("Flashcards", stats.total_flashcard.to_string()),
        stat_card("Quizzes", stats.total_quiz.to_string()),
        stat_card("Questions", stats.total_ques.to_string()),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

fn difficulty_panel(stats: &DashboardStats) -> Element<'_, Message> {
    container(
        column![
            text("Quizzes by difficulty").size(18),
            text(format!("Easy: {}", stats.easy_quiz)),
            text(format!("Medium: {}", stats.medium_quiz)),
            text(format!("Hard: {}", stats.hard_quiz)),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn tags_panel(stats: &DashboardStats) -> Element<'_, Message> {
    let mut tags = Column::new()
        .spacing(6)
        .push(text(format!("Flashcard tags ({})", stats.total_flashcard_tags)).size(18));
    if stats.flash_cards_tags.is_empty() {
        tags = tags.push(text("No tags yet."));
    }
    for tag in &stats.flash_cards_tags {
        tags = tags.push(text(format!("{}: {}", tag.label, tag.value)));
    }
    container(tags)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn recent_quizzes(stats: &DashboardStats) -> Element<'_, Message> {
    let mut list = Column::new()
        .spacing(6)
        .push(text("Recent attempts").size(18));
    if stats.quiz_list.is_empty() {
        list = list.push(text("No quizzes attempted yet."));
    }
    for quiz in &stats.quiz_list {
        list = list.push(
            row![
                text(&quiz.title).width(Length::Fill),
                text(format!("{}/{}", quiz.correct_answer, quiz.total_ques)),
                button("Review")
                    .style(button::secondary)
                    .on_press(Message::ReviewQuiz(quiz.id.clone())),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        );
    }
    container(list)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn quiz_row(quiz: &QuizRecord) -> Element<'_, Message> {
    let summary = if quiz.attempted {
        format!(
            "{} questions - score {} in {} - attempted {}",
            quiz.question_count(),
            quiz.score.map(format_score).unwrap_or_else(|| "-".to_string()),
            format_duration_short(quiz.duration.unwrap_or(0)),
            format_date_time(quiz.attempted_date.as_ref())
        )
    } else {
        format!(
            "{} questions - created {}",
            quiz.question_count(),
            format_date(quiz.created_at.as_ref())
        )
    };
    let action = if quiz.attempted {
        button("Review")
            .style(button::secondary)
            .on_press(Message::ReviewQuiz(quiz.id.clone()))
    } else {
        button("Start").on_press(Message::OpenQuiz(quiz.id.clone()))
    };

    container(
        row![
            column![text(&quiz.title).size(18), text(summary).size(12)]
                .spacing(2)
                .width(Length::Fill),
            action,
        ]
        .spacing(8)
        .align_y(Vertical::Center),
    )
    .padding(12)
    .style(container::rounded_box)
    .into()
}
