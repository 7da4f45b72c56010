mod attempt;
mod auth;
mod library;

use super::messages::Message;
use super::state::{
    App, CONTENT_PADDING, SIDEBAR_WIDTH, Screen, TOAST_WIDTH, ToastKind,
};
use crate::config::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, row, stack, text, vertical_space,
};
use iced::{Element, Length};
use studydeck_core::pagination::Page;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.screen {
            Screen::Auth => self.auth_view(),
            Screen::Dashboard => self.dashboard_view(),
            Screen::Documents => self.documents_view(),
            Screen::Flashcards => self.flashcards_view(),
            Screen::Quizzes => self.quizzes_view(),
            Screen::Attempt | Screen::Review => self.attempt_view(),
        };

        let content = container(body)
            .padding(CONTENT_PADDING)
            .width(Length::Fill)
            .height(Length::Fill);

        let layout: Element<'_, Message> = if self.screen == Screen::Auth {
            content.into()
        } else {
            row![self.sidebar(), content].into()
        };

        stack![layout, self.toast_layer()].into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let mut entries = Column::new().spacing(6).push(text("StudyDeck").size(24));
        entries = entries.push(vertical_space().height(12));
        for screen in Screen::SIDEBAR {
            let active = self.screen == screen
                || (screen == Screen::Quizzes && self.screen.is_quiz());
            let entry = button(text(screen.title()))
                .width(Length::Fill)
                .style(if active {
                    button::primary
                } else {
                    button::text
                })
                .on_press(Message::Navigate(screen));
            entries = entries.push(entry);
        }

        let theme_label = match self.config.theme {
            ThemeMode::Night => "Day Mode",
            ThemeMode::Day => "Night Mode",
        };
        entries = entries
            .push(vertical_space())
            .push(text(self.user_label()).size(14))
            .push(
                button(theme_label)
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(Message::ToggleTheme),
            )
            .push(
                button("Sign out")
                    .width(Length::Fill)
                    .style(button::danger)
                    .on_press(Message::SignOut),
            );

        container(entries)
            .padding(16)
            .width(SIDEBAR_WIDTH)
            .height(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    fn toast_layer(&self) -> Element<'_, Message> {
        let toasts = self.toasts.items.iter().map(|toast| {
            let label = text(&toast.message).style(match toast.kind {
                ToastKind::Success => text::success,
                ToastKind::Info => text::primary,
                ToastKind::Warning => text::secondary,
                ToastKind::Error => text::danger,
            });
            container(
                row![
                    label.width(Length::Fill),
                    button(text("x").size(12))
                        .style(button::text)
                        .on_press(Message::DismissToast(toast.id)),
                ]
                .spacing(8)
                .align_y(Vertical::Center),
            )
            .padding(12)
            .width(TOAST_WIDTH)
            .style(container::rounded_box)
            .into()
        });

        container(Column::with_children(toasts).spacing(8))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .into()
    }
}

/// Page header with an optional action on the right.
fn header<'a>(title: &'a str, action: Option<Element<'a, Message>>) -> Row<'a, Message> {
    let mut header = row![text(title).size(28), horizontal_space()]
        .spacing(12)
        .align_y(Vertical::Center);
    if let Some(action) = action {
        header = header.push(action);
    }
    header
}

/// Previous/next controls for a paginated list.
fn pager<'a, T>(page: &Page<T>, on_page: fn(u32) -> Message) -> Row<'a, Message> {
    row![
        button("Previous").on_press_maybe(page.previous().map(|req| on_page(req.page))),
        text(page.label()),
        button("Next").on_press_maybe(page.next().map(|req| on_page(req.page))),
    ]
    .spacing(12)
    .align_y(Vertical::Center)
}

fn empty_state<'a>(loading: bool, error: Option<&'a str>, empty_label: &'a str) -> Element<'a, Message> {
    let label = if loading {
        text("Loading...")
    } else if let Some(error) = error {
        text(error).style(text::danger)
    } else {
        text(empty_label)
    };
    container(label).padding(24).center_x(Length::Fill).into()
}

fn stat_card<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![text(value).size(26), text(label).size(14)].spacing(4))
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
