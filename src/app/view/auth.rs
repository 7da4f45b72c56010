use super::super::messages::Message;
use super::super::state::{AUTH_FORM_WIDTH, App, AuthMode};
use iced::widget::{Column, button, column, container, text, text_input};
use iced::{Element, Length};

impl App {
    pub(super) fn auth_view(&self) -> Element<'_, Message> {
        let form = &self.auth;
        let (title, submit_label, switch_label) = match form.mode {
            AuthMode::SignIn => ("Sign in", "Sign in", "No account? Register"),
            AuthMode::Register => ("Create account", "Register", "Have an account? Sign in"),
        };

        let mut fields = Column::new().spacing(12).push(text(title).size(28));
        if form.mode == AuthMode::Register {
            fields = fields.push(
                text_input("Name", &form.name)
                    .on_input(Message::AuthNameChanged)
                    .padding(10),
            );
        }
        fields = fields
            .push(
                text_input("Email", &form.email)
                    .on_input(Message::AuthEmailChanged)
                    .padding(10),
            )
            .push(
                text_input("Password", &form.password)
                    .on_input(Message::AuthPasswordChanged)
                    .on_submit(Message::SubmitAuth)
                    .secure(true)
                    .padding(10),
            );
        if let Some(error) = &form.error {
            fields = fields.push(text(error).style(text::danger));
        }

        let submit = button(text(if form.submitting {
            "Please wait..."
        } else {
            submit_label
        }))
        .width(Length::Fill)
        .on_press_maybe((!form.submitting).then_some(Message::SubmitAuth));

        let panel = column![
            fields,
            submit,
            button(text(switch_label))
                .style(button::text)
                .on_press(Message::ToggleAuthMode),
            text(format!("Server: {}", self.client.base_url())).size(12),
        ]
        .spacing(16)
        .width(AUTH_FORM_WIDTH);

        container(container(panel).padding(24).style(container::rounded_box))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
