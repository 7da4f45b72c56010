mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{App, TOAST_SWEEP_MS};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.attempt.timer().is_running() {
            subscriptions.push(time::every(app.attempt.timer().interval()).map(Message::Tick));
        }
        if !app.toasts.is_empty() {
            subscriptions.push(
                time::every(Duration::from_millis(TOAST_SWEEP_MS)).map(Message::ExpireToasts),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        self.run_effects(effects)
    }

    /// Kick off the fetches a freshly launched window needs.
    pub(in crate::app) fn boot(&mut self) -> Task<Message> {
        let effects = self.initial_effects();
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<super::Effect>) -> Task<Message> {
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
