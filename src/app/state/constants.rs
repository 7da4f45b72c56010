use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants shared by the views.
pub(crate) const SIDEBAR_WIDTH: f32 = 200.0;
pub(crate) const CONTENT_PADDING: u16 = 20;
pub(crate) const SECTION_SPACING: u16 = 16;
pub(crate) const NAVIGATOR_COLUMNS: usize = 10;
pub(crate) const TOAST_WIDTH: f32 = 320.0;
pub(crate) const AUTH_FORM_WIDTH: f32 = 360.0;
pub(crate) const TOAST_SWEEP_MS: u64 = 250;
pub(crate) static QUESTION_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("question-scroll"));
