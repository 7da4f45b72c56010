//! Core of the StudyDeck client: the quiz timer, the attempt state machine,
//! and the REST client for the study backend. Nothing here depends on the UI.

pub mod api;
pub mod attempt;
pub mod format;
pub mod pagination;
pub mod quiz;
pub mod ticket;
pub mod timer;
