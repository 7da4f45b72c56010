use std::collections::HashSet;
use studydeck_core::api::{ApiError, DashboardStats, Document, Flashcard, FlashcardFilter, QuizRecord};
use studydeck_core::pagination::{Page, PageRequest};
use studydeck_core::quiz::Difficulty;
use studydeck_core::ticket::{Generation, Ticket};
use tracing::debug;

/// One paginated list fetched from the backend.
#[derive(Debug)]
pub struct ListState<T> {
    generation: Generation,
    pub(in crate::app) loading: bool,
    pub(in crate::app) error: Option<String>,
    pub(in crate::app) page: Page<T>,
}

impl<T> ListState<T> {
    pub(in crate::app) fn new(limit: u32) -> Self {
        Self {
            generation: Generation::new(),
            loading: false,
            error: None,
            page: Page::empty(limit),
        }
    }

    pub(in crate::app) fn request(&self, page: u32) -> PageRequest {
        PageRequest::new(page, self.page.limit)
    }

    pub(in crate::app) fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.generation.advance()
    }

    /// Apply a finished fetch. Returns the error to report, if any.
    pub(in crate::app) fn finish(
        &mut self,
        ticket: Ticket,
        stage: &'static str,
        result: Result<Page<T>, ApiError>,
    ) -> Option<ApiError> {
        if let Err(stale) = self.generation.check_current(ticket, stage) {
            debug!("Discarding list response: {stale}");
            return None;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                None
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Some(err)
            }
        }
    }

    pub(in crate::app) fn clear(&mut self) {
        self.generation.invalidate();
        self.loading = false;
        self.error = None;
        self.page = Page::empty(self.page.limit);
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    generation: Generation,
    pub(in crate::app) loading: bool,
    pub(in crate::app) stats: Option<DashboardStats>,
}

impl DashboardState {
    pub(in crate::app) fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.generation.advance()
    }

    pub(in crate::app) fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<DashboardStats, ApiError>,
    ) -> Option<ApiError> {
        if let Err(stale) = self.generation.check_current(ticket, "dashboard") {
            debug!("Discarding dashboard response: {stale}");
            return None;
        }
        self.loading = false;
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                None
            }
            Err(err) => Some(err),
        }
    }

    pub(in crate::app) fn clear(&mut self) {
        self.generation.invalidate();
        self.loading = false;
        self.stats = None;
    }
}

#[derive(Debug)]
pub struct DocumentsState {
    pub(in crate::app) list: ListState<Document>,
    pub(in crate::app) upload_input: String,
    pub(in crate::app) uploading: bool,
    /// Documents with a generation request in flight.
    pub(in crate::app) generating: HashSet<String>,
}

impl DocumentsState {
    pub(in crate::app) fn new(limit: u32) -> Self {
        Self {
            list: ListState::new(limit),
            upload_input: String::new(),
            uploading: false,
            generating: HashSet::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyChoice {
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyChoice {
    pub const ALL: [DifficultyChoice; 4] = [
        DifficultyChoice::All,
        DifficultyChoice::Easy,
        DifficultyChoice::Medium,
        DifficultyChoice::Hard,
    ];

    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            DifficultyChoice::All => None,
            DifficultyChoice::Easy => Some(Difficulty::Easy),
            DifficultyChoice::Medium => Some(Difficulty::Medium),
            DifficultyChoice::Hard => Some(Difficulty::Hard),
        }
    }
}

impl std::fmt::Display for DifficultyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.difficulty() {
            Some(difficulty) => write!(f, "{difficulty}"),
            None => f.write_str("All difficulties"),
        }
    }
}

#[derive(Debug)]
pub struct FlashcardsState {
    pub(in crate::app) list: ListState<Flashcard>,
    pub(in crate::app) difficulty: DifficultyChoice,
    pub(in crate::app) tags_input: String,
    pub(in crate::app) revealed: HashSet<String>,
}

impl FlashcardsState {
    pub(in crate::app) fn new(limit: u32) -> Self {
        Self {
            list: ListState::new(limit),
            difficulty: DifficultyChoice::All,
            tags_input: String::new(),
            revealed: HashSet::new(),
        }
    }

    pub(in crate::app) fn filter(&self) -> FlashcardFilter {
        FlashcardFilter {
            document: None,
            tags: Some(self.tags_input.trim().to_string()).filter(|t| !t.is_empty()),
            difficulty: self.difficulty.difficulty(),
        }
    }
}

pub type QuizzesState = ListState<QuizRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use studydeck_core::pagination::Pagination;

    fn page(items: Vec<u32>, current: u32, total: u32) -> Page<u32> {
        Page {
            items,
            pagination: Pagination { current, total },
            limit: 10,
        }
    }

    #[test]
    fn only_the_latest_fetch_is_applied() {
        let mut list = ListState::<u32>::new(10);
        let first = list.begin();
        let second = list.begin();

        assert!(list.finish(first, "test", Ok(page(vec![1], 1, 1))).is_none());
        assert!(list.loading);
        assert!(list.page.items.is_empty());

        assert!(list.finish(second, "test", Ok(page(vec![2, 3], 2, 12))).is_none());
        assert!(!list.loading);
        assert_eq!(list.page.items, vec![2, 3]);
        assert_eq!(list.request(3), PageRequest::new(3, 10));
    }

    #[test]
    fn failures_keep_the_previous_page() {
        let mut list = ListState::<u32>::new(10);
        let ticket = list.begin();
        list.finish(ticket, "test", Ok(page(vec![7], 1, 1)));

        let ticket = list.begin();
        let err = list.finish(ticket, "test", Err(ApiError::Timeout));
        assert_eq!(err, Some(ApiError::Timeout));
        assert_eq!(list.page.items, vec![7]);
        assert!(list.error.is_some());
    }

    #[test]
    fn flashcard_filter_drops_blank_tags() {
        let mut state = FlashcardsState::new(20);
        state.tags_input = "   ".to_string();
        state.difficulty = DifficultyChoice::Hard;
        let filter = state.filter();
        assert_eq!(filter.tags, None);
        assert_eq!(filter.difficulty, Some(Difficulty::Hard));
    }
}
