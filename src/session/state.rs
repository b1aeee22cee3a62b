use crate::catalog::{Item, SortMode};
use crate::mvi::State;
use crate::session::draft::Draft;

/// Which screen of the single-page front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    List,
    Add,
}

/// The whole of a session's mutable state.
///
/// There are no ambient globals anywhere in the crate; this struct is it.
/// The item collection itself lives in [`crate::catalog::CatalogStore`] and
/// is replaced only by a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub query: String,
    pub sort: SortMode,
    pub tab: ViewTab,
    /// At most one selected item, or none.
    pub selected: Option<Item>,
    /// Pending quantity for the next stock movement; `None` is the blank
    /// input sentinel.
    pub qty: Option<u32>,
    pub draft: Draft,
    /// Cooperative indicator that a network call is outstanding. The caller
    /// is expected to disable mutating actions while set; nothing here
    /// enforces it.
    pub busy: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortMode::default(),
            tab: ViewTab::default(),
            selected: None,
            qty: Some(1),
            draft: Draft::default(),
            busy: false,
        }
    }
}

impl State for SessionState {}

impl SessionState {
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|item| item.id)
    }
}
