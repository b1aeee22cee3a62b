use crate::catalog::{Item, SortMode};
use crate::gateway::MutationEffects;
use crate::mvi::Intent;
use crate::session::state::ViewTab;

/// A field of the new-item draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Publisher,
    Isbn,
    Location,
    Subject,
    SubjectManual,
    Grade,
    GradeManual,
    Stock,
    Alert,
    Cost,
}

/// Edits to the new-item draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftIntent {
    Set { field: DraftField, value: String },
    Reset,
}

impl Intent for DraftIntent {}

/// User actions and settled effect outcomes that advance the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    SetQuery(String),
    SetSort(SortMode),
    SwitchTab(ViewTab),
    Select(Item),
    Deselect,
    SetQty(Option<u32>),
    Draft(DraftIntent),
    /// A network call went out; the busy flag goes up.
    RequestStarted,
    /// The call settled, success or not; the busy flag comes down.
    RequestSettled,
    /// A mutation was accepted by the endpoint; reset the reported fields.
    MutationApplied(MutationEffects),
}

impl Intent for SessionIntent {}
