use crate::mvi::Reducer;
use crate::session::draft::Draft;
use crate::session::intent::{DraftField, DraftIntent, SessionIntent};
use crate::session::state::{SessionState, ViewTab};

/// Pure transitions for the new-item draft.
pub struct DraftReducer;

impl Reducer for DraftReducer {
    type State = Draft;
    type Intent = DraftIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DraftIntent::Set { field, value } => {
                let mut next = state;
                match field {
                    DraftField::Name => next.name = value,
                    DraftField::Publisher => next.publisher = value,
                    DraftField::Isbn => next.isbn = value,
                    DraftField::Location => next.location = value,
                    DraftField::Subject => next.subject = value,
                    DraftField::SubjectManual => next.subject_manual = value,
                    DraftField::Grade => next.grade = value,
                    DraftField::GradeManual => next.grade_manual = value,
                    DraftField::Stock => next.stock = value,
                    DraftField::Alert => next.alert = value,
                    DraftField::Cost => next.cost = value,
                }
                next
            }
            DraftIntent::Reset => Draft::default(),
        }
    }
}

/// Pure transitions for the session.
///
/// Changing the query or sort mode never touches the selection; only an
/// explicit deselect or an applied mutation clears it.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetQuery(query) => SessionState { query, ..state },
            SessionIntent::SetSort(sort) => SessionState { sort, ..state },
            SessionIntent::SwitchTab(tab) => SessionState { tab, ..state },
            SessionIntent::Select(item) => SessionState {
                selected: Some(item),
                ..state
            },
            SessionIntent::Deselect => SessionState {
                selected: None,
                ..state
            },
            SessionIntent::SetQty(qty) => SessionState { qty, ..state },
            SessionIntent::Draft(intent) => SessionState {
                draft: DraftReducer::reduce(state.draft.clone(), intent),
                ..state
            },
            SessionIntent::RequestStarted => SessionState {
                busy: true,
                ..state
            },
            SessionIntent::RequestSettled => SessionState {
                busy: false,
                ..state
            },
            SessionIntent::MutationApplied(effects) => {
                let mut next = state;
                if effects.clear_selection {
                    next.selected = None;
                }
                if effects.reset_qty {
                    // "Clear" means back to the default of one, not blank.
                    next.qty = Some(1);
                }
                if effects.reset_draft {
                    next.draft = Draft::default();
                }
                if effects.switch_to_list {
                    next.tab = ViewTab::List;
                }
                next
            }
        }
    }
}
