//! Unidirectional data-flow primitives.
//!
//! Every piece of mutable session state in this crate is advanced by a pure
//! reducer: `(State, Intent) -> State`. Network effects never run inside a
//! reducer; the engine performs them and feeds the outcome back in as
//! another intent.

/// Marker trait for reducer-managed state.
///
/// States are immutable snapshots: cloning produces the next state, and
/// `PartialEq` lets callers detect that nothing changed.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is either a user action (typing a query, selecting an item) or
/// the settled outcome of a system effect (a mutation that succeeded).
pub trait Intent: Send + 'static {}

/// A pure state transition function.
///
/// The reducer is the only place state transitions happen. It must not
/// perform I/O.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
