//! Session state, intents, reducers, and the engine that drives effects.
//!
//! One explicit state struct holds everything mutable in a session: search
//! query, sort mode, active tab, selection, pending quantity, new-item
//! draft, and the cooperative busy flag. All transitions go through pure
//! reducers; the [`SessionEngine`] performs the network effects and feeds
//! outcomes back in as intents.

pub mod draft;
mod engine;
mod intent;
mod reducer;
mod state;

pub use draft::{Draft, MANUAL_CHOICE};
pub use engine::SessionEngine;
pub use intent::{DraftField, DraftIntent, SessionIntent};
pub use reducer::{DraftReducer, SessionReducer};
pub use state::{SessionState, ViewTab};
