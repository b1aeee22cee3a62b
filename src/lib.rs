//! Headless client core for a spreadsheet-backed textbook stockroom.
//!
//! The remote side is an opaque spreadsheet automation script reached over
//! HTTP with a fixed JSON contract; this crate owns everything in front of
//! it: fetching and normalizing the item catalog, deriving the filtered and
//! sorted view, tracking the session's input state (search, sort mode,
//! selection, pending quantity, new-item draft), and issuing stock
//! mutations.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ SessionReducer ──→ SessionState ──→ view()
//!    ↑                                             │
//!    └── SessionEngine ── MutationGateway ── HTTP ─┘
//! ```
//!
//! - [`catalog`]: the fetched collection and the pure view derivation.
//! - [`session`]: session state, intents, reducers, and the engine that
//!   drives network effects.
//! - [`gateway`]: the wire protocol, the HTTP client wrapper, and mutation
//!   dispatch with local validation.
//! - [`config`]: endpoint URL and per-variant feature flags.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod mvi;
pub mod session;

pub use catalog::{CatalogStore, Item, SortMode};
pub use config::{Config, FeatureFlags};
pub use gateway::{ConfirmPolicy, GatewayError, MutationGateway, StockDirection};
pub use session::{Draft, SessionEngine, SessionIntent, SessionState};
