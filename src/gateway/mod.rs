//! The mutation gateway: wire protocol, HTTP client, and dispatch.
//!
//! Translates a user intent (stock in/out, delete, add) into exactly one
//! request against the sheet endpoint, interprets the response, and reports
//! which session fields reset on success. It performs no queuing, no retry,
//! and no local merge of a mutation's effect — every success is followed by
//! a full reload, driven by the caller.

mod client;
mod confirm;
mod dispatch;
mod protocol;

use thiserror::Error;

pub use client::StockClient;
pub use confirm::{AutoConfirm, ConfirmPolicy};
pub use dispatch::{MutationEffects, MutationGateway, MutationOutcome};
pub use protocol::{ApiResponse, MutationRequest, StockDirection};

/// Errors that can occur on the fetch or mutation path.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network unreachable or the request failed in transit.
    #[error("Communication error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered outside the 2xx range.
    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("Malformed response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint itself reported a failure. The message is surfaced to
    /// the user verbatim.
    #[error("{message}")]
    Application { message: String },

    /// No item is selected.
    #[error("No item selected")]
    NothingSelected,

    /// Pending quantity is blank or not a positive integer.
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    /// A required draft field was left blank.
    #[error("Required field '{field}' is blank")]
    MissingField { field: &'static str },

    /// A numeric draft field holds something that is not a number.
    #[error("Field '{field}' is not a number")]
    InvalidNumber { field: &'static str },

    /// The delete action is not enabled in this variant.
    #[error("Delete is not enabled")]
    DeleteDisabled,
}

/// Coarse classification used by callers to decide how to surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, HTTP status, or decode failure: generic communication
    /// notice, local state untouched.
    Transport,
    /// A local precondition failed; no request was sent.
    Validation,
    /// The endpoint rejected the operation; show its message verbatim.
    Application,
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Transport { .. }
            | GatewayError::Status { .. }
            | GatewayError::Decode { .. } => ErrorKind::Transport,
            GatewayError::Application { .. } => ErrorKind::Application,
            GatewayError::NothingSelected
            | GatewayError::InvalidQuantity
            | GatewayError::MissingField { .. }
            | GatewayError::InvalidNumber { .. }
            | GatewayError::DeleteDisabled => ErrorKind::Validation,
        }
    }
}
