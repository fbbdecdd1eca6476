//! Error and Result types for the vellum client.
//!
//! Every fallible module defines its own error type; this module aggregates them into a single
//! [`Error`] for callers that do not need to distinguish the source.

pub use crate::{codec::EncodeError, wire::WireError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Encoding error")]
    Encode(#[from] EncodeError),
    #[error("Wire protocol error")]
    Wire(#[from] WireError),
}
