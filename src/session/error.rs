//! # Session Errors
//!
//! Failures of the request/response plumbing between a client and the
//! session actor, plus the wrapped domain error the actor answered with.

use crate::inventory::PartError;

/// Errors that can occur while talking to the session actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Inventory(#[from] PartError),
}
