//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` through a
//! `#[from]` variant when they need to surface it.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
