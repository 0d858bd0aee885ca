use nav_action::NavError;
use nav_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{what} length {got} does not match pedestrian count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("navigation error: {0}")]
    Navigation(#[from] NavError),
}

pub type SimResult<T> = Result<T, SimError>;
