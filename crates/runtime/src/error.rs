//! Errors surfaced while assembling a session.
//!
//! Player commands never fail with these; they return
//! [`CommandError`](nation_core::CommandError) rejections instead.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires content to be configured before building")]
    MissingContent,

    #[error("initial state is already over; start from a live state")]
    TerminalInitialState,

    #[error("event catalog has no template eligible at level {level}")]
    NoEligibleEvents { level: u32 },
}
