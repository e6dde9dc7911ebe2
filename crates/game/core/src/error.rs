//! Common error infrastructure for nation-core.
//!
//! Every command either applies completely or is rejected with a
//! [`CommandError`] and leaves the state untouched. Rejections are
//! user-facing: their `Display` text is the status message shown to the
//! player, and [`GameError::error_code`] gives a stable identifier for
//! presentation and logs.

use crate::state::ResourceKind;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The player can fix the situation and retry (earn more, finish tasks).
    Recoverable,

    /// The request itself is invalid for the current state.
    Validation,

    /// The game has ended; only a reset is accepted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all nation-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// What a cost is paid from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holding {
    /// A stockpiled resource.
    Resource(ResourceKind),
    /// The top-level treasury.
    Treasury,
}

impl core::fmt::Display for Holding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Resource(kind) => write!(f, "{kind}"),
            Self::Treasury => f.write_str("treasury"),
        }
    }
}

/// Rejection of a player command.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    /// `available` is floored so the message never claims the requirement is met.
    #[error("Not enough {holding}: need {required}, have {}", .available.floor())]
    InsufficientResource {
        holding: Holding,
        required: f64,
        available: f64,
    },

    #[error("Complete {remaining} more tasks to advance!")]
    TasksIncomplete { remaining: u32 },

    #[error("Choice {} is not available right now", .index + 1)]
    ChoiceUnavailable { index: usize },

    #[error("Choice {} does not exist (event has {len} choices)", .index + 1)]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("No event is awaiting a decision")]
    NoActiveEvent,

    #[error("An event is awaiting your decision")]
    EventAlreadyActive,

    #[error("The game is over. Start a new game to continue.")]
    Terminal,
}

impl CommandError {
    pub fn insufficient(holding: Holding, required: f64, available: f64) -> Self {
        Self::InsufficientResource {
            holding,
            required,
            available,
        }
    }
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        use CommandError::*;
        match self {
            InsufficientResource { .. } | TasksIncomplete { .. } => ErrorSeverity::Recoverable,
            ChoiceUnavailable { .. }
            | ChoiceOutOfRange { .. }
            | NoActiveEvent
            | EventAlreadyActive => ErrorSeverity::Validation,
            Terminal => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CommandError::*;
        match self {
            InsufficientResource { .. } => "COMMAND_INSUFFICIENT_RESOURCE",
            TasksIncomplete { .. } => "COMMAND_TASKS_INCOMPLETE",
            ChoiceUnavailable { .. } => "COMMAND_CHOICE_UNAVAILABLE",
            ChoiceOutOfRange { .. } => "COMMAND_CHOICE_OUT_OF_RANGE",
            NoActiveEvent => "COMMAND_NO_ACTIVE_EVENT",
            EventAlreadyActive => "COMMAND_EVENT_ALREADY_ACTIVE",
            Terminal => "COMMAND_TERMINAL",
        }
    }
}
