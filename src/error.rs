//! Error handling module for bouquetui
//!
//! Provides the crate-wide error type built with thiserror. The selection and
//! step controller modules define their own narrow error enums; both convert
//! into [`BouquetError`] so callers can use a single `Result` alias.

use thiserror::Error;

use crate::selection::SelectionError;
use crate::wizard::StepError;

/// Main error type for bouquetui
#[derive(Error, Debug)]
pub enum BouquetError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog or saved order does not hold together
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selection operation was rejected
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// A step transition was rejected
    #[error("Step error: {0}")]
    Step(#[from] StepError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for bouquetui operations
pub type Result<T> = std::result::Result<T, BouquetError>;

impl BouquetError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Returns true if the user can recover by changing their selection.
    ///
    /// Validation failures and capacity errors are surfaced in the status
    /// line; everything else is a programming or environment error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Selection(SelectionError::CapacityExceeded { .. }) => true,
            Self::Step(StepError::Validation(_)) => true,
            _ => false,
        }
    }
}
