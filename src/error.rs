//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::member::MemberId;
use crate::validate::ValidationErrors;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Roster Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Member not found: {0}")]
    NotFound(MemberId),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Directory Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Intent Errors
    // -------------------------------------------------------------------------
    #[error("Invalid intent: {0}")]
    Intent(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        RosterError::Validation(errors)
    }
}

impl From<reqwest::Error> for RosterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RosterError::Parse(format!("directory listing: {}", err))
        } else {
            RosterError::Network(err.to_string())
        }
    }
}

impl RosterError {
    /// Whether the error leaves state untouched and only needs a notice
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::Validation(_)
                | RosterError::NotFound(_)
                | RosterError::Network(_)
                | RosterError::Intent(_)
        )
    }
}
