//! Error types for core module
//!
//! Provides custom error types for core functionality: settings persistence and session state
//! management.

use thiserror::Error;

use crate::core::states::SessionState;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Session state machine rejected a transition
    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition { from: SessionState, to: SessionState },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
