//! Error types for Vimeo Embed Core

use thiserror::Error;

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Player error types
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Surface lifecycle errors
    #[error("Invalid surface lifecycle transition: {from} -> {to}")]
    InvalidLifecycleTransition { from: String, to: String },

    // Surface operation errors
    #[error("Surface operation failed: {0}")]
    Surface(String),

    #[error("Script injection failed: {0}")]
    ScriptInjection(String),

    // Orientation errors
    #[error("Orientation request declined: {0}")]
    Orientation(String),
}

impl Error {
    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::InvalidLifecycleTransition { .. } => "INVALID_LIFECYCLE",
            Error::Surface(_) => "SURFACE_OP",
            Error::ScriptInjection(_) => "SCRIPT_INJECTION",
            Error::Orientation(_) => "ORIENTATION",
        }
    }
}
