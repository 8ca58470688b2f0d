//! Callback dispatch error types

use thiserror::Error;

/// Errors raised while resolving or running a dashboard callback
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallbackError {
    /// No callback is registered for this output component
    #[error("No callback registered for output `{0}`")]
    UnknownOutput(String),

    /// A second callback tried to claim an output
    #[error("Output `{0}` already has a callback")]
    DuplicateOutput(String),

    /// The request did not carry a value for a declared input
    #[error("Callback for `{output}` is missing input `{input}`")]
    MissingInput { output: String, input: String },

    /// An input value has the wrong shape
    #[error("Invalid value for input `{input}`: {reason}")]
    InvalidInput { input: String, reason: String },
}

/// Result type alias for callback operations
pub type CallbackResult<T> = Result<T, CallbackError>;
