//! Error types for stack trace preparation

use thiserror::Error;

/// Errors raised while preparing a stack trace.
#[derive(Debug, Error)]
pub enum StackTraceError {
    /// The engine handed over a frame that breaks the call-site contract
    #[error("assertion failed: {0}")]
    AssertionViolation(String),

    /// A hook was already registered for this process
    #[error("prepare_stack_trace hook is already installed")]
    HookAlreadyInstalled,

    /// No hook has been registered yet
    #[error("prepare_stack_trace hook is not installed")]
    HookNotInstalled,

    /// A source map table could not be decoded
    #[error("invalid source map table: {0}")]
    InvalidSourceMapTable(#[from] serde_json::Error),
}

/// Result type for stack trace operations
pub type StackTraceResult<T> = Result<T, StackTraceError>;
