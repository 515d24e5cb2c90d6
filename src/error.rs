//! Crate error type.

use thiserror::Error as ThisError;

/// Errors produced by password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A precondition on the inputs failed. Not retryable; the caller must
    /// fix the arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
