//! Error types for mf-instructions.

use thiserror::Error;

/// Errors raised while reading or parsing instruction text.
///
/// `line` is 1-based and counts blank lines, so it matches what an editor
/// shows for the input file.
#[derive(Debug, Error)]
pub enum InstructionError {
    #[error("line {line}: {reason}: {text:?}")]
    Malformed {
        line:   usize,
        text:   String,
        reason: &'static str,
    },

    #[error("line {line}: {token:?} is not a valid non-negative integer")]
    InvalidNumber { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstructionError {
    /// Line the error refers to, if it came from a specific line.
    pub fn line(&self) -> Option<usize> {
        match self {
            InstructionError::Malformed { line, .. }
            | InstructionError::InvalidNumber { line, .. } => Some(*line),
            InstructionError::Io(_) => None,
        }
    }
}

/// Alias for `Result<T, InstructionError>`.
pub type InstructionResult<T> = Result<T, InstructionError>;
