//! Error types for the lexing, parsing and evaluation stages.
//!
//! Lex and parse errors are descriptive strings bound to a source position so
//! they can be shown directly to whoever authored the expression. They are
//! recovered at the top-level `parse` entry point into an
//! `(error, fallback procedure)` pair and never cross the public boundary as
//! a panic.

use serde::Serialize;
use thiserror::Error;

/// An error produced while turning an expression string into a procedure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum EquationError {
    /// The lexer rejected the raw character stream. `position` is a character
    /// offset into the source string.
    #[error("{message} (at character {position})")]
    Lex { position: usize, message: String },

    /// The parser found a token of the wrong kind. `column` is the source
    /// offset of the offending token, `token` its literal text.
    #[error("{message}, got `{token}` at column {column}")]
    Syntax {
        column: usize,
        token: String,
        message: String,
    },

    /// The parser ran past the end of the token sequence. `token` and
    /// `column` name the last consumed token.
    #[error("Unexpected end of input after token (`{token}` at column {column})")]
    UnexpectedEnd { column: usize, token: String },

    /// The function name lexed successfully but no capability block of the
    /// bound algebra owns it.
    #[error("function `{function}` is not supported by the {algebra} algebra")]
    UnsupportedFunction { function: String, algebra: String },
}

impl EquationError {
    /// Source offset the error is bound to.
    pub fn position(&self) -> usize {
        match self {
            EquationError::Lex { position, .. } => *position,
            EquationError::Syntax { column, .. } => *column,
            EquationError::UnexpectedEnd { column, .. } => *column,
            EquationError::UnsupportedFunction { .. } => 0,
        }
    }
}

/// An error produced while evaluating a compiled procedure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum EvalError {
    /// The tree references `$slot` but fewer inputs were supplied.
    #[error("input slot ${slot} referenced but only {provided} inputs were supplied")]
    SlotOutOfRange { slot: usize, provided: usize },

    /// The algebra handed to `evaluate` does not provide the capability the
    /// node was compiled against.
    #[error("algebra does not provide function `{function}`")]
    MissingCapability { function: &'static str },
}
