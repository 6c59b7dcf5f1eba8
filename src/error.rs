use std::{error::Error, fmt, fmt::Display};

use crate::frontend::position::Position;

/// Every failure is fatal: the first error aborts the whole run and no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgoError {
    /// A character outside of every token class, or a lexeme that exceeds
    /// the configured length limit.
    LexicalError { pos: Position, msg: String },
    /// A token that does not match the current production.
    SyntaxError {
        pos: Position,
        expected: String,
        found: String,
    },
}

impl ArgoError {
    pub fn pos(&self) -> Position {
        match self {
            ArgoError::LexicalError { pos, .. } | ArgoError::SyntaxError { pos, .. } => *pos,
        }
    }
}

impl Display for ArgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgoError::LexicalError { pos, msg } => write!(f, "Lexical error at {}: {}", pos, msg),
            ArgoError::SyntaxError {
                pos,
                expected,
                found,
            } => write!(
                f,
                "Syntax error at {}: Expected {}, but found {}.",
                pos, expected, found
            ),
        }
    }
}

impl Error for ArgoError {}
