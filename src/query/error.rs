// third-party imports
use thiserror::Error;

/// SyntaxError is an error which may occur when tokenizing or parsing a query.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at column {}", .pos + 1)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Zero-based character offset of the offending token in the query.
    pub pos: usize,
}

impl SyntaxError {
    pub(super) fn new(kind: SyntaxErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("missing operand")]
    MissingOperand,
    #[error("unexpected operator")]
    UnexpectedOperator,
}
