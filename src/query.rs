// std imports
use std::fmt;

// third-party imports
use serde::Deserialize;
use strum::Display;

// local imports
use crate::model::{Haystack, PageRecord, RecordFilter};

// private modules
mod ast;
mod error;
mod lexer;
mod parser;

// public uses
pub use ast::{Expr, Node, Op};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use lexer::{Token, TokenKind, tokenize};

// ---

/// Grouping of `AND` and `OR` when they are mixed without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Precedence {
    /// Both operators bind equally and fold from left to right, so `a OR b AND c` is `(a OR b) AND c`.
    #[default]
    LeftToRight,
    /// `AND` binds tighter than `OR`, so `a OR b AND c` is `a OR (b AND c)`.
    AndOverOr,
}

impl Precedence {
    fn binding_power(self, op: Op) -> u8 {
        match (self, op) {
            (Self::LeftToRight, _) => 1,
            (Self::AndOverOr, Op::Or) => 1,
            (Self::AndOverOr, Op::And) => 2,
        }
    }
}

// ---

/// A parsed filter query.
///
/// An empty query has no expression and matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    root: Option<Expr>,
}

impl Query {
    /// Parses `query` with the default [`Precedence`].
    pub fn parse(query: &str) -> Result<Self, SyntaxError> {
        Self::parse_with(query, Precedence::default())
    }

    pub fn parse_with(query: &str, precedence: Precedence) -> Result<Self, SyntaxError> {
        let tokens = tokenize(query)?;
        let root = parser::parse(tokens, precedence, query.chars().count())?;
        if let Some(root) = &root {
            log::debug!("parsed query {:?} as {}", query, root);
        }
        Ok(Self { root })
    }

    /// Returns a query matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Expr> {
        self.root.as_ref()
    }

    /// Tests a single record, folding its fields first.
    ///
    /// Use [`RecordFilter::apply`] with a prepared [`Haystack`] to test many queries against the same record.
    pub fn matches<R: PageRecord + ?Sized>(&self, record: &R) -> bool {
        self.is_all() || self.apply(&Haystack::new(record))
    }
}

impl RecordFilter for Query {
    fn apply(&self, record: &Haystack) -> bool {
        match &self.root {
            Some(root) => root.apply(record),
            None => true,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}
