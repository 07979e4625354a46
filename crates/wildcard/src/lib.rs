//! Case-insensitive substring patterns.
//!
//! A [`Pattern`] is searched for anywhere inside a text. Patterns built with
//! [`Pattern::new`] treat each `*` as exactly one arbitrary character, patterns
//! built with [`Pattern::literal`] match their text verbatim.

mod pattern;

pub use pattern::{Pattern, fold_case};
