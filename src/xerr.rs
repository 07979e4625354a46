// std imports
use std::{fmt, path::Path};

// third-party imports
use owo_colors::{Style, Styled};

// ---

/// Quotes and highlights a value for use in error messages.
pub trait HighlightQuoted {
    type Output: fmt::Display;

    fn hlq(self) -> Self::Output;
}

impl<'a, S> HighlightQuoted for &'a S
where
    S: fmt::Display,
{
    type Output = Styled<Quoted<&'a S>>;

    fn hlq(self) -> Self::Output {
        HIGHLIGHT.style(Quoted(self))
    }
}

impl<'a> HighlightQuoted for &'a Path {
    type Output = Styled<Quoted<std::path::Display<'a>>>;

    fn hlq(self) -> Self::Output {
        HIGHLIGHT.style(Quoted(self.display()))
    }
}

// ---

/// Formats the inner value as a double-quoted string with escapes.
pub struct Quoted<S>(S);

impl<S> fmt::Display for Quoted<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0.to_string())
    }
}

const HIGHLIGHT: Style = Style::new().yellow();
