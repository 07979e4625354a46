use std::fmt;
use std::mem::take;

use memchr::memmem::{Finder, find};

/// A case-insensitive pattern searched for as a substring of a text.
///
/// Patterns are created from strings that may contain wildcard characters:
/// - `*` matches exactly one UTF-8 character, never a run of characters
/// - `\` escapes the next character (or is literal if at end of pattern)
///
/// Matching is done against text folded with [`fold_case`], so the pattern
/// and the text compare case-insensitively.
///
/// # Examples
///
/// ```
/// use wildcard::{Pattern, fold_case};
///
/// let pattern = Pattern::new("0 * 0");
/// assert!(pattern.is_found_in(&fold_case("total: 0 1 0")));
/// assert!(!pattern.is_found_in(&fold_case("total: 0 12 0")));
///
/// let pattern = Pattern::literal("0*0");
/// assert!(pattern.is_found_in(&fold_case("0*0")));
/// assert!(!pattern.is_found_in(&fold_case("010")));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Creates a new pattern where each unescaped `*` stands for exactly one character.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// A trailing backslash without a following character is treated as a literal backslash.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("a*c");
    /// assert!(pattern.is_found_in("xxabcxx"));
    /// assert!(!pattern.is_found_in("ac"));
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"a\*c");
    /// assert!(pattern.is_found_in("a*c"));
    /// assert!(!pattern.is_found_in("abc"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Compiler::new().compile(raw.as_ref())
    }

    /// Creates a pattern matching `raw` verbatim, asterisks and backslashes included.
    pub fn literal(raw: impl AsRef<str>) -> Self {
        let text = fold_case(raw.as_ref());
        Self {
            segments: vec![Segment { skip: 0, text }],
        }
    }

    /// Returns `true` if the pattern contains at least one wildcard position.
    pub fn has_wildcards(&self) -> bool {
        self.segments.iter().any(|s| s.skip != 0)
    }

    #[inline]
    /// Tests whether the pattern occurs anywhere in `text`.
    ///
    /// The text is expected to be folded with [`fold_case`] already, which
    /// lets callers fold a text once and test it against many patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{Pattern, fold_case};
    ///
    /// let pattern = Pattern::new("HELLO");
    /// assert!(pattern.is_found_in(&fold_case("Say Hello!")));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("**");
    /// assert!(pattern.is_found_in("🦀🎉"));
    /// assert!(!pattern.is_found_in("🦀"));
    /// ```
    pub fn is_found_in(&self, text: &str) -> bool {
        match self.segments.split_first() {
            None => true,
            Some((first, rest)) if first.skip == 0 => {
                if rest.is_empty() {
                    return find(text.as_bytes(), first.text.as_bytes()).is_some();
                }
                // Candidates may overlap, so resume right after each anchor start.
                let finder = Finder::new(first.text.as_bytes());
                let bytes = text.as_bytes();
                let mut start = 0;
                while start <= bytes.len() {
                    let Some(i) = finder.find(&bytes[start..]) else {
                        return false;
                    };
                    let at = start + i;
                    if Self::matches_at(rest, &text[at + first.text.len()..]) {
                        return true;
                    }
                    start = at + 1;
                }
                false
            }
            Some(_) => text
                .char_indices()
                .any(|(i, _)| Self::matches_at(&self.segments, &text[i..])),
        }
    }

    #[inline]
    fn matches_at(segments: &[Segment], mut text: &str) -> bool {
        for segment in segments {
            for _ in 0..segment.skip {
                let Some(ch) = text.chars().next() else {
                    return false;
                };
                text = &text[ch.len_utf8()..];
            }

            if !text.starts_with(&segment.text) {
                return false;
            }
            text = &text[segment.text.len()..];
        }

        true
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            for _ in 0..segment.skip {
                write!(f, "*")?;
            }

            for ch in segment.text.chars() {
                match ch {
                    '*' | '\\' => write!(f, "\\{}", ch)?,
                    _ => write!(f, "{}", ch)?,
                }
            }
        }
        Ok(())
    }
}

/// Folds the case of `text` the same way patterns fold their own text.
///
/// Folding goes character by character, so context-dependent mappings such as
/// a final sigma are not applied and pattern and text always agree.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    push_folded(&mut folded, text.chars());
    folded
}

#[inline]
fn push_folded(buf: &mut String, chars: impl Iterator<Item = char>) {
    buf.extend(chars.flat_map(char::to_lowercase));
}

// ---

#[derive(Debug, PartialEq, Eq, Clone, Default)]
struct Segment {
    /// Number of single-character wildcards preceding `text`.
    skip: usize,
    text: String,
}

#[derive(Default)]
struct Compiler {
    segments: Vec<Segment>,
    next: Segment,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.next.text.is_empty() {
            self.segments.push(take(&mut self.next));
        }
    }

    fn compile(mut self, raw: &str) -> Pattern {
        let mut chars = raw.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '*' => {
                    self.flush();
                    self.next.skip += 1;
                }
                '\\' => {
                    let escaped = chars.next().unwrap_or('\\');
                    push_folded(&mut self.next.text, std::iter::once(escaped));
                }
                _ => {
                    push_folded(&mut self.next.text, std::iter::once(ch));
                }
            }
        }

        self.flush();

        if self.next.skip > 0 || self.segments.is_empty() {
            self.segments.push(self.next);
        }

        Pattern {
            segments: self.segments,
        }
    }
}
