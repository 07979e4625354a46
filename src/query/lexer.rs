// std imports
use std::iter::Enumerate;
use std::mem::take;
use std::str::Chars;

// local imports
use super::error::{SyntaxError, SyntaxErrorKind};

// ---

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Zero-based character offset of the first character of the token.
    pub pos: usize,
}

impl Token {
    fn new(kind: TokenKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted text, always matched literally.
    Term(String),
    /// Quoted text with its quotes removed and `\"` resolved.
    ///
    /// Other escape pairs are kept for the pattern compiler.
    Phrase { text: String, has_wildcard: bool },
    And,
    Or,
    LParen,
    RParen,
}

impl TokenKind {
    pub fn has_wildcard(&self) -> bool {
        matches!(self, Self::Phrase { has_wildcard: true, .. })
    }
}

// ---

/// Splits a query into tokens.
///
/// Fails only on a quote that is opened but never closed.
pub fn tokenize(query: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(query).run()
}

struct Lexer<'a> {
    chars: Enumerate<Chars<'a>>,
    tokens: Vec<Token>,
    term: String,
    term_pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(query: &'a str) -> Self {
        Self {
            chars: query.chars().enumerate(),
            tokens: Vec::new(),
            term: String::new(),
            term_pos: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, SyntaxError> {
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '"' => {
                    self.flush_term();
                    self.phrase(pos)?;
                }
                '(' => {
                    self.flush_term();
                    self.tokens.push(Token::new(TokenKind::LParen, pos));
                }
                ')' => {
                    self.flush_term();
                    self.tokens.push(Token::new(TokenKind::RParen, pos));
                }
                _ if ch.is_whitespace() => self.flush_term(),
                _ => {
                    if self.term.is_empty() {
                        self.term_pos = pos;
                    }
                    self.term.push(ch);
                }
            }
        }

        self.flush_term();
        Ok(self.tokens)
    }

    fn flush_term(&mut self) {
        if self.term.is_empty() {
            return;
        }

        let term = take(&mut self.term);
        let kind = if term.eq_ignore_ascii_case("and") {
            TokenKind::And
        } else if term.eq_ignore_ascii_case("or") {
            TokenKind::Or
        } else {
            TokenKind::Term(term)
        };
        self.tokens.push(Token::new(kind, self.term_pos));
    }

    fn phrase(&mut self, start: usize) -> Result<(), SyntaxError> {
        let mut text = String::new();
        let mut has_wildcard = false;

        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => {
                    self.tokens.push(Token::new(TokenKind::Phrase { text, has_wildcard }, start));
                    return Ok(());
                }
                '\\' => match self.chars.next() {
                    Some((_, '"')) => text.push('"'),
                    Some((_, escaped)) => {
                        text.push('\\');
                        text.push(escaped);
                    }
                    None => break,
                },
                '*' => {
                    has_wildcard = true;
                    text.push('*');
                }
                _ => text.push(ch),
            }
        }

        Err(SyntaxError::new(SyntaxErrorKind::UnterminatedQuote, start))
    }
}
