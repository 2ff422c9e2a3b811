//! Lexer for Puppet manifests.
//!
//! This module provides a lexer that tokenizes manifest source into a stream
//! of tokens with their positions in the source text.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lexer for Puppet source code.
///
/// The lexer is an iterator over tokens. It handles all error recovery
/// internally - any unrecognized characters are returned as `TokenKind::Error`.
///
/// Puppet's `/` is ambiguous between division and a regex literal. The
/// lexer resolves it from the previous significant token: after an operand
/// it is a division, anywhere else a `/.../` on a single line is a regex.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    prev_significant: Option<TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            prev_significant: None,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.slice()
    }

    fn regex_allowed(&self) -> bool {
        self.prev_significant
            .map_or(true, |prev| !prev.can_end_operand())
    }

    /// Length of a regex body after the opening `/`, including the closing
    /// `/`, if one exists before the end of the line.
    fn regex_body_len(&self) -> Option<usize> {
        let bytes = self.inner.remainder().as_bytes();
        let mut i = 0usize;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'\n' => return None,
                b'/' => return Some(i + 1),
                _ => i += 1,
            }
        }
        None
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();

        let mut kind = kind.unwrap_or(TokenKind::Error);
        let mut end = span.end;

        if kind == TokenKind::Slash && self.regex_allowed() {
            if let Some(len) = self.regex_body_len() {
                self.inner.bump(len);
                kind = TokenKind::Regex;
                end = span.end + len;
            }
        }

        if !kind.is_trivia() {
            self.prev_significant = Some(kind);
        }

        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(end as u32),
        );
        Some(Token::new(kind, range))
    }
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for testing and simple use cases.
/// For the parser, use the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}
