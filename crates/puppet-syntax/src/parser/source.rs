//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps a token stream
//! and provides lookahead and consumption operations.

use crate::lexer::{Token, TokenKind};

/// A token source that provides tokens to the parser.
pub struct Source<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    cursor: usize,
}

impl<'t, 'src> Source<'t, 'src> {
    /// Creates a new source from tokens and source text.
    pub fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            tokens,
            source,
            cursor: 0,
        }
    }

    /// Returns the current token kind, or `Eof` if at end.
    pub fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token, or `None` if at end.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek_token_n(0)
    }

    /// Peeks at the nth non-trivia token ahead.
    pub fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n).map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Peeks at the nth non-trivia token ahead and returns the token.
    pub fn peek_token_n(&self, n: usize) -> Option<&Token> {
        self.tokens[self.cursor..]
            .iter()
            .filter(|token| !token.kind.is_trivia())
            .nth(n)
    }

    /// Advances past the current token.
    pub fn bump(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.kind.is_trivia() {
                break;
            }
        }
    }

    /// Returns `true` if at end of input.
    pub fn at_end(&self) -> bool {
        self.current() == TokenKind::Eof
    }

    /// Returns `true` if trivia separates the previous token from the
    /// current one. Puppet's `[` only indexes when it touches its operand.
    pub fn current_is_detached(&self) -> bool {
        self.tokens
            .get(self.cursor)
            .is_some_and(|token| token.kind.is_trivia())
    }

    /// Raw position in the token stream; used to detect stalled loops.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the text of the current token.
    pub fn current_text(&self) -> &'src str {
        self.current_token()
            .map(|t| &self.source[usize::from(t.range.start())..usize::from(t.range.end())])
            .unwrap_or("")
    }
}
