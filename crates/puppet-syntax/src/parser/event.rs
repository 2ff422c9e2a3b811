//! Parser events.
//!
//! The parser produces a flat stream of events that are later converted
//! into a syntax tree. Errors travel in the same stream so the sink can
//! attach them to the exact token position where they were raised.

use crate::syntax::SyntaxKind;

/// An event produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start a new node.
    Start {
        /// The kind of node being started.
        kind: SyntaxKind,
        /// Forward parent - used when a completed node is wrapped later
        /// (binary operators, selectors, method calls).
        forward_parent: Option<u32>,
    },
    /// Add the next significant token to the current node.
    Token {
        /// The kind of token.
        kind: SyntaxKind,
    },
    /// Finish the current node.
    Finish,
    /// A parse error located at the next significant token.
    Error {
        /// Human readable message.
        message: String,
    },
    /// Placeholder event (will be replaced or removed).
    Placeholder,
}

impl Event {
    /// Creates a start event with no forward parent.
    #[must_use]
    pub fn start(kind: SyntaxKind) -> Self {
        Self::Start {
            kind,
            forward_parent: None,
        }
    }

    /// Creates a token event.
    #[must_use]
    pub fn token(kind: SyntaxKind) -> Self {
        Self::Token { kind }
    }
}
