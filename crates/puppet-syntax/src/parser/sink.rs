//! Sink for converting parser events into a syntax tree.
//!
//! The sink takes the flat event stream and builds a proper `rowan` green
//! tree. Trivia placement is what gives nodes meaningful start offsets:
//!
//! - leading trivia is emitted *before* a node starts, so it belongs to the
//!   enclosing node and a node always starts at its first significant token;
//! - trailing trivia is left for whatever comes next, so a node ends at its
//!   last significant token;
//! - whatever trivia remains at the end of input is attached to the root,
//!   unless input ended inside a node that is still missing its closer:
//!   that node keeps the trailing trivia, so a blank line typed after an
//!   unclosed `{` still sits inside the body.

use text_size::{TextRange, TextSize};

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from parser events.
pub struct Sink<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    events: Vec<Event>,
    cursor: usize,
    depth: usize,
    /// An error was raised with only trivia left; the next node to finish
    /// is the unclosed one.
    unclosed_at_eof: bool,
    builder: rowan::GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
}

impl<'t, 'src> Sink<'t, 'src> {
    /// Creates a new sink.
    pub fn new(tokens: &'t [Token], source: &'src str, events: Vec<Event>) -> Self {
        Self {
            tokens,
            source,
            events,
            cursor: 0,
            depth: 0,
            unclosed_at_eof: false,
            builder: rowan::GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    /// Consumes the sink and returns the green tree and errors.
    pub fn finish(mut self) -> (rowan::GreenNode, Vec<ParseError>) {
        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    let mut kinds = vec![kind];
                    let mut idx = i;
                    let mut fp = forward_parent;

                    while let Some(fp_idx) = fp {
                        idx += fp_idx as usize;
                        if let Event::Start {
                            kind,
                            forward_parent,
                        } = std::mem::replace(&mut self.events[idx], Event::Placeholder)
                        {
                            kinds.push(kind);
                            fp = forward_parent;
                        } else {
                            break;
                        }
                    }

                    // The root has nowhere else to put leading trivia.
                    if self.depth > 0 {
                        self.eat_trivia();
                    }
                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(rowan::SyntaxKind(kind as u16));
                        self.depth += 1;
                    }
                }
                Event::Token { kind } => {
                    self.eat_trivia();
                    self.token(kind);
                }
                Event::Finish => {
                    if self.depth == 1 {
                        self.eat_remaining();
                    } else if std::mem::take(&mut self.unclosed_at_eof) {
                        self.eat_trivia();
                    }
                    self.builder.finish_node();
                    self.depth = self.depth.saturating_sub(1);
                }
                Event::Error { message } => {
                    let range = self.next_significant_range();
                    if self.only_trivia_left() {
                        self.unclosed_at_eof = true;
                    }
                    self.error(ParseError { message, range });
                }
                Event::Placeholder => {}
            }
        }

        (self.builder.finish(), self.errors)
    }

    /// Adds trivia (whitespace, comments) to the tree.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds every token the parser did not consume, keeping the tree lossless.
    fn eat_remaining(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds a token to the tree.
    fn token(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get(self.cursor) {
            let text =
                &self.source[usize::from(token.range.start())..usize::from(token.range.end())];
            self.builder.token(rowan::SyntaxKind(kind as u16), text);
            self.cursor += 1;
        }
    }

    fn only_trivia_left(&self) -> bool {
        self.tokens[self.cursor..]
            .iter()
            .all(|token| token.kind.is_trivia())
    }

    fn next_significant_range(&self) -> TextRange {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.kind.is_trivia())
            .map(|token| token.range)
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.source)))
    }

    /// Adds an error.
    pub fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}
