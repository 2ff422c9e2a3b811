//! Main parser implementation.

use crate::lexer::{lex, Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::source::Source;
use crate::parser::Parse;
use crate::syntax::SyntaxKind;
use drop_bomb::DropBomb;

/// Parses source text into a syntax tree.
#[must_use]
pub fn parse(source: &str) -> Parse {
    let tokens = lex(source);
    let parser = Parser::new(&tokens, source);
    let events = parser.parse();

    let sink = Sink::new(&tokens, source, events);
    let (green_node, errors) = sink.finish();

    Parse { green_node, errors }
}

/// The parser state.
pub(crate) struct Parser<'t, 'src> {
    pub(crate) source: Source<'t, 'src>,
    pub(crate) events: Vec<Event>,
    /// Set while parsing conditions and types, where a `{` belongs to the
    /// enclosing construct and never opens a resource body.
    pub(crate) forbid_resources: bool,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(
        mut self,
        parser: &mut Parser<'_, '_>,
        kind: SyntaxKind,
    ) -> CompletedMarker {
        self.bomb.defuse();
        match parser.events.get_mut(self.pos) {
            Some(Event::Placeholder) => {
                parser.events[self.pos] = Event::Start {
                    kind,
                    forward_parent: None,
                };
            }
            Some(Event::Start {
                kind: existing_kind,
                ..
            }) => {
                *existing_kind = kind;
            }
            _ => {}
        }
        parser.events.push(Event::Finish);
        CompletedMarker {
            pos: self.pos,
            kind,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pub(crate) pos: usize,
    pub(crate) kind: SyntaxKind,
}

impl CompletedMarker {
    pub(crate) fn precede(self, parser: &mut Parser<'_, '_>) -> Marker {
        let new_pos = parser.events.len();
        parser.events.push(Event::Placeholder);
        set_forward_parent(&mut parser.events, self.pos, new_pos);
        Marker {
            pos: new_pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }
}

fn set_forward_parent(events: &mut [Event], from: usize, to: usize) {
    let mut current = from;
    loop {
        match &mut events[current] {
            Event::Start {
                forward_parent: Some(fp),
                ..
            } => {
                current += *fp as usize;
            }
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some((to - current) as u32);
                break;
            }
            _ => break,
        }
    }
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            source: Source::new(tokens, source),
            events: Vec::new(),
            forbid_resources: false,
        }
    }

    fn parse(mut self) -> Vec<Event> {
        self.start_node(SyntaxKind::SourceFile);

        while !self.at_end() {
            let before = self.pos();
            self.parse_statement();
            self.ensure_progress(before);
        }

        self.finish_node();

        self.events
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.source.current() == kind
    }

    pub(crate) fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current())
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    /// Returns `true` if the current token is separated from the previous
    /// one by whitespace or comments.
    pub(crate) fn at_detached(&self) -> bool {
        self.source.current_is_detached()
    }

    pub(crate) fn current_text(&self) -> &'src str {
        self.source.current_text()
    }

    pub(crate) fn pos(&self) -> usize {
        self.source.position()
    }

    pub(crate) fn bump(&mut self) {
        let kind = self.source.current();
        if kind == TokenKind::Eof {
            return;
        }
        self.events.push(Event::token(SyntaxKind::from(kind)));
        self.source.bump();
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    pub(crate) fn error(&mut self, message: &str) {
        self.events.push(Event::Error {
            message: message.to_string(),
        });
    }

    /// Consumes `kind` or records `message` without consuming anything.
    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.error(message);
            false
        }
    }

    /// Records an error and wraps the offending token in an `ErrorNode`.
    pub(crate) fn err_and_bump(&mut self, message: &str) {
        self.error(message);
        if self.at_end() {
            return;
        }
        self.start_node(SyntaxKind::ErrorNode);
        self.bump();
        self.finish_node();
    }

    /// Guarantees forward progress for list loops: if nothing was consumed
    /// since `before`, the current token becomes an error node.
    pub(crate) fn ensure_progress(&mut self, before: usize) {
        if self.pos() == before && !self.at_end() {
            self.err_and_bump("unexpected token");
        }
    }

    /// Returns `true` at tokens that terminate a statement list.
    pub(crate) fn at_block_end(&self) -> bool {
        self.at(TokenKind::RBrace) || self.at_end()
    }
}
