//! Resource parsing.
//!
//! Supported forms:
//! - Declarations: `file { 'title': attr => value; 'other': }`
//! - Virtual and exported declarations: `@user { ... }`, `@@host { ... }`
//! - Class declarations: `class { 'ntp': servers => [...] }`
//! - Defaults: `File { mode => '0644' }`
//! - Overrides: `File['/etc/motd'] { owner => root }`
//! - Collector bodies: `User <| tag == 'admin' |> { shell => '/bin/zsh' }`

use crate::lexer::TokenKind;
use crate::parser::CompletedMarker;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a resource declaration.
    pub(crate) fn parse_resource_declaration(&mut self) -> CompletedMarker {
        let m = self.start();
        if self.at_any(&[TokenKind::At, TokenKind::AtAt]) {
            self.bump();
        }

        if self.at_any(&[TokenKind::Name, TokenKind::KwClass]) {
            self.bump();
        } else {
            self.error("expected resource type");
        }

        if self.expect(TokenKind::LBrace, "expected '{' after resource type") {
            while !self.at_block_end() {
                let before = self.pos();
                self.parse_resource_body();
                if self.at(TokenKind::Semicolon) {
                    self.bump();
                } else if !self.at_block_end() {
                    self.ensure_progress(before);
                    if !self.at_resource_body_start() {
                        break;
                    }
                    self.error("expected ';' between resource bodies");
                }
            }
            self.expect(TokenKind::RBrace, "expected '}'");
        }

        m.complete(self, SyntaxKind::ResourceDeclaration)
    }

    fn at_resource_body_start(&self) -> bool {
        self.current().can_start_expr() || self.at_attribute_start()
    }

    /// Parse `title: attributes`.
    fn parse_resource_body(&mut self) {
        self.start_node(SyntaxKind::ResourceBody);
        if self.at_attribute_start() {
            self.error("expected resource title");
        } else {
            self.parse_expression();
            self.expect(TokenKind::Colon, "expected ':' after resource title");
        }
        self.parse_attributes();
        self.finish_node();
    }

    /// Parse `Type { attributes }`.
    pub(crate) fn parse_resource_defaults(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // TypeName
        self.parse_attribute_block();
        m.complete(self, SyntaxKind::ResourceDefaults)
    }

    /// Parse `{ attributes }` without opening a node of its own.
    pub(crate) fn parse_attribute_block(&mut self) {
        if self.expect(TokenKind::LBrace, "expected '{'") {
            self.parse_attributes();
            if !self.at_block_end() {
                self.error("expected attribute");
                while !self.at_block_end() {
                    self.err_and_bump("unexpected token in attribute list");
                }
            }
            self.expect(TokenKind::RBrace, "expected '}'");
        }
    }

    /// Returns `true` at `name =>`, `name +>` or `* =>`.
    pub(crate) fn at_attribute_start(&self) -> bool {
        let current = self.current();
        let next = self.peek_kind_n(1);
        if current == TokenKind::Star {
            return next == TokenKind::FatArrow;
        }
        (current == TokenKind::Name || current.is_keyword())
            && matches!(next, TokenKind::FatArrow | TokenKind::PlusArrow)
    }

    fn parse_attributes(&mut self) {
        while self.at_attribute_start() {
            self.parse_attribute();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else if self.at_attribute_start() {
                self.error("expected ',' between attributes");
            } else {
                break;
            }
        }
    }

    fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::Attribute);
        self.bump(); // name or *
        self.bump(); // => or +>
        self.parse_expression();
        self.finish_node();
    }
}
