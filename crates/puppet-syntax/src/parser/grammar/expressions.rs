//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! Operator precedence (lowest to highest):
//! 1. Relationship arrows: `->`, `~>`, `<-`, `<~`
//! 2. Assignment: `=` (right associative)
//! 3. `or`
//! 4. `and`
//! 5. Comparison and matching: `==`, `!=`, `=~`, `!~`, `<`, `>`, `<=`, `>=`
//! 6. `in`
//! 7. Shift / append: `<<`, `>>`
//! 8. Additive: `+`, `-`
//! 9. Multiplicative: `*`, `/`, `%`
//! 10. Unary: `!`, `-`, `*` (splat)
//! 11. Postfix: access `[]`, method calls `.name()`, selectors `? {}`,
//!     collectors `<| |>`

use crate::lexer::TokenKind;
use crate::parser::CompletedMarker;
use crate::syntax::SyntaxKind;

use super::super::Parser;

/// Binds tighter than every infix operator, so only a primary and its
/// postfix operators are parsed.
const POSTFIX_ONLY_BP: u8 = 20;

impl Parser<'_, '_> {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> CompletedMarker {
        self.parse_expr_bp(0)
    }

    /// Parse an expression in which `{` belongs to the enclosing construct.
    pub(crate) fn parse_condition(&mut self) -> CompletedMarker {
        self.parse_restricted(0)
    }

    /// Parse a type such as `Optional[Hash[String, Integer]]`.
    pub(crate) fn parse_type_expression(&mut self) -> CompletedMarker {
        self.parse_restricted(POSTFIX_ONLY_BP)
    }

    fn parse_restricted(&mut self, min_bp: u8) -> CompletedMarker {
        let saved = std::mem::replace(&mut self.forbid_resources, true);
        let completed = self.parse_expr_bp(min_bp);
        self.forbid_resources = saved;
        completed
    }

    /// Runs `f` with resource bodies allowed again, as inside brackets.
    pub(crate) fn parse_unrestricted(&mut self, f: impl FnOnce(&mut Self)) {
        let saved = std::mem::replace(&mut self.forbid_resources, false);
        f(self);
        self.forbid_resources = saved;
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> CompletedMarker {
        let mut lhs = if let Some(bp) = self.current().prefix_binding_power() {
            let m = self.start();
            self.bump();
            self.parse_expr_bp(bp);
            m.complete(self, SyntaxKind::UnaryExpression)
        } else {
            self.parse_primary()
        };

        loop {
            if let Some(next) = self.parse_postfix(lhs) {
                lhs = next;
                continue;
            }

            let op = self.current();
            let Some((left_bp, right_bp)) = op.infix_binding_power() else {
                break;
            };
            if left_bp < min_bp {
                break;
            }

            let m = lhs.precede(self);
            self.bump();
            self.parse_expr_bp(right_bp);
            let kind = if op == TokenKind::Eq {
                SyntaxKind::Assignment
            } else {
                SyntaxKind::BinaryExpression
            };
            lhs = m.complete(self, kind);
        }

        lhs
    }

    fn parse_postfix(&mut self, lhs: CompletedMarker) -> Option<CompletedMarker> {
        match self.current() {
            // `$x [1]` is a variable followed by an array, not an access.
            TokenKind::LBracket if !self.at_detached() => {
                let m = lhs.precede(self);
                self.bump();
                self.parse_unrestricted(|p| p.parse_comma_list(TokenKind::RBracket));
                self.expect(TokenKind::RBracket, "expected ']'");
                Some(m.complete(self, SyntaxKind::AccessExpression))
            }
            TokenKind::Dot => {
                let m = lhs.precede(self);
                self.bump();
                if self.at(TokenKind::Name) || self.current().is_keyword() {
                    self.bump();
                } else {
                    self.error("expected method name");
                }
                if self.at(TokenKind::LParen) && !self.at_detached() {
                    self.parse_argument_list();
                }
                if self.at(TokenKind::Pipe) {
                    self.parse_lambda();
                }
                Some(m.complete(self, SyntaxKind::CallMethod))
            }
            TokenKind::Question => {
                let m = lhs.precede(self);
                self.bump();
                self.parse_selector_cases();
                Some(m.complete(self, SyntaxKind::Selector))
            }
            TokenKind::LCollect | TokenKind::LLCollect if lhs.kind == SyntaxKind::TypeRef => {
                let close = if self.at(TokenKind::LCollect) {
                    TokenKind::RCollect
                } else {
                    TokenKind::RRCollect
                };
                let m = lhs.precede(self);
                self.bump();
                if !self.at(close) && !self.at_end() {
                    self.parse_expression();
                }
                self.expect(close, "expected end of collector query");
                if self.at(TokenKind::LBrace) && !self.forbid_resources {
                    self.parse_attribute_block();
                }
                Some(m.complete(self, SyntaxKind::Collector))
            }
            TokenKind::LBrace
                if lhs.kind == SyntaxKind::AccessExpression && !self.forbid_resources =>
            {
                let m = lhs.precede(self);
                self.parse_attribute_block();
                Some(m.complete(self, SyntaxKind::ResourceOverride))
            }
            _ => None,
        }
    }

    fn parse_primary(&mut self) -> CompletedMarker {
        match self.current() {
            TokenKind::Variable => self.wrap_token(SyntaxKind::VariableRef),
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Regex
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwUndef
            | TokenKind::KwDefault => self.wrap_token(SyntaxKind::Literal),
            TokenKind::TypeName
                if self.peek_kind_n(1) == TokenKind::LBrace && !self.forbid_resources =>
            {
                self.parse_resource_defaults()
            }
            TokenKind::TypeName => self.wrap_token(SyntaxKind::TypeRef),
            TokenKind::Name | TokenKind::KwClass
                if self.peek_kind_n(1) == TokenKind::LBrace && !self.forbid_resources =>
            {
                self.parse_resource_declaration()
            }
            TokenKind::At | TokenKind::AtAt => self.parse_resource_declaration(),
            TokenKind::Name if self.peek_kind_n(1) == TokenKind::LParen => {
                self.parse_call_function()
            }
            TokenKind::Name => self.wrap_token(SyntaxKind::NameRef),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_hash(),
            TokenKind::LParen => {
                let m = self.start();
                self.bump();
                self.parse_unrestricted(|p| {
                    p.parse_expression();
                });
                self.expect(TokenKind::RParen, "expected ')'");
                m.complete(self, SyntaxKind::ParenExpression)
            }
            TokenKind::KwIf => self.parse_if(),
            TokenKind::KwUnless => self.parse_unless(),
            TokenKind::KwCase => self.parse_case(),
            kind if kind.is_closing_delimiter() || self.at_end() => {
                // Leave the closer for whoever opened it.
                self.error("expected expression");
                let m = self.start();
                m.complete(self, SyntaxKind::ErrorNode)
            }
            _ => {
                self.error("expected expression");
                self.wrap_token(SyntaxKind::ErrorNode)
            }
        }
    }

    fn wrap_token(&mut self, kind: SyntaxKind) -> CompletedMarker {
        let m = self.start();
        self.bump();
        m.complete(self, kind)
    }

    /// Parse `name(args) |params| { }`.
    fn parse_call_function(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // name
        self.parse_argument_list();
        if self.at(TokenKind::Pipe) {
            self.parse_lambda();
        }
        m.complete(self, SyntaxKind::CallFunction)
    }

    /// Parse `( expr, ... )`.
    fn parse_argument_list(&mut self) {
        self.start_node(SyntaxKind::ArgumentList);
        self.bump(); // (
        self.parse_unrestricted(|p| p.parse_comma_list(TokenKind::RParen));
        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }

    /// Parse `|params| { body }`.
    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::Lambda);
        self.parse_lambda_parameters();
        self.parse_block();
        self.finish_node();
    }

    fn parse_array(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // [
        self.parse_unrestricted(|p| p.parse_comma_list(TokenKind::RBracket));
        self.expect(TokenKind::RBracket, "expected ']'");
        m.complete(self, SyntaxKind::Array)
    }

    fn parse_hash(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // {
        self.parse_unrestricted(|p| {
            while !p.at(TokenKind::RBrace) && !p.at_end() {
                p.start_node(SyntaxKind::HashEntry);
                p.parse_expression();
                p.expect(TokenKind::FatArrow, "expected '=>' in hash entry");
                p.parse_expression();
                p.finish_node();
                if p.at(TokenKind::Comma) {
                    p.bump();
                } else {
                    break;
                }
            }
        });
        self.expect(TokenKind::RBrace, "expected '}'");
        m.complete(self, SyntaxKind::Hash)
    }

    /// Parse `{ match => value, ... }` after a `?`.
    fn parse_selector_cases(&mut self) {
        if !self.expect(TokenKind::LBrace, "expected '{' after '?'") {
            return;
        }
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            self.start_node(SyntaxKind::SelectorCase);
            self.parse_expression();
            self.expect(TokenKind::FatArrow, "expected '=>' in selector");
            self.parse_expression();
            self.finish_node();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(TokenKind::RBrace, "expected '}'");
    }

    /// Parse `expr, expr, ...` up to (not including) `close`. A trailing
    /// comma is allowed.
    fn parse_comma_list(&mut self, close: TokenKind) {
        while !self.at(close) && !self.at_end() {
            self.parse_expression();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
    }
}
