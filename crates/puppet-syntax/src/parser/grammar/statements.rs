//! Statement parsing for Puppet manifests.
//!
//! Puppet has no statement terminator: a statement ends where the next
//! token can no longer continue it. Supported statements:
//! - Definitions (`class`, `define`, `node`, `function`, `plan`, `type`)
//! - Resource declarations, defaults, overrides and collectors
//! - Statement calls without parentheses: `include foo, bar`
//! - IF/ELSIF/ELSE, UNLESS/ELSE and CASE
//! - Any other expression, e.g. assignments and relationship chains
//! - Stray `;`

use crate::lexer::TokenKind;
use crate::parser::CompletedMarker;
use crate::syntax::SyntaxKind;

use super::super::Parser;

/// Functions that may be called without parentheses at statement level.
const STATEMENT_FUNCTIONS: &[&str] = &[
    "include",
    "require",
    "contain",
    "realize",
    "tag",
    "notice",
    "warning",
    "err",
    "info",
    "debug",
    "crit",
    "emerg",
    "alert",
    "fail",
    "hiera_include",
];

impl Parser<'_, '_> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            TokenKind::KwClass if self.peek_kind_n(1) != TokenKind::LBrace => {
                self.parse_class_definition();
            }
            TokenKind::KwClass => {
                self.parse_expression();
            }
            TokenKind::KwDefine => self.parse_defined_type(),
            TokenKind::KwNode => self.parse_node_definition(),
            TokenKind::KwFunction => self.parse_function_declaration(),
            TokenKind::KwPlan => self.parse_plan_definition(),
            TokenKind::KwType if self.peek_kind_n(1) == TokenKind::TypeName => {
                self.parse_type_alias();
            }
            TokenKind::Name if self.at_statement_call() => self.parse_statement_call(),
            TokenKind::Semicolon => self.bump(),
            kind if kind.can_start_expr() => {
                self.parse_expression();
            }
            _ => self.err_and_bump("expected statement"),
        }
    }

    fn at_statement_call(&self) -> bool {
        let next = self.peek_kind_n(1);
        STATEMENT_FUNCTIONS.contains(&self.current_text())
            && next != TokenKind::LParen
            && next != TokenKind::LBrace
            && next.can_start_expr()
    }

    /// Parse `include a, b` style calls.
    fn parse_statement_call(&mut self) {
        self.start_node(SyntaxKind::CallFunction);
        self.bump(); // function name
        loop {
            self.parse_expression();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.finish_node();
    }

    /// Parse `{ statements }`.
    ///
    /// Without an opening brace the block stays empty; statements that
    /// follow are left to the enclosing list.
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        if self.expect(TokenKind::LBrace, "expected '{'") {
            self.parse_unrestricted(Self::parse_statements_until_block_end);
            self.expect(TokenKind::RBrace, "expected '}'");
        }
        self.finish_node();
    }

    fn parse_statements_until_block_end(&mut self) {
        while !self.at_block_end() {
            let before = self.pos();
            self.parse_statement();
            self.ensure_progress(before);
        }
    }

    /// Parse `if cond { } elsif cond { } else { }`.
    pub(crate) fn parse_if(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // if
        self.parse_condition();
        self.parse_block();

        while self.at(TokenKind::KwElsif) {
            self.start_node(SyntaxKind::ElsifClause);
            self.bump();
            self.parse_condition();
            self.parse_block();
            self.finish_node();
        }

        self.parse_else_clause();
        m.complete(self, SyntaxKind::IfExpression)
    }

    /// Parse `unless cond { } else { }`.
    pub(crate) fn parse_unless(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // unless
        self.parse_condition();
        self.parse_block();
        if self.at(TokenKind::KwElsif) {
            self.error("unless does not accept elsif");
        }
        self.parse_else_clause();
        m.complete(self, SyntaxKind::UnlessExpression)
    }

    fn parse_else_clause(&mut self) {
        if self.at(TokenKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            self.parse_block();
            self.finish_node();
        }
    }

    /// Parse `case expr { option: { } ... }`.
    pub(crate) fn parse_case(&mut self) -> CompletedMarker {
        let m = self.start();
        self.bump(); // case
        self.parse_condition();

        if self.expect(TokenKind::LBrace, "expected '{' after case expression") {
            while !self.at_block_end() {
                let before = self.pos();
                self.parse_case_option();
                self.ensure_progress(before);
            }
            self.expect(TokenKind::RBrace, "expected '}'");
        }

        m.complete(self, SyntaxKind::CaseStatement)
    }

    fn parse_case_option(&mut self) {
        self.start_node(SyntaxKind::CaseOption);
        loop {
            self.parse_expression();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(TokenKind::Colon, "expected ':' after case value");
        self.parse_block();
        self.finish_node();
    }
}
