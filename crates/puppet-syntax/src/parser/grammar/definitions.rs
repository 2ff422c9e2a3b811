//! Definition parsing.
//!
//! Supported definitions:
//! - `class name (params) inherits parent { ... }`
//! - `define name (params) { ... }`
//! - `node 'matcher', /regex/, default inherits parent { ... }`
//! - `function name (params) >> ReturnType { ... }`
//! - `plan name (params) { ... }`
//! - `type Name = TypeExpression`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

/// Tokens that may appear in a node matcher, including the pieces of
/// unquoted dotted host names.
const NODE_MATCHER_TOKENS: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Name,
    TokenKind::Regex,
    TokenKind::Number,
    TokenKind::KwDefault,
    TokenKind::Dot,
    TokenKind::Minus,
];

impl Parser<'_, '_> {
    /// Parse a class definition.
    pub(crate) fn parse_class_definition(&mut self) {
        self.start_node(SyntaxKind::ClassDefinition);
        self.bump(); // class

        if self.at(TokenKind::Name) {
            self.bump();
        } else {
            self.error("expected class name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_parameter_list();
        }

        if self.at(TokenKind::KwInherits) {
            self.bump();
            if self.at_any(&[TokenKind::Name, TokenKind::KwDefault]) {
                self.bump();
            } else {
                self.error("expected parent class name");
            }
        }

        self.parse_block();
        self.finish_node();
    }

    /// Parse a defined resource type.
    pub(crate) fn parse_defined_type(&mut self) {
        self.start_node(SyntaxKind::DefinedResourceType);
        self.bump(); // define

        if self.at(TokenKind::Name) {
            self.bump();
        } else {
            self.error("expected defined type name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_parameter_list();
        }

        self.parse_block();
        self.finish_node();
    }

    /// Parse a node definition.
    pub(crate) fn parse_node_definition(&mut self) {
        self.start_node(SyntaxKind::NodeDefinition);
        self.bump(); // node

        let mut matchers = 0;
        loop {
            if self.at_any(NODE_MATCHER_TOKENS) {
                self.bump();
                matchers += 1;
            } else if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
        if matchers == 0 {
            self.error("expected node matcher");
        }

        if self.at(TokenKind::KwInherits) {
            self.bump();
            if self.at_any(NODE_MATCHER_TOKENS) {
                self.bump();
            } else {
                self.error("expected parent node");
            }
        }

        self.parse_block();
        self.finish_node();
    }

    /// Parse a Puppet language function.
    pub(crate) fn parse_function_declaration(&mut self) {
        self.start_node(SyntaxKind::FunctionDeclaration);
        self.bump(); // function

        if self.at(TokenKind::Name) {
            self.bump();
        } else {
            self.error("expected function name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_parameter_list();
        }

        if self.at(TokenKind::Shr) {
            self.bump();
            self.parse_type_expression();
        }

        self.parse_block();
        self.finish_node();
    }

    /// Parse a plan definition.
    pub(crate) fn parse_plan_definition(&mut self) {
        self.start_node(SyntaxKind::PlanDefinition);
        self.bump(); // plan

        if self.at(TokenKind::Name) {
            self.bump();
        } else {
            self.error("expected plan name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_parameter_list();
        }

        self.parse_block();
        self.finish_node();
    }

    /// Parse `type Name = TypeExpression`.
    pub(crate) fn parse_type_alias(&mut self) {
        self.start_node(SyntaxKind::TypeAlias);
        self.bump(); // type
        self.bump(); // TypeName
        self.expect(TokenKind::Eq, "expected '=' in type alias");
        self.parse_type_expression();
        self.finish_node();
    }

    /// Parse `( param, ... )`.
    pub(crate) fn parse_parameter_list(&mut self) {
        self.start_node(SyntaxKind::ParameterList);
        self.bump(); // (
        self.parse_parameters_until(TokenKind::RParen);
        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }

    /// Parse `| param, ... |`.
    pub(crate) fn parse_lambda_parameters(&mut self) {
        self.start_node(SyntaxKind::LambdaParameters);
        self.bump(); // |
        self.parse_parameters_until(TokenKind::Pipe);
        self.expect(TokenKind::Pipe, "expected '|'");
        self.finish_node();
    }

    fn parse_parameters_until(&mut self, close: TokenKind) {
        while !self.at(close) && !self.at_end() {
            self.parse_parameter();
            if self.at(TokenKind::Comma) {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Parse `Type *$name = default`.
    fn parse_parameter(&mut self) {
        if !self.at_any(&[TokenKind::TypeName, TokenKind::Star, TokenKind::Variable]) {
            self.err_and_bump("expected parameter");
            return;
        }

        self.start_node(SyntaxKind::Parameter);
        if self.at(TokenKind::TypeName) {
            self.parse_type_expression();
        }
        if self.at(TokenKind::Star) {
            self.bump();
        }
        if self.at(TokenKind::Variable) {
            self.bump();
        } else {
            self.error("expected parameter name");
        }
        if self.at(TokenKind::Eq) {
            self.bump();
            self.parse_expression();
        }
        self.finish_node();
    }
}
