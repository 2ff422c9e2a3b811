//! Syntax tree types for Puppet manifests.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite nodes.

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        define_syntax_kind! {
            @nodes [$($token),*]

            /// Root node of a manifest
            SourceFile => "manifest",

            /// `class name (params) inherits base { ... }`
            ClassDefinition => "class_definition",

            /// `define name (params) { ... }`
            DefinedResourceType => "defined_resource_type",

            /// `node 'host', /re/ { ... }`
            NodeDefinition => "node_definition",

            /// `function name (params) >> Type { ... }`
            FunctionDeclaration => "function_declaration",

            /// `plan name (params) { ... }`
            PlanDefinition => "plan_definition",

            /// `type Name = TypeExpr`
            TypeAlias => "type_alias",

            /// Parenthesized parameter list of a definition
            ParameterList => "parameter_list",

            /// Single parameter: `Type *$name = default`
            Parameter => "parameter",

            /// Braced statement body
            Block => "block",

            /// `type { 'title': attr => value; ... }`
            ResourceDeclaration => "resource_declaration",

            /// One `title: attributes` section of a resource declaration
            ResourceBody => "resource_body",

            /// `name => value` or `name +> value`
            Attribute => "attribute",

            /// `File { attr => value }`
            ResourceDefaults => "resource_defaults",

            /// `File['x'] { attr => value }`
            ResourceOverride => "resource_override",

            /// `User <| query |>` or `User <<| query |>>`
            Collector => "collector",

            /// `if cond { } elsif cond { } else { }`
            IfExpression => "if_expression",

            /// `elsif cond { }`
            ElsifClause => "elsif_clause",

            /// `else { }`
            ElseClause => "else_clause",

            /// `unless cond { } else { }`
            UnlessExpression => "unless_expression",

            /// `case expr { options }`
            CaseStatement => "case_statement",

            /// `'a', 'b': { ... }`
            CaseOption => "case_option",

            /// `expr ? { cases }`
            Selector => "selector",

            /// `match => value` inside a selector
            SelectorCase => "selector_case",

            /// `name(args)` or `include name`
            CallFunction => "call_function",

            /// `$receiver.name(args) |params| { }`
            CallMethod => "call_method",

            /// Parenthesized call arguments
            ArgumentList => "argument_list",

            /// `|params| { body }`
            Lambda => "lambda",

            /// `|$a, $b|`
            LambdaParameters => "lambda_parameters",

            /// `[a, b]`
            Array => "array",

            /// `{ k => v }`
            Hash => "hash",

            /// `k => v` inside a hash
            HashEntry => "hash_entry",

            /// `$x = expr`
            Assignment => "assignment",

            /// `a op b`
            BinaryExpression => "binary_expression",

            /// `!a`, `-a`, `*a`
            UnaryExpression => "unary_expression",

            /// `(expr)`
            ParenExpression => "parenthesized_expression",

            /// `Type[args]` or `$x[index]`
            AccessExpression => "access",

            /// Variable reference
            VariableRef => "variable",

            /// Bare word
            NameRef => "name",

            /// Capitalized type reference
            TypeRef => "type",

            /// String, number, regex, boolean, `undef` or `default`
            Literal => "literal",

            /// Parser recovery node
            ErrorNode => "ERROR",
        }
    };
    (@nodes [$($token:ident),*] $($(#[$meta:meta])* $node:ident => $tag:literal),* $(,)?) => {
        /// All syntax node and token kinds in the Puppet language.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // =========================================================================
            // COMPOSITE NODE KINDS (produced by parser)
            // =========================================================================
            $($(#[$meta])* $node,)*
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            $(SyntaxKind::$node,)*
        ];

        impl SyntaxKind {
            /// Returns the stable string tag of a composite node kind.
            fn node_type_name(self) -> Option<&'static str> {
                match self {
                    $(Self::$node => Some($tag),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment | Self::BlockComment)
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns `true` for recovery nodes and unrecognized characters.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::ErrorNode | Self::Error)
    }

    /// Returns `true` if this token closes a bracketed construct.
    #[must_use]
    pub fn is_closing_delimiter(self) -> bool {
        matches!(self, Self::RBrace | Self::RParen | Self::RBracket)
    }

    /// Returns `true` for keyword tokens.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::KwAnd as u16) && (self as u16) <= (Self::KwUnless as u16)
    }

    /// Returns the type tag used by tree queries.
    ///
    /// Composite nodes use snake-case tags (`"class_definition"`,
    /// `"hash"`, ...), recovery nodes are `"ERROR"`, and tokens use either
    /// their category (`"comment"`, `"string"`, `"variable"`, ...) or their
    /// literal punctuation (`"{"`, `"=>"`, ...).
    #[must_use]
    pub fn type_name(self) -> &'static str {
        if let Some(tag) = self.node_type_name() {
            return tag;
        }
        match self {
            Self::Whitespace => "whitespace",
            Self::Comment | Self::BlockComment => "comment",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Pipe => "|",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Question => "?",
            Self::At => "@",
            Self::AtAt => "@@",
            Self::FatArrow => "=>",
            Self::PlusArrow => "+>",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Match => "=~",
            Self::NotMatch => "!~",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::InEdge => "->",
            Self::InEdgeSub => "~>",
            Self::OutEdge => "<-",
            Self::OutEdgeSub => "<~",
            Self::LCollect => "<|",
            Self::RCollect => "|>",
            Self::LLCollect => "<<|",
            Self::RRCollect => "|>>",
            Self::KwAnd => "and",
            Self::KwCase => "case",
            Self::KwClass => "class",
            Self::KwDefault => "default",
            Self::KwDefine => "define",
            Self::KwElse => "else",
            Self::KwElsif => "elsif",
            Self::KwFalse => "false",
            Self::KwFunction => "function",
            Self::KwIf => "if",
            Self::KwIn => "in",
            Self::KwInherits => "inherits",
            Self::KwNode => "node",
            Self::KwOr => "or",
            Self::KwPlan => "plan",
            Self::KwTrue => "true",
            Self::KwType => "type",
            Self::KwUndef => "undef",
            Self::KwUnless => "unless",
            Self::Variable => "variable_name",
            Self::Name => "identifier",
            Self::TypeName => "type_name",
            Self::Number => "number",
            Self::String => "string",
            Self::Regex => "regex",
            Self::Error => "ERROR",
            _ => "eof",
        }
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for Puppet manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PuppetLanguage {}

impl rowan::Language for PuppetLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the Puppet syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<PuppetLanguage>;

/// A syntax token in the Puppet syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<PuppetLanguage>;

/// A syntax element (either node or token) in the Puppet syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<PuppetLanguage>;

/// A builder for syntax trees.
pub type SyntaxTreeBuilder = rowan::GreenNodeBuilder<'static>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::Language;

    #[test]
    fn test_token_kind_to_syntax_kind() {
        assert_eq!(SyntaxKind::from(TokenKind::KwClass), SyntaxKind::KwClass);
        assert_eq!(SyntaxKind::from(TokenKind::Variable), SyntaxKind::Variable);
        assert_eq!(SyntaxKind::from(TokenKind::FatArrow), SyntaxKind::FatArrow);
        assert_eq!(SyntaxKind::from(TokenKind::Eof), SyntaxKind::Eof);
    }

    #[test]
    fn test_is_trivia() {
        assert!(SyntaxKind::Whitespace.is_trivia());
        assert!(SyntaxKind::Comment.is_trivia());
        assert!(SyntaxKind::BlockComment.is_trivia());
        assert!(!SyntaxKind::Name.is_trivia());
    }

    #[test]
    fn test_is_token_vs_node() {
        assert!(SyntaxKind::Name.is_token());
        assert!(SyntaxKind::KwIf.is_token());
        assert!(!SyntaxKind::IfExpression.is_token());
        assert!(SyntaxKind::ClassDefinition.is_node());
        assert!(!SyntaxKind::RBrace.is_node());
    }

    #[test]
    fn test_raw_kind_round_trips() {
        for kind in [
            SyntaxKind::Whitespace,
            SyntaxKind::Eof,
            SyntaxKind::SourceFile,
            SyntaxKind::Hash,
            SyntaxKind::ErrorNode,
        ] {
            assert_eq!(PuppetLanguage::kind_from_raw(kind.into()), kind);
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SyntaxKind::ClassDefinition.type_name(), "class_definition");
        assert_eq!(SyntaxKind::ParameterList.type_name(), "parameter_list");
        assert_eq!(SyntaxKind::CallFunction.type_name(), "call_function");
        assert_eq!(SyntaxKind::IfExpression.type_name(), "if_expression");
        assert_eq!(SyntaxKind::ErrorNode.type_name(), "ERROR");
        assert_eq!(SyntaxKind::RBrace.type_name(), "}");
        assert_eq!(SyntaxKind::Comment.type_name(), "comment");
    }

    #[test]
    fn test_keyword_range() {
        assert!(SyntaxKind::KwAnd.is_keyword());
        assert!(SyntaxKind::KwUnless.is_keyword());
        assert!(SyntaxKind::KwType.is_keyword());
        assert!(!SyntaxKind::Variable.is_keyword());
        assert!(!SyntaxKind::RRCollect.is_keyword());
    }
}
