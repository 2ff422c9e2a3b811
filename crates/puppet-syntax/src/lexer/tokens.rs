//! Token definitions for Puppet manifests.
//!
//! This module defines all lexical tokens that can appear in a manifest.
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library.

use logos::Logos;

/// Scans a `/* ... */` comment. Puppet block comments do not nest.
fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            lex.bump(i + 2);
            return true;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds in the Puppet language.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but not semantically significant
/// - Delimiters and punctuation
/// - Operators
/// - Keywords (reserved words)
/// - Literals and names
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Line comment: `# ...`
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    Comment,

    /// Block comment: `/* ... */`
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // DELIMITERS
    // =========================================================================
    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `|` (lambda parameter fence)
    #[token("|")]
    Pipe,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `,`
    #[token(",")]
    Comma,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `.`
    #[token(".")]
    Dot,

    /// `?`
    #[token("?")]
    Question,

    /// `@` (virtual resource)
    #[token("@")]
    At,

    /// `@@` (exported resource)
    #[token("@@")]
    AtAt,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `=>`
    #[token("=>")]
    FatArrow,

    /// `+>`
    #[token("+>")]
    PlusArrow,

    /// `=`
    #[token("=")]
    Eq,

    /// `==`
    #[token("==")]
    EqEq,

    /// `!=`
    #[token("!=")]
    NotEq,

    /// `=~`
    #[token("=~")]
    Match,

    /// `!~`
    #[token("!~")]
    NotMatch,

    /// `<`
    #[token("<")]
    Lt,

    /// `>`
    #[token(">")]
    Gt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `<<`
    #[token("<<")]
    Shl,

    /// `>>`
    #[token(">>")]
    Shr,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `%`
    #[token("%")]
    Percent,

    /// `!`
    #[token("!")]
    Bang,

    /// `->` (ordering arrow)
    #[token("->")]
    InEdge,

    /// `~>` (notification arrow)
    #[token("~>")]
    InEdgeSub,

    /// `<-` (reverse ordering arrow)
    #[token("<-")]
    OutEdge,

    /// `<~` (reverse notification arrow)
    #[token("<~")]
    OutEdgeSub,

    /// `<|` (collector open)
    #[token("<|")]
    LCollect,

    /// `|>` (collector close)
    #[token("|>")]
    RCollect,

    /// `<<|` (exported collector open)
    #[token("<<|")]
    LLCollect,

    /// `|>>` (exported collector close)
    #[token("|>>")]
    RRCollect,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `and`
    #[token("and")]
    KwAnd,

    /// `case`
    #[token("case")]
    KwCase,

    /// `class`
    #[token("class")]
    KwClass,

    /// `default`
    #[token("default")]
    KwDefault,

    /// `define`
    #[token("define")]
    KwDefine,

    /// `else`
    #[token("else")]
    KwElse,

    /// `elsif`
    #[token("elsif")]
    KwElsif,

    /// `false`
    #[token("false")]
    KwFalse,

    /// `function`
    #[token("function")]
    KwFunction,

    /// `if`
    #[token("if")]
    KwIf,

    /// `in`
    #[token("in")]
    KwIn,

    /// `inherits`
    #[token("inherits")]
    KwInherits,

    /// `node`
    #[token("node")]
    KwNode,

    /// `or`
    #[token("or")]
    KwOr,

    /// `plan`
    #[token("plan")]
    KwPlan,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `type`
    #[token("type")]
    KwType,

    /// `undef`
    #[token("undef")]
    KwUndef,

    /// `unless`
    #[token("unless")]
    KwUnless,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    /// Variable: `$name`, `$::fact`, `$mod::var`, `$0`
    #[regex(r"\$(::)?([a-zA-Z_][a-zA-Z0-9_]*::)*[a-zA-Z0-9_]+")]
    Variable,

    /// Bare word or qualified name: `file`, `foo::bar`, `::top`
    #[regex(r"(::)?[a-z_][a-zA-Z0-9_]*(::[a-z_][a-zA-Z0-9_]*)*")]
    Name,

    /// Capitalized type reference: `File`, `Foo::Bar`
    #[regex(r"(::)?[A-Z][a-zA-Z0-9_]*(::[A-Z][a-zA-Z0-9_]*)*")]
    TypeName,

    /// Integer or float literal, including hex.
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    /// Single- or double-quoted string; may span lines.
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    /// Regular expression literal: `/.../`.
    ///
    /// Never produced by the `logos` automaton itself; the [`Lexer`] rewrites
    /// a `/` into a regex when the previous token cannot end an operand.
    ///
    /// [`Lexer`]: crate::lexer::Lexer
    Regex,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Unrecognized character
    #[default]
    Error,

    /// End of file marker (not produced by lexer, added by parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment | Self::BlockComment)
    }

    /// Returns `true` if this token is a keyword.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwAnd
                | Self::KwCase
                | Self::KwClass
                | Self::KwDefault
                | Self::KwDefine
                | Self::KwElse
                | Self::KwElsif
                | Self::KwFalse
                | Self::KwFunction
                | Self::KwIf
                | Self::KwIn
                | Self::KwInherits
                | Self::KwNode
                | Self::KwOr
                | Self::KwPlan
                | Self::KwTrue
                | Self::KwType
                | Self::KwUndef
                | Self::KwUnless
        )
    }

    /// Returns `true` if this token closes a bracketed construct.
    pub fn is_closing_delimiter(self) -> bool {
        matches!(self, Self::RBrace | Self::RParen | Self::RBracket)
    }

    /// Returns `true` if an operand can end with this token.
    ///
    /// The lexer uses this to tell a division `/` from the start of a regex.
    pub fn can_end_operand(self) -> bool {
        matches!(
            self,
            Self::RParen
                | Self::RBracket
                | Self::Variable
                | Self::Number
                | Self::String
                | Self::Name
                | Self::TypeName
                | Self::Regex
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwUndef
        )
    }

    /// Returns `true` if this token can start an expression.
    pub fn can_start_expr(self) -> bool {
        matches!(
            self,
            Self::Variable
                | Self::Name
                | Self::TypeName
                | Self::Number
                | Self::String
                | Self::Regex
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwUndef
                | Self::KwDefault
                | Self::KwIf
                | Self::KwUnless
                | Self::KwCase
                | Self::LBracket
                | Self::LBrace
                | Self::LParen
                | Self::Bang
                | Self::Minus
                | Self::Star
                | Self::At
                | Self::AtAt
        )
    }

    /// Returns the binding power of an infix operator.
    ///
    /// Relationship arrows bind loosest, then assignment (right associative),
    /// then the boolean, comparison and arithmetic operators.
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::InEdge | Self::InEdgeSub | Self::OutEdge | Self::OutEdgeSub => (1, 2),
            Self::Eq => (4, 3),
            Self::KwOr => (5, 6),
            Self::KwAnd => (7, 8),
            Self::EqEq
            | Self::NotEq
            | Self::Match
            | Self::NotMatch
            | Self::Lt
            | Self::Gt
            | Self::LtEq
            | Self::GtEq => (9, 10),
            Self::KwIn => (11, 12),
            Self::Shl | Self::Shr => (13, 14),
            Self::Plus | Self::Minus => (15, 16),
            Self::Star | Self::Slash | Self::Percent => (17, 18),
            _ => return None,
        })
    }

    /// Returns the binding power of a prefix operator.
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::Bang | Self::Minus | Self::Star => 19,
            _ => return None,
        })
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(tok, span)| (tok.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input)
            .into_iter()
            .map(|(kind, _)| kind)
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn test_keywords_win_over_names() {
        assert_eq!(
            kinds("class classes define defined"),
            vec![
                TokenKind::KwClass,
                TokenKind::Name,
                TokenKind::KwDefine,
                TokenKind::Name
            ]
        );
    }

    #[test]
    fn test_qualified_names() {
        let tokens = lex("foo::bar ::top Foo::Bar $::fqdn $mod::var");
        let significant: Vec<_> = tokens.iter().filter(|(k, _)| !k.is_trivia()).collect();
        assert_eq!(significant[0], &(TokenKind::Name, "foo::bar"));
        assert_eq!(significant[1], &(TokenKind::Name, "::top"));
        assert_eq!(significant[2], &(TokenKind::TypeName, "Foo::Bar"));
        assert_eq!(significant[3], &(TokenKind::Variable, "$::fqdn"));
        assert_eq!(significant[4], &(TokenKind::Variable, "$mod::var"));
    }

    #[test]
    fn test_arrows_and_collectors() {
        assert_eq!(
            kinds("=> +> -> ~> <- <~ <| |> <<| |>> << >>"),
            vec![
                TokenKind::FatArrow,
                TokenKind::PlusArrow,
                TokenKind::InEdge,
                TokenKind::InEdgeSub,
                TokenKind::OutEdge,
                TokenKind::OutEdgeSub,
                TokenKind::LCollect,
                TokenKind::RCollect,
                TokenKind::LLCollect,
                TokenKind::RRCollect,
                TokenKind::Shl,
                TokenKind::Shr,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = lex("# hello\n/* block\n comment */");
        assert_eq!(tokens[0], (TokenKind::Comment, "# hello"));
        assert_eq!(tokens[2], (TokenKind::BlockComment, "/* block\n comment */"));
    }

    #[test]
    fn test_multiline_string() {
        let tokens = lex("'first\n  second' \"a\\\"b\"");
        assert_eq!(tokens[0], (TokenKind::String, "'first\n  second'"));
        assert_eq!(tokens[2], (TokenKind::String, "\"a\\\"b\""));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("0x1F 42 3.14 1e10"),
            vec![TokenKind::Number; 4]
        );
    }
}
