//! Single source of truth for the token half of `SyntaxKind`.
//!
//! The order must match the declaration order of [`TokenKind`] so that the
//! numeric value of a token kind is also its `SyntaxKind` value.
//!
//! [`TokenKind`]: crate::lexer::TokenKind

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            Comment,
            BlockComment,
            LBrace,
            RBrace,
            LParen,
            RParen,
            LBracket,
            RBracket,
            Pipe,
            Comma,
            Semicolon,
            Colon,
            Dot,
            Question,
            At,
            AtAt,
            FatArrow,
            PlusArrow,
            Eq,
            EqEq,
            NotEq,
            Match,
            NotMatch,
            Lt,
            Gt,
            LtEq,
            GtEq,
            Shl,
            Shr,
            Plus,
            Minus,
            Star,
            Slash,
            Percent,
            Bang,
            InEdge,
            InEdgeSub,
            OutEdge,
            OutEdgeSub,
            LCollect,
            RCollect,
            LLCollect,
            RRCollect,
            KwAnd,
            KwCase,
            KwClass,
            KwDefault,
            KwDefine,
            KwElse,
            KwElsif,
            KwFalse,
            KwFunction,
            KwIf,
            KwIn,
            KwInherits,
            KwNode,
            KwOr,
            KwPlan,
            KwTrue,
            KwType,
            KwUndef,
            KwUnless,
            Variable,
            Name,
            TypeName,
            Number,
            String,
            Regex,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
