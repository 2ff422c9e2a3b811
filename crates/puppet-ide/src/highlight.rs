//! Syntax highlighting.
//!
//! Maps tokens to display categories. Tokens inside an `ERROR` node are
//! reported as [`Category::Error`] no matter what they are, so one span
//! covers the whole erroneous region.

use puppet_syntax::syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use text_size::TextRange;

use crate::snapshot::Snapshot;

/// Display category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `#` and `/* */` comments.
    Comment,
    /// String and regex literals.
    String,
    /// Language keywords.
    Keyword,
    /// Numbers, booleans, `undef` and `default`.
    Constant,
    /// `$variables`.
    VariableReference,
    /// Capitalized type and resource references.
    TypeReference,
    /// Operators and arrows.
    Operator,
    /// Unparseable input.
    Error,
    /// Function, method and plan names.
    FunctionName,
    /// Resource types and class or defined type names.
    ResourceName,
}

/// A highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// Byte range in the document.
    pub range: TextRange,
    /// How to display it.
    pub category: Category,
}

/// Returns ordered, non-overlapping spans for the whole document.
#[must_use]
pub fn highlight(snapshot: &Snapshot) -> Vec<StyleSpan> {
    let mut spans = Vec::new();
    collect(&snapshot.root(), &mut spans);
    spans
}

/// Ranges of all `ERROR` nodes, outermost first.
#[must_use]
pub fn error_ranges(snapshot: &Snapshot) -> Vec<TextRange> {
    snapshot
        .root()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::ErrorNode)
        .map(|node| node.text_range())
        .collect()
}

fn collect(node: &SyntaxNode, spans: &mut Vec<StyleSpan>) {
    for child in node.children_with_tokens() {
        match child {
            SyntaxElement::Node(child) if child.kind() == SyntaxKind::ErrorNode => {
                if !child.text_range().is_empty() {
                    spans.push(StyleSpan {
                        range: child.text_range(),
                        category: Category::Error,
                    });
                }
            }
            SyntaxElement::Node(child) => collect(&child, spans),
            SyntaxElement::Token(token) => {
                if let Some(category) = classify(&token) {
                    spans.push(StyleSpan {
                        range: token.text_range(),
                        category,
                    });
                }
            }
        }
    }
}

fn classify(token: &SyntaxToken) -> Option<Category> {
    let kind = token.kind();
    let category = match kind {
        SyntaxKind::Comment | SyntaxKind::BlockComment => Category::Comment,
        SyntaxKind::String | SyntaxKind::Regex => Category::String,
        SyntaxKind::Number
        | SyntaxKind::KwTrue
        | SyntaxKind::KwFalse
        | SyntaxKind::KwUndef
        | SyntaxKind::KwDefault => Category::Constant,
        SyntaxKind::Variable => Category::VariableReference,
        SyntaxKind::TypeName => Category::TypeReference,
        SyntaxKind::Error => Category::Error,
        SyntaxKind::Name => return classify_name(token),
        SyntaxKind::KwClass if parent_kind(token) == Some(SyntaxKind::ResourceDeclaration) => {
            Category::ResourceName
        }
        _ if kind.is_keyword() => Category::Keyword,
        SyntaxKind::FatArrow
        | SyntaxKind::PlusArrow
        | SyntaxKind::Eq
        | SyntaxKind::EqEq
        | SyntaxKind::NotEq
        | SyntaxKind::Match
        | SyntaxKind::NotMatch
        | SyntaxKind::Lt
        | SyntaxKind::Gt
        | SyntaxKind::LtEq
        | SyntaxKind::GtEq
        | SyntaxKind::Shl
        | SyntaxKind::Shr
        | SyntaxKind::Plus
        | SyntaxKind::Minus
        | SyntaxKind::Star
        | SyntaxKind::Slash
        | SyntaxKind::Percent
        | SyntaxKind::Bang
        | SyntaxKind::Question
        | SyntaxKind::At
        | SyntaxKind::AtAt
        | SyntaxKind::InEdge
        | SyntaxKind::InEdgeSub
        | SyntaxKind::OutEdge
        | SyntaxKind::OutEdgeSub
        | SyntaxKind::LCollect
        | SyntaxKind::RCollect
        | SyntaxKind::LLCollect
        | SyntaxKind::RRCollect => Category::Operator,
        _ => return None,
    };
    Some(category)
}

/// Bare words are highlighted by the construct that names them.
fn classify_name(token: &SyntaxToken) -> Option<Category> {
    match parent_kind(token)? {
        SyntaxKind::CallFunction | SyntaxKind::CallMethod => Some(Category::FunctionName),
        SyntaxKind::FunctionDeclaration | SyntaxKind::PlanDefinition => {
            Some(Category::FunctionName)
        }
        SyntaxKind::ResourceDeclaration
        | SyntaxKind::ClassDefinition
        | SyntaxKind::DefinedResourceType => Some(Category::ResourceName),
        _ => None,
    }
}

fn parent_kind(token: &SyntaxToken) -> Option<SyntaxKind> {
    token.parent().map(|parent| parent.kind())
}
