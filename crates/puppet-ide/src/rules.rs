//! Declarative indentation rules.
//!
//! A [`RuleSet`] is an ordered list of [`IndentRule`]s. Each rule pairs a
//! [`Matcher`] over the line's [`LineContext`] with an [`Anchor`] and an
//! offset in indentation steps. Rules are tried in declaration order and
//! the first match wins; the last rule is always a catch-all, so matching
//! is total.

use once_cell::sync::Lazy;
use puppet_syntax::syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use thiserror::Error;

/// What the engine knows about the line being indented.
#[derive(Debug, Clone, Default)]
pub struct LineContext {
    /// The largest element starting at the line's first token. `None` when
    /// no node covers the line (empty document, past the end, or a blank
    /// line at top level).
    pub element: Option<SyntaxElement>,
    /// Parent of `element`.
    pub parent: Option<SyntaxNode>,
    /// First significant token on the line; `None` for blank lines.
    pub first_token: Option<SyntaxToken>,
}

impl LineContext {
    fn element_kind(&self) -> Option<SyntaxKind> {
        self.element.as_ref().map(SyntaxElement::kind)
    }

    fn parent_kind(&self) -> Option<SyntaxKind> {
        self.parent.as_ref().map(SyntaxNode::kind)
    }
}

/// Predicate over a [`LineContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The element is a direct child of the document root.
    TopLevel,
    /// No node covers the line.
    NoNode,
    /// The line begins with a bare `}`, `)` or `]` closing its parent.
    ClosingDelimiter,
    /// The element's kind is one of these.
    NodeIs(&'static [SyntaxKind]),
    /// The parent's kind is one of these.
    ParentIs(&'static [SyntaxKind]),
    /// Both the element's and the parent's kinds are in the given sets.
    NodeAndParent(&'static [SyntaxKind], &'static [SyntaxKind]),
    /// The element is the first child node of a parent of one of these kinds.
    FirstNamedChild(&'static [SyntaxKind]),
    /// The element is the last child node of a parent of one of these kinds.
    LastNamedChild(&'static [SyntaxKind]),
    /// The line's first token has exactly this text.
    TokenText(&'static str),
    /// Always matches.
    CatchAll,
}

impl Matcher {
    /// Returns `true` if this matcher accepts `ctx`.
    #[must_use]
    pub fn matches(&self, ctx: &LineContext) -> bool {
        match *self {
            Self::TopLevel => ctx
                .parent
                .as_ref()
                .is_some_and(|parent| parent.parent().is_none()),
            Self::NoNode => ctx.element.is_none(),
            Self::ClosingDelimiter => match (&ctx.first_token, &ctx.element) {
                (Some(token), Some(SyntaxElement::Token(element))) => {
                    token.kind().is_closing_delimiter() && token == element
                }
                _ => false,
            },
            Self::NodeIs(kinds) => ctx.element_kind().is_some_and(|kind| kinds.contains(&kind)),
            Self::ParentIs(kinds) => ctx.parent_kind().is_some_and(|kind| kinds.contains(&kind)),
            Self::NodeAndParent(nodes, parents) => {
                Self::NodeIs(nodes).matches(ctx) && Self::ParentIs(parents).matches(ctx)
            }
            Self::FirstNamedChild(parents) => {
                Self::ParentIs(parents).matches(ctx)
                    && named_child(ctx, |parent| parent.first_child())
            }
            Self::LastNamedChild(parents) => {
                Self::ParentIs(parents).matches(ctx)
                    && named_child(ctx, |parent| parent.last_child())
            }
            Self::TokenText(text) => ctx
                .first_token
                .as_ref()
                .is_some_and(|token| token.text() == text),
            Self::CatchAll => true,
        }
    }
}

fn named_child(ctx: &LineContext, pick: impl Fn(&SyntaxNode) -> Option<SyntaxNode>) -> bool {
    match (&ctx.element, &ctx.parent) {
        (Some(SyntaxElement::Node(node)), Some(parent)) => pick(parent).as_ref() == Some(node),
        _ => false,
    }
}

/// Where a rule's offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Column 0.
    Column0,
    /// Indentation of the line on which the parent starts.
    ParentBol,
    /// Indentation of the line on which the construct owning the parent
    /// starts; see [`owning_construct`].
    ConstructBol,
    /// Column of the parent's first token.
    Parent,
}

/// One entry of a [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentRule {
    /// Name reported in decisions and logs.
    pub name: &'static str,
    /// When the rule applies.
    pub matcher: Matcher,
    /// What the offset is relative to.
    pub anchor: Anchor,
    /// Indentation steps added to the anchor column.
    pub offset: u32,
}

impl IndentRule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(name: &'static str, matcher: Matcher, anchor: Anchor, offset: u32) -> Self {
        Self {
            name,
            matcher,
            anchor,
            offset,
        }
    }
}

/// Errors from [`RuleSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// The rule list was empty.
    #[error("rule set is empty")]
    Empty,
    /// The last rule was not a catch-all.
    #[error("last rule `{0}` is not a catch-all")]
    MissingCatchAll(&'static str),
}

const CATCH_ALL: IndentRule = IndentRule::new("catch-all", Matcher::CatchAll, Anchor::ParentBol, 1);

/// Containers whose children sit one step inside the owning construct.
const CONTAINERS: &[SyntaxKind] = &[
    SyntaxKind::Block,
    SyntaxKind::Hash,
    SyntaxKind::Array,
    SyntaxKind::ParameterList,
    SyntaxKind::ArgumentList,
    SyntaxKind::LambdaParameters,
    SyntaxKind::ResourceDeclaration,
    SyntaxKind::ResourceBody,
    SyntaxKind::ResourceDefaults,
    SyntaxKind::ResourceOverride,
    SyntaxKind::Collector,
    SyntaxKind::CaseStatement,
    SyntaxKind::Selector,
    SyntaxKind::ParenExpression,
    SyntaxKind::AccessExpression,
];

/// Delimited nodes that can open on a line of their own.
const DETACHED_OPENERS: &[SyntaxKind] = &[
    SyntaxKind::Block,
    SyntaxKind::ParameterList,
    SyntaxKind::LambdaParameters,
];

/// Constructs whose `{` is a plain token rather than a block node.
const BRACED_CONSTRUCTS: &[SyntaxKind] = &[
    SyntaxKind::CaseStatement,
    SyntaxKind::Selector,
    SyntaxKind::ResourceDeclaration,
    SyntaxKind::ResourceDefaults,
    SyntaxKind::ResourceOverride,
    SyntaxKind::Collector,
];

const PUPPET_RULES: &[IndentRule] = &[
    IndentRule::new("top-level", Matcher::TopLevel, Anchor::Column0, 0),
    IndentRule::new("no-node", Matcher::NoNode, Anchor::ParentBol, 0),
    IndentRule::new(
        "closing-delimiter",
        Matcher::ClosingDelimiter,
        Anchor::ConstructBol,
        0,
    ),
    IndentRule::new(
        "else-clause",
        Matcher::NodeIs(&[SyntaxKind::ElsifClause, SyntaxKind::ElseClause]),
        Anchor::ParentBol,
        0,
    ),
    IndentRule::new(
        "detached-opener",
        Matcher::NodeIs(DETACHED_OPENERS),
        Anchor::ParentBol,
        0,
    ),
    IndentRule::new(
        "detached-brace",
        Matcher::NodeAndParent(&[SyntaxKind::LBrace], BRACED_CONSTRUCTS),
        Anchor::ParentBol,
        0,
    ),
    IndentRule::new(
        "container-child",
        Matcher::ParentIs(CONTAINERS),
        Anchor::ConstructBol,
        1,
    ),
    CATCH_ALL,
];

static PUPPET: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    rules: PUPPET_RULES.to_vec(),
});

/// An ordered, immutable list of rules ending in a catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<IndentRule>,
}

impl RuleSet {
    /// Builds a rule set, checking that the last rule is a catch-all.
    pub fn new(rules: Vec<IndentRule>) -> Result<Self, RuleSetError> {
        let last = rules.last().ok_or(RuleSetError::Empty)?;
        if last.matcher != Matcher::CatchAll {
            return Err(RuleSetError::MissingCatchAll(last.name));
        }
        Ok(Self { rules })
    }

    /// The rules for Puppet manifests, built on first use.
    #[must_use]
    pub fn puppet() -> &'static RuleSet {
        &PUPPET
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[IndentRule] {
        &self.rules
    }

    /// Returns the first rule whose matcher accepts `ctx`.
    #[must_use]
    pub fn match_rule(&self, ctx: &LineContext) -> &IndentRule {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(ctx))
            .unwrap_or(&CATCH_ALL)
    }
}

/// The construct a delimited node belongs to.
///
/// A block, parameter list, argument list or lambda parameter list belongs
/// to its parent (the class, call, lambda, ...). Every other node owns
/// itself. Anchoring on the owner keeps a closing delimiter aligned with
/// the construct's keyword line even when the opener sits on a line of
/// its own.
#[must_use]
pub fn owning_construct(node: &SyntaxNode) -> SyntaxNode {
    match node.kind() {
        SyntaxKind::Block
        | SyntaxKind::ParameterList
        | SyntaxKind::ArgumentList
        | SyntaxKind::LambdaParameters => node.parent().unwrap_or_else(|| node.clone()),
        _ => node.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puppet_syntax::parse;

    fn context_at(source: &str, needle: &str) -> LineContext {
        let root = parse(source).syntax();
        let offset = source.find(needle).expect("needle") as u32;
        let token = root
            .token_at_offset(offset.into())
            .right_biased()
            .expect("token");
        let mut element = SyntaxElement::Token(token.clone());
        let mut node = token.parent();
        while let Some(current) = node {
            if current.parent().is_none()
                || current.text_range().start() != token.text_range().start()
            {
                break;
            }
            element = SyntaxElement::Node(current.clone());
            node = current.parent();
        }
        LineContext {
            parent: element.parent(),
            element: Some(element),
            first_token: Some(token),
        }
    }

    #[test]
    fn puppet_rules_end_in_catch_all() {
        assert!(RuleSet::new(PUPPET_RULES.to_vec()).is_ok());
        assert_eq!(RuleSet::puppet().rules().len(), PUPPET_RULES.len());
    }

    #[test]
    fn rejects_rule_sets_without_catch_all() {
        assert_eq!(RuleSet::new(Vec::new()), Err(RuleSetError::Empty));
        let rules = vec![IndentRule::new(
            "top-level",
            Matcher::TopLevel,
            Anchor::Column0,
            0,
        )];
        assert_eq!(
            RuleSet::new(rules),
            Err(RuleSetError::MissingCatchAll("top-level"))
        );
    }

    #[test]
    fn first_match_wins() {
        let ctx = context_at("class foo {\n  $x = 1\n}\n", "$x");
        let rules = RuleSet::new(vec![
            IndentRule::new("first", Matcher::ParentIs(&[SyntaxKind::Block]), Anchor::Parent, 3),
            IndentRule::new("second", Matcher::ParentIs(&[SyntaxKind::Block]), Anchor::Parent, 5),
            CATCH_ALL,
        ])
        .expect("valid");
        assert_eq!(rules.match_rule(&ctx).name, "first");
    }

    #[test]
    fn puppet_rule_selection() {
        let source = "class foo {\n  $x = [\n    1,\n  ]\n}\n";
        let rules = RuleSet::puppet();
        assert_eq!(rules.match_rule(&context_at(source, "class")).name, "top-level");
        assert_eq!(rules.match_rule(&context_at(source, "$x")).name, "container-child");
        assert_eq!(rules.match_rule(&context_at(source, "1,")).name, "container-child");
        assert_eq!(rules.match_rule(&context_at(source, "]")).name, "closing-delimiter");
        assert_eq!(rules.match_rule(&LineContext::default()).name, "no-node");
    }

    #[test]
    fn else_and_detached_openers() {
        let source = "if $a {\n}\nelse {\n}\ndefine foo\n(\n) {}\n";
        let rules = RuleSet::puppet();
        assert_eq!(rules.match_rule(&context_at(source, "else")).name, "else-clause");
        assert_eq!(rules.match_rule(&context_at(source, "(\n")).name, "detached-opener");
    }

    #[test]
    fn named_child_matchers() {
        let source = "$x = foo(\n  1,\n  2,\n)\n";
        let first = context_at(source, "1,");
        let last = context_at(source, "2,");
        let parents = &[SyntaxKind::ArgumentList];
        assert!(Matcher::FirstNamedChild(parents).matches(&first));
        assert!(!Matcher::FirstNamedChild(parents).matches(&last));
        assert!(Matcher::LastNamedChild(parents).matches(&last));
        assert!(!Matcher::LastNamedChild(parents).matches(&first));
    }

    #[test]
    fn token_text_matcher() {
        let ctx = context_at("$x = [\n]\n", "]");
        assert!(Matcher::TokenText("]").matches(&ctx));
        assert!(!Matcher::TokenText("}").matches(&ctx));
        assert!(Matcher::ClosingDelimiter.matches(&ctx));
    }

    #[test]
    fn owning_construct_of_blocks_is_their_parent() {
        let root = parse("class foo {\n}\n$h = {}\n").syntax();
        let block = root
            .descendants()
            .find(|node| node.kind() == SyntaxKind::Block)
            .expect("block");
        assert_eq!(owning_construct(&block).kind(), SyntaxKind::ClassDefinition);
        let hash = root
            .descendants()
            .find(|node| node.kind() == SyntaxKind::Hash)
            .expect("hash");
        assert_eq!(owning_construct(&hash).kind(), SyntaxKind::Hash);
    }
}
