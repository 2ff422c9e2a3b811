//! Indentation engine.
//!
//! For each line the engine finds the largest syntax element starting at
//! the line's first token, asks the [`RuleSet`] which rule applies, and
//! resolves the rule's anchor to a column:
//!
//! ```text
//! column = indentation of the anchor line + offset * indent_width
//! ```
//!
//! Anchors always start on an earlier line, so a region is indented top to
//! bottom and every line sees the columns already chosen for the lines
//! above it. Lines that continue a multi-line string or block comment keep
//! their current indentation.
//!
//! Every function here is total: malformed input, `ERROR` nodes and lines
//! past the end of the document all produce a column.

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use puppet_syntax::syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use text_size::TextSize;
use tracing::{debug, trace};

use crate::config::IndentConfig;
use crate::line_index::split_line_ending;
use crate::rules::{owning_construct, Anchor, IndentRule, LineContext, RuleSet};
use crate::snapshot::Snapshot;

/// Rule name reported for string and comment continuation lines.
pub const PRESERVE: &str = "preserve";

/// The resolved indentation of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentDecision {
    /// Name of the rule that decided the line.
    pub rule: &'static str,
    /// Line the anchor resolved to; `None` for column 0 anchors.
    pub anchor_line: Option<u32>,
    /// Column of the anchor.
    pub anchor_column: u32,
    /// Indentation steps added to the anchor column.
    pub offset: u32,
    /// Final column.
    pub column: u32,
}

/// Returns the column `line` should be indented to.
#[must_use]
pub fn indent_line(snapshot: &Snapshot, line: u32, config: &IndentConfig) -> u32 {
    decide(snapshot, line, config).column
}

/// Returns the full decision for `line` using the Puppet rules.
#[must_use]
pub fn decide(snapshot: &Snapshot, line: u32, config: &IndentConfig) -> IndentDecision {
    decide_with(snapshot, line, config, RuleSet::puppet())
}

/// Returns the decision for `line` using a custom rule set.
#[must_use]
pub fn decide_with(
    snapshot: &Snapshot,
    line: u32,
    config: &IndentConfig,
    rules: &RuleSet,
) -> IndentDecision {
    Resolver::new(snapshot, config, rules).decide(line)
}

/// Indents lines `start..=end`, returning the column of each line.
#[must_use]
pub fn indent_region(
    snapshot: &Snapshot,
    start: u32,
    end: u32,
    config: &IndentConfig,
) -> BTreeMap<u32, u32> {
    let mut columns = BTreeMap::new();
    let _ = indent_region_with(snapshot, start, end, config, |line, column| {
        columns.insert(line, column);
        ControlFlow::Continue(())
    });
    columns
}

/// Indents lines `start..=end`, reporting each line's column to `on_line`
/// as soon as it is decided.
///
/// Returning [`ControlFlow::Break`] stops the pass; columns already
/// reported stay valid.
pub fn indent_region_with<F>(
    snapshot: &Snapshot,
    start: u32,
    end: u32,
    config: &IndentConfig,
    mut on_line: F,
) -> ControlFlow<()>
where
    F: FnMut(u32, u32) -> ControlFlow<()>,
{
    let mut resolver = Resolver::new(snapshot, config, RuleSet::puppet());
    resolver.region(start, end, |line, decision| on_line(line, decision.column))
}

/// Reindents every line of `text`.
#[must_use]
pub fn reindent(text: &str, config: &IndentConfig) -> String {
    reindent_range(text, 0, u32::MAX, config)
}

/// Reindents lines `start..=end` of `text`.
///
/// Whitespace-only lines become empty, string and block comment
/// continuation lines are left untouched, and line endings (including
/// `\r\n`) are preserved.
#[must_use]
pub fn reindent_range(text: &str, start: u32, end: u32, config: &IndentConfig) -> String {
    let snapshot = Snapshot::new(text);
    let mut decisions = BTreeMap::new();
    let mut resolver = Resolver::new(&snapshot, config, RuleSet::puppet());
    let _ = resolver.region(start, end, |line, decision| {
        decisions.insert(line, *decision);
        ControlFlow::Continue(())
    });

    let index = snapshot.line_index();
    let mut out = String::with_capacity(text.len());
    for line in 0..index.line_count() {
        let Some(range) = index.line_range(line) else {
            break;
        };
        let full = &text[range];
        match decisions.get(&line) {
            Some(decision) if decision.rule != PRESERVE => {
                let (content, ending) = split_line_ending(full);
                let body = content.trim_start_matches([' ', '\t']);
                if !body.is_empty() {
                    out.push_str(&config.indent_string(decision.column));
                    out.push_str(body);
                }
                out.push_str(ending);
            }
            _ => out.push_str(full),
        }
    }
    out
}

/// Where a line sits in the tree.
enum LineSite {
    /// Inside a multi-line token; keep the current indentation.
    Preserve,
    /// Structural position for the rule matcher.
    Context(LineContext),
}

struct Resolver<'a> {
    snapshot: &'a Snapshot,
    config: &'a IndentConfig,
    rules: &'a RuleSet,
    root: SyntaxNode,
    /// Columns already chosen during a region pass.
    decided: BTreeMap<u32, u32>,
}

impl<'a> Resolver<'a> {
    fn new(snapshot: &'a Snapshot, config: &'a IndentConfig, rules: &'a RuleSet) -> Self {
        Self {
            snapshot,
            config,
            rules,
            root: snapshot.root(),
            decided: BTreeMap::new(),
        }
    }

    fn region<F>(&mut self, start: u32, end: u32, mut on_line: F) -> ControlFlow<()>
    where
        F: FnMut(u32, &IndentDecision) -> ControlFlow<()>,
    {
        let last = self.snapshot.line_count().saturating_sub(1);
        let end = end.min(last);
        debug!(start, end, "indenting region");
        if start > end {
            return ControlFlow::Continue(());
        }
        for line in start..=end {
            let decision = self.decide(line);
            self.decided.insert(line, decision.column);
            on_line(line, &decision)?;
        }
        ControlFlow::Continue(())
    }

    fn decide(&self, line: u32) -> IndentDecision {
        let decision = match self.locate(line) {
            LineSite::Preserve => {
                let column = self.indent_of(line);
                IndentDecision {
                    rule: PRESERVE,
                    anchor_line: Some(line),
                    anchor_column: column,
                    offset: 0,
                    column,
                }
            }
            LineSite::Context(ctx) => {
                let rule = self.rules.match_rule(&ctx);
                self.resolve(rule, &ctx)
            }
        };
        trace!(
            line,
            rule = decision.rule,
            column = decision.column,
            "indent decision"
        );
        decision
    }

    fn locate(&self, line: u32) -> LineSite {
        if let Some(offset) = self.snapshot.first_non_whitespace(line) {
            return self.locate_token(offset);
        }
        self.locate_blank(line)
    }

    fn locate_token(&self, offset: TextSize) -> LineSite {
        let Some(SyntaxElement::Token(token)) = self.snapshot.node_at(offset) else {
            return LineSite::Context(LineContext::default());
        };
        if token.text_range().start() < offset {
            return LineSite::Preserve;
        }
        let element = largest_element_starting_at(&token);
        LineSite::Context(LineContext {
            parent: self.snapshot.parent_of(&element),
            element: Some(element),
            first_token: Some(token),
        })
    }

    /// A blank line is placed just before its leading whitespace, on the
    /// newline that ends the previous line.
    fn locate_blank(&self, line: u32) -> LineSite {
        let previous_newline = self
            .snapshot
            .line_index()
            .line_start(line)
            .filter(|start| *start > TextSize::from(0))
            .map(|start| start - TextSize::from(1));
        let Some(offset) = previous_newline else {
            return LineSite::Context(LineContext::default());
        };
        let Some(SyntaxElement::Token(token)) = self.snapshot.node_at(offset) else {
            return LineSite::Context(LineContext::default());
        };
        if token.kind() != SyntaxKind::Whitespace {
            return LineSite::Preserve;
        }
        let element = SyntaxElement::Token(token);
        match self.snapshot.parent_of(&element) {
            Some(parent) if parent != self.root => LineSite::Context(LineContext {
                element: Some(element),
                parent: Some(parent),
                first_token: None,
            }),
            _ => LineSite::Context(LineContext::default()),
        }
    }

    fn resolve(&self, rule: &IndentRule, ctx: &LineContext) -> IndentDecision {
        let target = match rule.anchor {
            Anchor::Column0 => None,
            Anchor::ParentBol | Anchor::Parent => ctx.parent.clone(),
            Anchor::ConstructBol => ctx.parent.as_ref().map(owning_construct),
        }
        .filter(|node| *node != self.root);

        let (anchor_line, anchor_column) = match target {
            None => (None, 0),
            Some(node) => {
                let start = node.text_range().start();
                let line = self.snapshot.line_of(start);
                let column = if rule.anchor == Anchor::Parent {
                    self.column_of(line, start)
                } else {
                    self.indent_of(line)
                };
                (Some(line), column)
            }
        };

        IndentDecision {
            rule: rule.name,
            anchor_line,
            anchor_column,
            offset: rule.offset,
            column: anchor_column
                .saturating_add(rule.offset.saturating_mul(self.config.indent_width)),
        }
    }

    /// Indentation of `line`, as already decided in this pass or as it
    /// stands in the text.
    fn indent_of(&self, line: u32) -> u32 {
        self.decided
            .get(&line)
            .copied()
            .unwrap_or_else(|| self.snapshot.current_indent(line, self.config))
    }

    /// Display column of `offset` on `line`, counting the line's
    /// indentation as already decided.
    fn column_of(&self, line: u32, offset: TextSize) -> u32 {
        let (Some(text), Some(line_start)) = (
            self.snapshot.line_text(line),
            self.snapshot.line_index().line_start(line),
        ) else {
            return 0;
        };
        let body = text.trim_start_matches([' ', '\t']);
        let body_start = line_start + TextSize::of(&text[..text.len() - body.len()]);
        let into_body = usize::from(offset.checked_sub(body_start).unwrap_or_default());
        let width = body
            .get(..into_body)
            .map_or(0, |prefix| u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX));
        self.indent_of(line).saturating_add(width)
    }
}

/// Climbs from `token` to the largest node that starts at the same offset,
/// stopping below the root.
fn largest_element_starting_at(token: &SyntaxToken) -> SyntaxElement {
    let start = token.text_range().start();
    let mut element = SyntaxElement::Token(token.clone());
    let mut node = token.parent();
    while let Some(current) = node {
        if current.parent().is_none() || current.text_range().start() != start {
            break;
        }
        node = current.parent();
        element = SyntaxElement::Node(current);
    }
    element
}
