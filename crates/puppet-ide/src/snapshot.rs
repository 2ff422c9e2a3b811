//! Immutable document snapshots.
//!
//! A [`Snapshot`] pairs a document's text with its parse. It is the only
//! view of the syntax tree the indentation engine has: the engine asks it
//! for the element at an offset and walks parents and children through it.
//! A snapshot never changes; after an edit the caller builds a new one.

use puppet_syntax::parser::{parse, Parse};
use puppet_syntax::syntax::{SyntaxElement, SyntaxNode};
use text_size::TextSize;

use crate::config::IndentConfig;
use crate::line_index::{split_line_ending, LineIndex};

/// A parsed document.
///
/// Holds only the green tree, so a snapshot is `Send + Sync` and cheap to
/// hand to another thread; red nodes are created on demand by
/// [`Snapshot::root`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    text: String,
    line_index: LineIndex,
    parse: Parse,
}

impl Snapshot {
    /// Parses `text` into a new snapshot.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let parse = parse(&text);
        let line_index = LineIndex::new(&text);
        Self {
            text,
            line_index,
            parse,
        }
    }

    /// The document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line starts of the document.
    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// The parse result, including parse errors.
    #[must_use]
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Root of the syntax tree.
    #[must_use]
    pub fn root(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// Number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.line_index.line_count()
    }

    /// Zero-based line containing `offset`.
    #[must_use]
    pub fn line_of(&self, offset: TextSize) -> u32 {
        self.line_index.line_of(offset)
    }

    /// Text of `line` without its line ending.
    #[must_use]
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let range = self.line_index.line_range(line)?;
        Some(split_line_ending(&self.text[range]).0)
    }

    /// Indentation column `line` currently has.
    #[must_use]
    pub fn current_indent(&self, line: u32, config: &IndentConfig) -> u32 {
        self.line_text(line)
            .map_or(0, |text| config.measure_indent(text))
    }

    /// Offset of the first character of `line` that is not a space or tab,
    /// or `None` for a blank line.
    #[must_use]
    pub fn first_non_whitespace(&self, line: u32) -> Option<TextSize> {
        let start = self.line_index.line_start(line)?;
        let text = self.line_text(line)?;
        let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
        if indent == text.len() {
            return None;
        }
        Some(start + TextSize::from(indent as u32))
    }
}

// Tree-provider queries used by the engine and the rule matcher.
#[allow(clippy::unused_self)]
impl Snapshot {
    /// Token covering `offset`; at a boundary the token starting there.
    #[must_use]
    pub fn node_at(&self, offset: TextSize) -> Option<SyntaxElement> {
        if offset >= TextSize::of(self.text.as_str()) {
            return None;
        }
        self.root()
            .token_at_offset(offset)
            .right_biased()
            .map(SyntaxElement::Token)
    }

    /// Parent node of `element`; `None` for the root.
    #[must_use]
    pub fn parent_of(&self, element: &SyntaxElement) -> Option<SyntaxNode> {
        element.parent()
    }

    /// Children of `node` in source order, tokens included.
    #[must_use]
    pub fn children_of(&self, node: &SyntaxNode) -> Vec<SyntaxElement> {
        node.children_with_tokens().collect()
    }

    /// Stable type tag such as `"hash"` or `"ERROR"`.
    #[must_use]
    pub fn type_of(&self, element: &SyntaxElement) -> &'static str {
        element.kind().type_name()
    }

    /// Source text covered by `element`.
    #[must_use]
    pub fn text_of(&self, element: &SyntaxElement) -> String {
        match element {
            SyntaxElement::Node(node) => node.text().to_string(),
            SyntaxElement::Token(token) => token.text().to_string(),
        }
    }
}
