//! Shared helpers for parser snapshot tests.
#![allow(dead_code, unused_imports)]

pub use puppet_syntax::parser::parse;
pub use puppet_syntax::syntax::{SyntaxKind, SyntaxNode};

/// Formats a parse result with ranges, tokens and errors.
pub fn snapshot_parse(source: &str) -> String {
    let parsed = parse(source);
    let syntax = parsed.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parsed.ok() {
        output.push_str("\n---\nErrors:\n");
        for err in parsed.errors() {
            output.push_str(&format!("  - {}\n", err));
        }
    }

    output
}

/// Formats only the node structure: one node kind per line, nested by
/// indentation.
pub fn outline(source: &str) -> String {
    let parsed = parse(source);
    let mut output = String::new();
    format_outline(&parsed.syntax(), &mut output, 0);
    output
}

/// Asserts that no node starts or ends with trivia.
pub fn assert_nodes_trimmed(source: &str) {
    let parsed = parse(source);
    for node in parsed.syntax().descendants().skip(1) {
        if let Some(first) = node.first_token() {
            assert!(
                !first.kind().is_trivia(),
                "{:?} starts with trivia in {source:?}",
                node.kind()
            );
        }
        if let Some(last) = node.last_token() {
            assert!(
                !last.kind().is_trivia(),
                "{:?} ends with trivia in {source:?}",
                node.kind()
            );
        }
    }
}

fn format_outline(node: &SyntaxNode, out: &mut String, depth: usize) {
    out.push_str(&format!("{}{:?}\n", "  ".repeat(depth), node.kind()));
    for child in node.children() {
        format_outline(&child, out, depth + 1);
    }
}

fn format_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                let kind = t.kind();
                if !kind.is_trivia() {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}
