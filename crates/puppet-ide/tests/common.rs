//! Shared helpers for indentation tests.
#![allow(dead_code, unused_imports)]

pub use puppet_ide::{
    decide, indent_line, indent_region, reindent, IndentConfig, IndentDecision, Snapshot,
};

/// Columns chosen for every line of `source` in one region pass.
pub fn columns(source: &str) -> Vec<u32> {
    columns_with(source, &IndentConfig::default())
}

/// Like [`columns`] with an explicit configuration.
pub fn columns_with(source: &str, config: &IndentConfig) -> Vec<u32> {
    let snapshot = Snapshot::new(source);
    indent_region(&snapshot, 0, u32::MAX, config)
        .into_values()
        .collect()
}

/// Rule names chosen for every line of `source`, one per line.
pub fn rule_trace(source: &str) -> String {
    let snapshot = Snapshot::new(source);
    let config = IndentConfig::default();
    let mut output = String::new();
    for line in 0..snapshot.line_count() {
        let decision = decide(&snapshot, line, &config);
        output.push_str(&format!("{line}: {} -> {}\n", decision.rule, decision.column));
    }
    output
}

/// Reindents `source` with the default configuration.
pub fn reindented(source: &str) -> String {
    reindent(source, &IndentConfig::default())
}

/// Asserts that reindenting `source` gives `expected` and that the result
/// is a fixed point.
pub fn assert_reindents_to(source: &str, expected: &str) {
    let once = reindented(source);
    assert_eq!(once, expected, "reindenting {source:?}");
    assert_eq!(reindented(&once), once, "second pass changed {once:?}");
}
