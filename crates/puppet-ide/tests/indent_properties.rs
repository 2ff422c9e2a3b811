//! Property tests: the engine is total and reindenting is a fixed point.

mod common;
use common::*;

use proptest::prelude::*;

/// Puppet fragments that combine into plausible, often broken, manifests.
const FRAGMENTS: &[&str] = &[
    "class foo {",
    "define foo::bar (",
    "$x = 1,",
    ") {",
    "}",
    "{",
    "]",
    ")",
    "$x = [",
    "$h = {",
    "'a' => 1,",
    "if $x {",
    "} elsif $y {",
    "} else {",
    "else {",
    "case $os {",
    "default: {}",
    "$v = $facts ? {",
    "$list.each |$i| {",
    "notice($i)",
    "include foo",
    "file { '/tmp/x':",
    "ensure => present,",
    "File['x'] {",
    "User <| |>",
    "@@host { 'h': }",
    "# comment",
    "/* block",
    "*/",
    "\"multi",
    "line\"",
    "'",
    "=>",
    ",",
];

fn manifest() -> impl Strategy<Value = String> {
    let line = (
        prop::sample::select(&["", " ", "  ", "\t", "      "][..]),
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..3),
    )
        .prop_map(|(indent, parts)| format!("{indent}{}", parts.join(" ")));
    (
        prop::collection::vec(line, 0..24),
        prop::sample::select(&["\n", "\r\n"][..]),
    )
        .prop_map(|(lines, ending)| lines.join(ending))
}

proptest! {
    #[test]
    fn every_line_gets_a_column(source in manifest()) {
        let snapshot = Snapshot::new(source.as_str());
        let config = IndentConfig::default();
        let region = indent_region(&snapshot, 0, u32::MAX, &config);
        prop_assert_eq!(region.len() as u32, snapshot.line_count());
        for line in 0..snapshot.line_count() + 2 {
            let _ = indent_line(&snapshot, line, &config);
        }
    }

    #[test]
    fn reindent_is_a_fixed_point(source in manifest()) {
        let once = reindented(&source);
        let twice = reindented(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reindent_only_touches_indentation(source in manifest()) {
        let out = reindented(&source);
        let strip = |text: &str| -> String {
            text.split('\n')
                .map(|line| line.trim_start_matches([' ', '\t']))
                .collect::<Vec<_>>()
                .join("\n")
        };
        prop_assert_eq!(strip(&out), strip(&source));
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let _ = reindented(&source);
        let _ = puppet_ide::highlight(&Snapshot::new(source.as_str()));
    }
}
