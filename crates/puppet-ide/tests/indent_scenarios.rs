//! End-to-end indentation scenarios.

mod common;
use common::*;

#[test]
fn class_body_and_closer() {
    assert_eq!(columns("class foo {\n$bar = 'hello'\n}"), vec![0, 2, 0]);
}

#[test]
fn nested_hashes_accumulate() {
    let source = "class foo {\n$x = {\n'a' => {\n'b' => 1,\n},\n}\n}\n";
    assert_eq!(columns(source), vec![0, 2, 4, 6, 4, 2, 0, 0]);
}

#[test]
fn detached_parameter_list_aligns_with_define() {
    let source = "define foo::bar\n(\n$foo = $title,\n) {\n}\n";
    insta::assert_snapshot!(rule_trace(source), @r"
    0: top-level -> 0
    1: detached-opener -> 0
    2: container-child -> 2
    3: closing-delimiter -> 0
    4: closing-delimiter -> 0
    5: no-node -> 0
    ");
}

#[test]
fn closing_brace_never_gets_indent_width() {
    let snapshot = Snapshot::new("  class foo {\n    $a = 1\n      }\n");
    let decision = decide(&snapshot, 2, &IndentConfig::default());
    assert_eq!(decision.rule, "closing-delimiter");
    assert_eq!(decision.anchor_line, Some(0));
    assert_eq!(decision.offset, 0);
    assert_eq!(decision.column, decision.anchor_column);
}

#[test]
fn region_pass_is_repeatable() {
    let snapshot = Snapshot::new("class foo {\nif $a {\n$b = [\n1,\n]\n}\n}\n");
    let config = IndentConfig::default();
    let first = indent_region(&snapshot, 0, u32::MAX, &config);
    let second = indent_region(&snapshot, 0, u32::MAX, &config);
    assert_eq!(first, second);
}

#[test]
fn top_level_declarations_start_at_column_zero() {
    assert_reindents_to(
        "  class a {}\n    define b {}\n function c() {}\n\tnode default {}\n   plan d() {}\n",
        "class a {}\ndefine b {}\nfunction c() {}\nnode default {}\nplan d() {}\n",
    );
}

#[test]
fn else_and_elsif_align_with_if() {
    assert_reindents_to(
        "class foo {\nif $a {\n$x = 1\n} elsif $b {\n$x = 2\n}\nelse {\n$x = 3\n}\n}\n",
        "class foo {\n  if $a {\n    $x = 1\n  } elsif $b {\n    $x = 2\n  }\n  else {\n    $x = 3\n  }\n}\n",
    );
}

#[test]
fn case_options_are_indented() {
    assert_reindents_to(
        "case $os {\n'debian': {\n$pkg = 'apt'\n}\ndefault: {}\n}\n",
        "case $os {\n  'debian': {\n    $pkg = 'apt'\n  }\n  default: {}\n}\n",
    );
}

#[test]
fn selector_cases_are_indented() {
    assert_reindents_to(
        "$pkg = $facts ? {\n'debian' => 'apt',\ndefault => 'yum',\n}\n",
        "$pkg = $facts ? {\n  'debian' => 'apt',\n  default => 'yum',\n}\n",
    );
}

#[test]
fn lambda_bodies_are_indented() {
    assert_reindents_to(
        "$list.each |$item| {\nnotice($item)\n}\n",
        "$list.each |$item| {\n  notice($item)\n}\n",
    );
}

#[test]
fn resource_attributes_and_nested_arrays() {
    assert_reindents_to(
        "file { '/tmp/x':\nensure => present,\nrequire => [\nPackage['a'],\n],\n}\n",
        "file { '/tmp/x':\n  ensure => present,\n  require => [\n    Package['a'],\n  ],\n}\n",
    );
}

#[test]
fn comments_inside_bodies_are_children() {
    assert_reindents_to(
        "# top\nclass foo {\n# note\n$a = 1\n}\n",
        "# top\nclass foo {\n  # note\n  $a = 1\n}\n",
    );
}

#[test]
fn string_continuation_is_left_alone() {
    assert_reindents_to(
        "class foo {\n$x = \"a\n   b\"\n}\n",
        "class foo {\n  $x = \"a\n   b\"\n}\n",
    );
}

#[test]
fn block_comment_continuation_is_left_alone() {
    assert_reindents_to(
        "class foo {\n/* first\n * second\n */\n$a = 1\n}\n",
        "class foo {\n  /* first\n * second\n */\n  $a = 1\n}\n",
    );
}

#[test]
fn wider_indent_width() {
    let config = IndentConfig {
        indent_width: 4,
        ..IndentConfig::default()
    };
    assert_eq!(
        columns_with("class foo {\n$x = [\n1,\n]\n}\n", &config),
        vec![0, 4, 8, 4, 0, 0]
    );
}

#[test]
fn broken_input_still_gets_columns() {
    let source = "class foo {\n$x = \n}\n}\nfile {\n";
    let snapshot = Snapshot::new(source);
    assert!(!snapshot.parse().ok());
    let region = indent_region(&snapshot, 0, u32::MAX, &IndentConfig::default());
    assert_eq!(region.len() as u32, snapshot.line_count());
    assert_eq!(reindented(source).lines().count(), source.lines().count());
}

#[test]
fn closer_after_long_prefix_aligns_with_call_line() {
    assert_reindents_to(
        "class foo {\n$x = foo($a, $b, bar(\n1,\n))\n}\n",
        "class foo {\n  $x = foo($a, $b, bar(\n    1,\n  ))\n}\n",
    );
    let snapshot = Snapshot::new("class foo {\n  $x = foo($a, $b, bar(\n    1,\n      ))\n}\n");
    let decision = decide(&snapshot, 3, &IndentConfig::default());
    assert_eq!(decision.rule, "closing-delimiter");
    assert_eq!(decision.anchor_line, Some(1));
    assert_eq!(decision.column, 2);
}

#[test]
fn blank_line_after_unclosed_body_stays_inside() {
    let snapshot = Snapshot::new("class foo {\n$a = 1\n\n");
    let config = IndentConfig::default();
    assert_eq!(indent_line(&snapshot, 2, &config), 2);
    assert_eq!(indent_line(&snapshot, 3, &config), 2);

    let closed = Snapshot::new("class foo {\n}\n\n");
    assert_eq!(decide(&closed, 2, &config).rule, "no-node");
    assert_eq!(indent_line(&closed, 2, &config), 0);
}
