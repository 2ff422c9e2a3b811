mod common;
use common::*;

#[test]
fn test_if_elsif_else() {
    insta::assert_snapshot!(
        outline("if $x {\n  notice('a')\n} elsif $y {\n  notice('b')\n} else {\n  notice('c')\n}\n"),
        @r"
    SourceFile
      IfExpression
        VariableRef
        Block
          CallFunction
            ArgumentList
              Literal
        ElsifClause
          VariableRef
          Block
            CallFunction
              ArgumentList
                Literal
        ElseClause
          Block
            CallFunction
              ArgumentList
                Literal
    "
    );
}

#[test]
fn test_unless_else() {
    let parsed = parse("unless $facts['virtual'] == 'docker' {\n  include ntp\n} else {\n}\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let unless = parsed.syntax().first_child().expect("unless");
    assert_eq!(unless.kind(), SyntaxKind::UnlessExpression);
    assert!(unless.children().any(|n| n.kind() == SyntaxKind::ElseClause));
}

#[test]
fn test_condition_does_not_open_resource() {
    let parsed = parse("if $x == foo {\n  $y = 1\n}\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let kinds: Vec<_> = parsed
        .syntax()
        .first_child()
        .expect("if")
        .children()
        .map(|n| n.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::BinaryExpression, SyntaxKind::Block]
    );
}

#[test]
fn test_resource_inside_lambda_in_condition() {
    let parsed = parse("if $xs.any |$x| { file { $x: } } {\n}\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    assert!(parsed
        .syntax()
        .descendants()
        .any(|n| n.kind() == SyntaxKind::ResourceDeclaration));
}

#[test]
fn test_case_statement() {
    insta::assert_snapshot!(
        outline("case $os {\n  'redhat', 'centos': {\n    $pkg = 'ntp'\n  }\n  default: {}\n}\n"),
        @r"
    SourceFile
      CaseStatement
        VariableRef
        CaseOption
          Literal
          Literal
          Block
            Assignment
              VariableRef
              Literal
        CaseOption
          Literal
          Block
    "
    );
}

#[test]
fn test_selector() {
    insta::assert_snapshot!(outline("$v = $os ? {\n  'a' => 1,\n  default => 2,\n}\n"), @r"
    SourceFile
      Assignment
        VariableRef
        Selector
          VariableRef
          SelectorCase
            Literal
            Literal
          SelectorCase
            Literal
            Literal
    ");
}

#[test]
fn test_method_call_with_lambda() {
    insta::assert_snapshot!(outline("$list.each |$item| {\n  notice($item)\n}\n"), @r"
    SourceFile
      CallMethod
        VariableRef
        Lambda
          LambdaParameters
            Parameter
          Block
            CallFunction
              ArgumentList
                VariableRef
    ");
}

#[test]
fn test_chained_method_calls_across_lines() {
    let source = "$r = $xs.filter |$x| { $x > 1 }\n  .map |$x| { $x * 2 }\n";
    let parsed = parse(source);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let assignment = parsed.syntax().first_child().expect("assignment");
    assert_eq!(assignment.kind(), SyntaxKind::Assignment);
    let call = assignment.last_child().expect("call");
    assert_eq!(call.kind(), SyntaxKind::CallMethod);
    assert_eq!(
        call.first_child().map(|n| n.kind()),
        Some(SyntaxKind::CallMethod)
    );
}

#[test]
fn test_statement_call_without_parentheses() {
    insta::assert_snapshot!(outline("include foo, bar::baz\n"), @r"
    SourceFile
      CallFunction
        NameRef
        NameRef
    ");
}

#[test]
fn test_function_call_with_lambda() {
    let parsed = parse("with(1, 2) |$a, $b| {\n  $a + $b\n}\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let call = parsed.syntax().first_child().expect("call");
    assert_eq!(call.kind(), SyntaxKind::CallFunction);
    let kinds: Vec<_> = call.children().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::ArgumentList, SyntaxKind::Lambda]);
}

#[test]
fn test_operator_precedence() {
    let parsed = parse("$x = 1 + 2 * 3\n");
    assert!(parsed.ok());
    let assignment = parsed.syntax().first_child().expect("assignment");
    let sum = assignment.last_child().expect("sum");
    assert_eq!(sum.kind(), SyntaxKind::BinaryExpression);
    let product = sum.last_child().expect("product");
    assert_eq!(product.kind(), SyntaxKind::BinaryExpression);
    assert_eq!(product.text(), "2 * 3");
}

#[test]
fn test_detached_bracket_starts_new_array() {
    let parsed = parse("$x = $y\n[1, 2].each |$i| { }\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let kinds: Vec<_> = parsed.syntax().children().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::Assignment, SyntaxKind::CallMethod]);
}

#[test]
fn test_hash_and_array_literals() {
    insta::assert_snapshot!(outline("$h = {\n  'a' => [1, 2],\n}\n"), @r"
    SourceFile
      Assignment
        VariableRef
        Hash
          HashEntry
            Literal
            Array
              Literal
              Literal
    ");
}

#[test]
fn test_regex_match() {
    let output = snapshot_parse("$x =~ /^foo/\n");
    assert!(output.contains("Regex@6..12 \"/^foo/\""), "{output}");
}

#[test]
fn test_division_is_not_regex() {
    let output = snapshot_parse("$x = $a / $b / 2\n");
    assert!(!output.contains("Regex"), "{output}");
    assert!(output.contains("Slash"), "{output}");
}

#[test]
fn test_unary_and_paren_expressions() {
    let parsed = parse("$x = !($a and -$b)\n");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let unary = parsed
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::UnaryExpression)
        .expect("unary");
    assert_eq!(
        unary.first_child().map(|n| n.kind()),
        Some(SyntaxKind::ParenExpression)
    );
}
