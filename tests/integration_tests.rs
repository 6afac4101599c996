//! Integration tests for end-to-end translation.
//!
//! These tests run source text through the whole pipeline: tokenization,
//! parsing, semantic analysis and code generation.

use notgo::{
    compile,
    errors::errors::ErrorKind,
    lexer::lexer::tokenize,
    parser::parser::parse,
    translate,
};

const SAMPLE: &str = "package main

// Entry point
func main() {
    var a = 1
    b := a + 2.5 /* promoted */
    if a > 0 {
        a = 2
    } else {
        break
    }
    return
}
";

#[test]
fn test_translate_sample_program() {
    let expected = concat!(
        "Z1 main\n",
        "\tQ1.1. PROCEDURE &main&\n",
        "\t\tQ1.1.1. &a&\n",
        "\t\tA1.1.1. 1\n",
        "\t\tQ1.1.2. &b& := &a& + 2.5\n",
        "\t\tQ1.1.3. IF &a& > 0 THEN BEGIN\n",
        "\t\t\tQ1.1.3.1. &a&\n",
        "\t\t\tA1.1.3.1. 2\n",
        "\t\t\tQ1.1.3.2. END ELSE BEGIN\n",
        "\t\t\tQ1.1.3.3. break\n",
        "\t\t\tQ1.1.3.4. END\n",
        "\t\tQ1.1.4. return\n",
        "\tQ1.1. ENDPROC &main&\n",
    );

    assert_eq!(translate(SAMPLE), expected);
}

#[test]
fn test_compile_returns_code() {
    let code = compile(SAMPLE, Some("sample.notgo".to_string())).unwrap();

    assert!(code.starts_with("Z1 main\n"));
    assert!(code.ends_with("ENDPROC &main&\n"));
}

#[test]
fn test_switch_matches_equivalent_if_chain() {
    let switch = "package main
func main() {
    x := 1
    a := 0
    switch x { case 1: a = 1; case 2: a = 2; default: a = 3 }
}
";
    let chain = "package main
func main() {
    x := 1
    a := 0
    if x == 1 { a = 1 } else { if x == 2 { a = 2 } else { if true { a = 3 } } }
}
";

    let switch_code = compile(switch, None).unwrap();
    assert_eq!(switch_code, compile(chain, None).unwrap());
    assert!(switch_code.contains("IF &x& == 1 THEN BEGIN"));
    assert!(switch_code.contains("IF true THEN BEGIN"));
}

#[test]
fn test_tagless_switch() {
    let source = "package main
func main() {
    x := 3
    switch {
    case x > 2:
        x = 2
    case x < 0:
        x = 0
    }
}
";

    let code = compile(source, None).unwrap();
    assert!(code.contains("\t\tQ1.1.2. IF &x& > 2 THEN BEGIN\n"));
    assert!(code.contains("\t\t\tQ1.1.2.3. IF &x& < 0 THEN BEGIN\n"));
}

#[test]
fn test_comments_do_not_change_output() {
    let with_comments = "package main // the package
func main() {
    /* a block
       comment */ a := 1 // trailing
}
";
    let without_comments = "package main
func main() {
    a := 1
}
";

    assert_eq!(translate(with_comments), translate(without_comments));
}

#[test]
fn test_missing_package_clause() {
    let source = "func main() {\n    a := 1\n}\n";
    let (file, completed) = parse(tokenize(source, None));

    assert!(!completed);
    assert!(file.declarations.is_empty());
    assert!(!file.errors.is_empty());

    let diagnostics = compile(source, None).unwrap_err();
    assert!(diagnostics.semantic.is_empty());
    assert_eq!(translate(source), "Syntax errors:\n\tpackage expected, got 'func'\n");
}

#[test]
fn test_semantic_errors_replace_output() {
    let source = "package main
func main() {
    var a = 1
    var a = 2
    b = 1
    c := a + \"x\"
    if a {
    }
}
";

    assert_eq!(
        translate(source),
        concat!(
            "Semantic errors:\n",
            "\tVariable 'a' is already defined\n",
            "\tVariable 'b' is not defined\n",
            "\tMismatched types: Integer and String\n",
            "\tNon-bool type Integer used as condition\n",
        )
    );
}

#[test]
fn test_syntax_and_semantic_errors_are_both_reported() {
    let source = "package main
func main() {
    a := 1 +
    b = 2
}
";

    let diagnostics = compile(source, None).unwrap_err();
    assert_eq!(diagnostics.syntax.len(), 1);
    assert_eq!(diagnostics.semantic.len(), 2);

    assert_eq!(
        diagnostics.to_string(),
        concat!(
            "Syntax errors:\n",
            "\tExpression expected, got 'end of file'\n",
            "Semantic errors:\n",
            "\tMismatched types: Integer and Undefined\n",
            "\tVariable 'b' is not defined\n",
        )
    );
}

#[test]
fn test_error_kinds_through_pipeline() {
    let source = "package main
func main() {
    x := 1
    x = true
    @
}
";

    let diagnostics = compile(source, None).unwrap_err();
    assert_eq!(diagnostics.syntax[0].kind(), ErrorKind::UnexpectedToken);
    assert_eq!(diagnostics.semantic[0].kind(), ErrorKind::AssignmentError);
}

#[test]
fn test_shadowed_variable_types() {
    let source = "package main
func main() {
    var a = 1
    if true {
        var a = 1.5
        a = 2.5
    }
    a = 3
}
";

    assert!(compile(source, None).is_ok());
}

#[test]
fn test_multiple_functions() {
    let source = "package tools

func first() {
    n := 1
}

func second() {
    n := \"text\"
    return
}
";

    let code = compile(source, None).unwrap();
    assert_eq!(
        code,
        concat!(
            "Z1 tools\n",
            "\tQ1.1. PROCEDURE &first&\n",
            "\t\tQ1.1.1. &n&\n",
            "\t\tA1.1.1. 1\n",
            "\tQ1.1. ENDPROC &first&\n",
            "\tQ1.2. PROCEDURE &second&\n",
            "\t\tQ1.2.1. &n&\n",
            "\t\tA1.2.1. \"text\"\n",
            "\t\tQ1.2.2. return\n",
            "\tQ1.2. ENDPROC &second&\n",
        )
    );
}
