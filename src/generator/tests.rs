//! Unit tests for the code generator.
//!
//! Covers addresses, expression rendering, statement layout and switch
//! desugaring.

use super::{
    address::Address,
    expr::gen_expression,
    generator::generate,
    stmt::desugar_switch,
};
use crate::{
    ast::{
        ast::File,
        expressions::{BinaryExpr, BinaryOperator, Expr, Identifier, Literal, UnaryExpr},
        statements::{Stmt, SwitchStmt},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_file(source: &str) -> File {
    let (file, completed) = parse(tokenize(source, None));
    assert!(completed);
    assert!(file.errors.is_empty(), "syntax errors: {:?}", file.errors);
    file
}

fn generate_body(body: &str) -> String {
    generate(&parse_file(&format!("package main\nfunc main() {{\n{}\n}}\n", body)))
}

/// Wraps the expected body lines in the package and `main` procedure lines.
fn in_main(lines: &str) -> String {
    format!("Z1 main\n\tQ1.1. PROCEDURE &main&\n{}\tQ1.1. ENDPROC &main&\n", lines)
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(Identifier::new(name))
}

#[test]
fn test_address_display_and_indentation() {
    let address = Address::new(vec![1, 2, 1]);

    assert_eq!(address.to_string(), "1.2.1.");
    assert_eq!(address.depth(), 3);
    assert_eq!(address.indentation(), "\t\t");
    assert_eq!(address.line('Q', "break"), "\t\tQ1.2.1. break\n");
}

#[test]
fn test_address_child_and_sibling() {
    let address = Address::new(vec![1, 1]);

    assert_eq!(address.child(), Address::new(vec![1, 1, 1]));
    assert_eq!(address.next_sibling(), Address::new(vec![1, 2]));
    assert_eq!(address.child().next_sibling().to_string(), "1.1.2.");
    assert_eq!(address, Address::new(vec![1, 1]));
}

#[test]
fn test_expression_rendering() {
    let expr = Expr::Binary(BinaryExpr::new(
        Expr::Unary(UnaryExpr {
            operator: "-".to_string(),
            operand: Box::new(ident("a")),
        }),
        BinaryOperator::Plus,
        Expr::Literal(Literal::String("s".to_string())),
    ));

    assert_eq!(gen_expression(&expr), "- &a& + \"s\"");
    assert_eq!(gen_expression(&Expr::Literal(Literal::Float(2.5))), "2.5");
    assert_eq!(gen_expression(&Expr::Literal(Literal::Boolean(false))), "false");
    assert_eq!(gen_expression(&Expr::Empty), "");
}

#[test]
fn test_literal_assignment_uses_answer_line() {
    assert_eq!(
        generate_body("a := 1\ns := \"hi\""),
        in_main("\t\tQ1.1.1. &a&\n\t\tA1.1.1. 1\n\t\tQ1.1.2. &s&\n\t\tA1.1.2. \"hi\"\n")
    );
}

#[test]
fn test_expression_assignment_is_inline() {
    assert_eq!(
        generate_body("b := a * 2 + c\nn := -b"),
        in_main("\t\tQ1.1.1. &b& := &a& * 2 + &c&\n\t\tQ1.1.2. &n& := - &b&\n")
    );
}

#[test]
fn test_if_without_else() {
    assert_eq!(
        generate_body("if ok {\n continue\n}\nreturn"),
        in_main(concat!(
            "\t\tQ1.1.1. IF &ok& THEN BEGIN\n",
            "\t\t\tQ1.1.1.1. continue\n",
            "\t\t\tQ1.1.1.2. END\n",
            "\t\tQ1.1.2. return\n",
        ))
    );
}

#[test]
fn test_if_with_else() {
    assert_eq!(
        generate_body("if a > 0 {\n a = 2\n b = a\n} else {\n break\n}"),
        in_main(concat!(
            "\t\tQ1.1.1. IF &a& > 0 THEN BEGIN\n",
            "\t\t\tQ1.1.1.1. &a&\n",
            "\t\t\tA1.1.1.1. 2\n",
            "\t\t\tQ1.1.1.2. &b& := &a&\n",
            "\t\t\tQ1.1.1.3. END ELSE BEGIN\n",
            "\t\t\tQ1.1.1.4. break\n",
            "\t\t\tQ1.1.1.5. END\n",
        ))
    );
}

#[test]
fn test_empty_if_body() {
    assert_eq!(
        generate_body("if ok {\n}"),
        in_main("\t\tQ1.1.1. IF &ok& THEN BEGIN\n\t\t\tQ1.1.1.1. END\n")
    );
}

#[test]
fn test_switch_without_cases_takes_no_address() {
    assert_eq!(
        generate_body("switch x {\n}\nreturn"),
        in_main("\t\tQ1.1.1. return\n")
    );
}

#[test]
fn test_tagged_switch_becomes_if_chain() {
    assert_eq!(
        generate_body("switch x {\ncase 1:\n break\ndefault:\n return\n}"),
        in_main(concat!(
            "\t\tQ1.1.1. IF &x& == 1 THEN BEGIN\n",
            "\t\t\tQ1.1.1.1. break\n",
            "\t\t\tQ1.1.1.2. END ELSE BEGIN\n",
            "\t\t\tQ1.1.1.3. IF true THEN BEGIN\n",
            "\t\t\t\tQ1.1.1.3.1. return\n",
            "\t\t\t\tQ1.1.1.3.2. END\n",
            "\t\t\tQ1.1.1.4. END\n",
        ))
    );
}

#[test]
fn test_desugar_switch_structure() {
    let file = parse_file(
        "package main\nfunc main() {\nswitch {\ncase a:\n break\ncase b:\n continue\n}\n}",
    );
    let Stmt::Switch(switch) = &file.declarations[0].body.statements[0] else {
        panic!("expected a switch statement");
    };

    let outer = desugar_switch(switch).unwrap();
    assert_eq!(outer.condition, ident("a"));

    let else_body = outer.else_body.unwrap();
    assert_eq!(else_body.statements.len(), 1);

    let Stmt::If(inner) = &else_body.statements[0] else {
        panic!("expected a nested if");
    };
    assert_eq!(inner.condition, ident("b"));
    assert!(inner.else_body.is_none());
}

#[test]
fn test_desugar_empty_switch() {
    let switch = SwitchStmt {
        expression: ident("x"),
        cases: vec![],
    };

    assert!(desugar_switch(&switch).is_none());
}

#[test]
fn test_procedures_are_numbered_in_order() {
    let file = parse_file("package demo\nfunc first() {\nreturn\n}\nfunc second() {\n}\n");

    assert_eq!(
        generate(&file),
        concat!(
            "Z1 demo\n",
            "\tQ1.1. PROCEDURE &first&\n",
            "\t\tQ1.1.1. return\n",
            "\tQ1.1. ENDPROC &first&\n",
            "\tQ1.2. PROCEDURE &second&\n",
            "\tQ1.2. ENDPROC &second&\n",
        )
    );
}

#[test]
fn test_empty_else_is_dropped() {
    assert_eq!(
        generate_body("ok := true\nif ok {\n break\n} else {\n}"),
        in_main(concat!(
            "\t\tQ1.1.1. &ok&\n",
            "\t\tA1.1.1. true\n",
            "\t\tQ1.1.2. IF &ok& THEN BEGIN\n",
            "\t\t\tQ1.1.2.1. break\n",
            "\t\t\tQ1.1.2.2. END\n",
        ))
    );
}

#[test]
fn test_large_float_answer_uses_exponent() {
    assert_eq!(
        generate_body("f := 1e21\ng := 0.5"),
        in_main("\t\tQ1.1.1. &f&\n\t\tA1.1.1. 1e+21\n\t\tQ1.1.2. &g&\n\t\tA1.1.2. 0.5\n")
    );
}
