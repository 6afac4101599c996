//! Unit tests for the AST module.
//!
//! Checks the debug strings produced by `Display` and the small helpers on
//! operators, keywords and literals.

use super::{
    ast::{File, Package},
    expressions::{BinaryExpr, BinaryOperator, Expr, Identifier, Literal, LiteralKind},
    statements::{BlockStmt, BranchKeyword, BranchStmt, CaseStmt, Stmt},
};
use crate::errors::errors::{Error, ErrorImpl};

#[test]
fn test_empty_expression_renders_as_nothing() {
    assert_eq!(Expr::Empty.to_string(), "");
    assert!(Expr::Empty.is_empty());
    assert!(Expr::default().is_empty());
    assert!(!Expr::Identifier(Identifier::new("a")).is_empty());
}

#[test]
fn test_identifier_debug_string() {
    assert_eq!(
        Expr::Identifier(Identifier::new("count")).to_string(),
        "\nIdentifier\n  Name: 'count'\n"
    );
}

#[test]
fn test_literal_debug_string() {
    assert_eq!(
        Literal::Integer(5).to_string(),
        "\nLiteral\n  Type:Integer\n  Value: '5'\n"
    );
    assert_eq!(
        Literal::String("hi".to_string()).to_string(),
        "\nLiteral\n  Type:String\n  Value: 'hi'\n"
    );
}

#[test]
fn test_literal_kind_and_value() {
    assert_eq!(Literal::Float(2.5).kind(), LiteralKind::Float);
    assert_eq!(Literal::Float(2.5).value(), "2.5");
    assert_eq!(Literal::Boolean(true).kind(), LiteralKind::Boolean);
    assert_eq!(Literal::Boolean(true).value(), "true");
}

#[test]
fn test_binary_debug_string_nests_operands() {
    let expr = Expr::Binary(BinaryExpr::new(
        Expr::Identifier(Identifier::new("a")),
        BinaryOperator::Plus,
        Expr::Literal(Literal::Integer(1)),
    ));
    let debug = expr.to_string();

    assert!(debug.starts_with("\nBinary expression:\n  Left operand:\n\nIdentifier\n  Name: 'a'\n"));
    assert!(debug.contains("\n  Operator: +\n"));
    assert!(debug.ends_with("Value: '1'\n"));
}

#[test]
fn test_binary_operator_symbols() {
    let symbols = ["||", "&&", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "%"];

    for symbol in symbols {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();
        assert_eq!(operator.symbol(), symbol);
    }

    assert_eq!(BinaryOperator::from_symbol(":="), None);
    assert_eq!(BinaryOperator::from_symbol("!"), None);
}

#[test]
fn test_comparison_operators() {
    assert!(BinaryOperator::Equals.is_comparison());
    assert!(BinaryOperator::NotEquals.is_comparison());
    assert!(BinaryOperator::GreaterEquals.is_comparison());
    assert!(!BinaryOperator::And.is_comparison());
    assert!(!BinaryOperator::Plus.is_comparison());
}

#[test]
fn test_branch_keywords() {
    assert_eq!(BranchKeyword::from_keyword("continue"), Some(BranchKeyword::Continue));
    assert_eq!(BranchKeyword::from_keyword("goto"), None);
    assert_eq!(
        Stmt::Branch(BranchStmt {
            keyword: BranchKeyword::Return
        })
        .to_string(),
        "\nBranch statement:\n  Keyword: 'return'"
    );
}

#[test]
fn test_default_case() {
    let default = CaseStmt {
        expression: Expr::Empty,
        body: BlockStmt::default(),
    };
    let case = CaseStmt {
        expression: Expr::Literal(Literal::Integer(1)),
        body: BlockStmt::default(),
    };

    assert!(default.is_default());
    assert!(!case.is_default());
}

#[test]
fn test_file_debug_string_lists_errors() {
    let file = File {
        package: Some(Package {
            name: "main".to_string(),
        }),
        declarations: vec![],
        errors: vec![Error::unpositioned(ErrorImpl::UnexpectedToken {
            expected: "{".to_string(),
            found: "x".to_string(),
        })],
    };

    assert_eq!(
        file.to_string(),
        "Package:\n  Name: 'main'\nDeclarations:\n\nErrors:\n\t{ expected, got 'x'\n\n"
    );
}

#[test]
fn test_file_without_package() {
    let debug = File::default().to_string();

    assert!(debug.starts_with("Package:\n  Name: ''\n"));
}

#[test]
fn test_float_values_switch_to_exponent_form() {
    let value = |float: f64| Literal::Float(float).value();

    assert_eq!(value(3.0), "3");
    assert_eq!(value(0.0001), "0.0001");
    assert_eq!(value(100000.0), "100000");
    assert_eq!(value(1e6), "1e+06");
    assert_eq!(value(1234567.0), "1.234567e+06");
    assert_eq!(value(3000000000.0), "3e+09");
    assert_eq!(value(1e21), "1e+21");
    assert_eq!(value(1e-7), "1e-07");
    assert_eq!(value(-2.5e-5), "-2.5e-05");
    assert_eq!(value(1.5e300), "1.5e+300");
    assert_eq!(value(f64::INFINITY), "+Inf");
}
