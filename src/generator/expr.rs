use crate::ast::expressions::{Expr, Identifier, Literal};

pub fn gen_expression(expr: &Expr) -> String {
    match expr {
        Expr::Empty => String::new(),
        Expr::Identifier(identifier) => gen_identifier(identifier),
        Expr::Literal(literal) => gen_literal(literal),
        Expr::Unary(unary) => format!("{} {}", unary.operator, gen_expression(&unary.operand)),
        Expr::Binary(binary) => format!(
            "{} {} {}",
            gen_expression(&binary.left),
            binary.operator,
            gen_expression(&binary.right)
        ),
    }
}

/// Variables are written between ampersands.
pub fn gen_identifier(identifier: &Identifier) -> String {
    format!("&{}&", identifier.name)
}

pub fn gen_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => format!("\"{}\"", value),
        _ => literal.value(),
    }
}
