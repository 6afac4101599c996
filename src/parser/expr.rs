use crate::{
    ast::expressions::{BinaryExpr, BinaryOperator, Expr, Identifier, Literal, UnaryExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing over binary operators.
///
/// Keeps folding operators to the left while they bind tighter than `bp`.
/// Errors inside the expression are recorded on the parser and the missing
/// part becomes `Expr::Empty`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Expr {
    let mut left = parse_unary_expr(parser);

    loop {
        let Some((operator, operator_bp)) = current_binary_operator(parser) else {
            break;
        };

        if operator_bp <= bp {
            break;
        }

        parser.advance();
        let right = parse_expr(parser, operator_bp);

        left = Expr::Binary(BinaryExpr::new(left, operator, right));
    }

    left
}

fn current_binary_operator(parser: &Parser) -> Option<(BinaryOperator, BindingPower)> {
    let token = parser.current_token()?;
    if token.kind != TokenKind::Operator {
        return None;
    }

    let bp = *parser.get_bp_lookup().get(token.value.as_str())?;
    let operator = BinaryOperator::from_symbol(&token.value)?;

    Some((operator, bp))
}

/// Any operator in prefix position is taken as a unary operator.
pub fn parse_unary_expr(parser: &mut Parser) -> Expr {
    let operator = match parser.current_token() {
        Some(token) if token.kind == TokenKind::Operator => token.value.clone(),
        _ => {
            return match parse_primary_expr(parser) {
                Ok(expr) => expr,
                Err(error) => {
                    parser.report(error);
                    Expr::Empty
                }
            }
        }
    };
    parser.advance();

    let operand = parse_unary_expr(parser);
    if operand.is_empty() {
        return Expr::Empty;
    }

    Expr::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
    })
}

/// Identifiers and literals. Nothing is consumed when neither is present.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.current_token().cloned() else {
        return Err(parser.unexpected("Expression"));
    };

    match token.kind {
        TokenKind::Identifier => {
            parser.advance();
            Ok(Expr::Identifier(Identifier::new(&token.value)))
        }
        TokenKind::Literal => {
            parser.advance();
            parse_literal(&token).map(Expr::Literal)
        }
        _ => Err(parser.unexpected("Expression")),
    }
}

/// Interprets a literal token.
///
/// Tries, in order: a 32-bit integer, `true`/`false`, a float, and finally a
/// quoted form whose first and last characters are dropped.
pub fn parse_literal(token: &Token) -> Result<Literal, Error> {
    let text = token.value.as_str();

    if let Ok(value) = text.parse::<i32>() {
        return Ok(Literal::Integer(value));
    }

    match text {
        "true" => return Ok(Literal::Boolean(true)),
        "false" => return Ok(Literal::Boolean(false)),
        _ => {}
    }

    if let Ok(value) = text.parse::<f64>() {
        return Ok(Literal::Float(value));
    }

    if text.chars().count() > 1 {
        let mut chars = text.chars();
        chars.next();
        chars.next_back();
        return Ok(Literal::String(chars.as_str().to_string()));
    }

    Err(Error::new(
        ErrorImpl::InvalidLiteral {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    ))
}
