use crate::{
    ast::{
        expressions::{Expr, Identifier},
        statements::{
            AssignOperator, AssignStmt, BlockStmt, BranchKeyword, BranchStmt, CaseStmt, IfStmt,
            Stmt, SwitchStmt,
        },
    },
    errors::errors::{describe_found, Error, ErrorImpl, END_OF_FILE},
    lexer::tokens::TokenKind,
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.skip_line_endings();

    let Some(token) = parser.current_token().cloned() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("Statement"),
                found: String::from(END_OF_FILE),
            },
            parser.get_position(),
        ));
    };

    match token.kind {
        TokenKind::Identifier => return parse_assign_stmt(parser),
        TokenKind::Keyword => {
            if let Some(handler) = parser.get_stmt_lookup().get(token.value.as_str()).copied() {
                return handler(parser);
            }
        }
        _ => {}
    }

    Err(Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("Statement"),
            found: describe_found(&token.value),
        },
        token.span.start,
    ))
}

/// Parses statements until `}`, `case`, `default` or the end of input.
///
/// A token that cannot start a statement is reported and skipped.
pub fn parse_block(parser: &mut Parser) -> BlockStmt {
    let mut statements = vec![];

    while !parser.is_token("}")
        && !parser.is_token("case")
        && !parser.is_token("default")
        && !parser.at_eof()
    {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.report(error);
                parser.advance();
            }
        }
    }

    BlockStmt::new(statements)
}

/// `var x = e`, `x := e` or `x = e`.
///
/// Without an assignment operator the statement is kept with an empty
/// expression so the block can carry on.
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let declared = parser.is_token("var");
    if declared {
        parser.advance();
    }

    let identifier = match parser.parse_identifier() {
        Ok(identifier) => identifier,
        Err(error) => {
            parser.report(error);
            Identifier::default()
        }
    };

    let operator = if parser.is_token(":=") {
        AssignOperator::Define
    } else if parser.is_token("=") {
        if declared {
            AssignOperator::Define
        } else {
            AssignOperator::Assign
        }
    } else {
        let error = parser.unexpected("':=' or '='");
        parser.report(error);

        return Ok(Stmt::Assign(AssignStmt {
            identifier,
            operator: AssignOperator::Assign,
            expression: Expr::Empty,
        }));
    };
    parser.advance();

    let expression = parse_expr(parser, BindingPower::Default);

    if let Err(error) = parser.expect_terminator() {
        parser.report(error);
    }

    Ok(Stmt::Assign(AssignStmt {
        identifier,
        operator,
        expression,
    }))
}

pub fn parse_branch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.get_position();
    let token = parser.advance();

    let keyword = token
        .as_ref()
        .and_then(|token| BranchKeyword::from_keyword(&token.value));

    let Some(keyword) = keyword else {
        return Err(unexpected_at(
            "'break', 'continue' or 'return'",
            token.map(|token| token.value).as_deref(),
            position,
        ));
    };

    parser.skip_terminator();

    Ok(Stmt::Branch(BranchStmt { keyword }))
}

/// `if <expr> { ... }` with an optional `else { ... }`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default);

    parser.consume("{");
    let if_body = parse_block(parser);
    parser.consume("}");

    let else_body = if parser.is_token("else") {
        parser.advance();
        parser.consume("{");
        let body = parse_block(parser);
        parser.consume("}");
        Some(body)
    } else {
        None
    };

    parser.skip_terminator();

    Ok(Stmt::If(IfStmt {
        condition,
        if_body,
        else_body,
    }))
}

/// `switch [<expr>] { case <expr>: ... default: ... }`
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let expression = if parser.is_token("{") {
        Expr::Empty
    } else {
        parse_expr(parser, BindingPower::Default)
    };

    parser.consume("{");

    let mut cases = vec![];
    while parser.is_token("case") || parser.is_token("default") {
        cases.push(parse_case_stmt(parser));
    }

    parser.consume("}");
    parser.skip_terminator();

    Ok(Stmt::Switch(SwitchStmt { expression, cases }))
}

/// One `case <expr>:` or `default:` arm, up to the next arm or the closing brace.
pub fn parse_case_stmt(parser: &mut Parser) -> CaseStmt {
    let expression = if parser.is_token("case") {
        parser.advance();
        parse_expr(parser, BindingPower::Default)
    } else {
        parser.advance();
        Expr::Empty
    };

    parser.consume(":");
    let body = parse_block(parser);

    CaseStmt { expression, body }
}

fn unexpected_at(expected: &str, found: Option<&str>, position: Position) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: found.map_or(String::from(END_OF_FILE), describe_found),
        },
        position,
    )
}
