use crate::ast::{
    expressions::{BinaryExpr, BinaryOperator, Expr, Literal},
    statements::{AssignStmt, BlockStmt, IfStmt, Stmt, SwitchStmt},
};

use super::{
    address::Address,
    expr::{gen_expression, gen_identifier, gen_literal},
};

/// Generates a block starting at `start`.
///
/// Returns the code and the first address left unused. Statements that
/// produce no code do not take an address.
pub fn gen_block(block: &BlockStmt, start: Address) -> (String, Address) {
    let mut code = String::new();
    let mut address = start;

    for statement in block.iter() {
        let generated = gen_statement(statement, &address);
        if !generated.is_empty() {
            code.push_str(&generated);
            address = address.next_sibling();
        }
    }

    (code, address)
}

pub fn gen_statement(statement: &Stmt, address: &Address) -> String {
    match statement {
        Stmt::Assign(assign) => gen_assign(assign, address),
        Stmt::Branch(branch) => address.line('Q', branch.keyword.keyword()),
        Stmt::If(if_stmt) => gen_if(if_stmt, address),
        Stmt::Switch(switch) => match desugar_switch(switch) {
            Some(if_stmt) => gen_if(&if_stmt, address),
            None => String::new(),
        },
    }
}

/// A literal value goes on its own `A` line under the target; anything
/// else is written inline after `:=`.
pub fn gen_assign(assign: &AssignStmt, address: &Address) -> String {
    let target = gen_identifier(&assign.identifier);

    match &assign.expression {
        Expr::Literal(literal) => {
            let mut code = address.line('Q', &target);
            code.push_str(&address.line('A', &gen_literal(literal)));
            code
        }
        expression => address.line('Q', &format!("{} := {}", target, gen_expression(expression))),
    }
}

pub fn gen_if(if_stmt: &IfStmt, address: &Address) -> String {
    let mut code = address.line(
        'Q',
        &format!("IF {} THEN BEGIN", gen_expression(&if_stmt.condition)),
    );

    let (if_body, mut next) = gen_block(&if_stmt.if_body, address.child());
    code.push_str(&if_body);

    if let Some(else_body) = if_stmt.else_body.as_ref().filter(|body| !body.is_empty()) {
        code.push_str(&next.line('Q', "END ELSE BEGIN"));

        let (else_code, after) = gen_block(else_body, next.next_sibling());
        code.push_str(&else_code);
        next = after;
    }

    code.push_str(&next.line('Q', "END"));
    code
}

/// Rewrites a switch as a chain of ifs, built from the last case backwards.
///
/// Each case's else branch holds the if for the following case, so the first
/// matching case wins. `default` becomes `if true`. With a subject the
/// condition is `subject == case`; without one the case expression is used
/// as is. A switch with no cases yields `None`.
pub fn desugar_switch(switch: &SwitchStmt) -> Option<IfStmt> {
    switch.cases.iter().rev().fold(None, |following, case| {
        let condition = if case.is_default() {
            Expr::Literal(Literal::Boolean(true))
        } else if switch.expression.is_empty() {
            case.expression.clone()
        } else {
            Expr::Binary(BinaryExpr::new(
                switch.expression.clone(),
                BinaryOperator::Equals,
                case.expression.clone(),
            ))
        };

        Some(IfStmt {
            condition,
            if_body: case.body.clone(),
            else_body: following.map(|inner| BlockStmt::new(vec![Stmt::If(inner)])),
        })
    })
}
