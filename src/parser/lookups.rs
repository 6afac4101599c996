use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error};

use super::{parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary("||", BindingPower::LogicalOr);
    parser.binary("&&", BindingPower::LogicalAnd);

    // Relational
    parser.binary("==", BindingPower::Relational);
    parser.binary("!=", BindingPower::Relational);
    parser.binary("<", BindingPower::Relational);
    parser.binary("<=", BindingPower::Relational);
    parser.binary(">", BindingPower::Relational);
    parser.binary(">=", BindingPower::Relational);

    // Additive and multiplicative
    parser.binary("+", BindingPower::Additive);
    parser.binary("-", BindingPower::Additive);
    parser.binary("*", BindingPower::Multiplicative);
    parser.binary("/", BindingPower::Multiplicative);
    parser.binary("%", BindingPower::Multiplicative);

    // Statements, keyed by their leading keyword
    parser.stmt("var", parse_assign_stmt);
    parser.stmt("if", parse_if_stmt);
    parser.stmt("switch", parse_switch_stmt);
    parser.stmt("break", parse_branch_stmt);
    parser.stmt("continue", parse_branch_stmt);
    parser.stmt("return", parse_branch_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type BPLookup = HashMap<&'static str, BindingPower>;
