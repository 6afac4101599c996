use std::{fmt::Display, slice::Iter};

use super::expressions::{Expr, Identifier};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Branch(BranchStmt),
    If(IfStmt),
    Switch(SwitchStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assign(stmt) => write!(f, "{}", stmt),
            Stmt::Branch(stmt) => write!(f, "{}", stmt),
            Stmt::If(stmt) => write!(f, "{}", stmt),
            Stmt::Switch(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Statements grouped by braces, or the body of one switch case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(statements: Vec<Stmt>) -> Self {
        BlockStmt { statements }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nBlock statement:\n  Statements:")?;
        for stmt in self.iter() {
            write!(f, "\n{}\n", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignOperator {
    /// `:=`, also written `var x = ...`
    Define,
    /// `=`
    #[default]
    Assign,
}

impl AssignOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOperator::Define => ":=",
            AssignOperator::Assign => "=",
        }
    }
}

impl Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignStmt {
    pub identifier: Identifier,
    pub operator: AssignOperator,
    pub expression: Expr,
}

impl Display for AssignStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\nAssign statement\n  Identifier:\n{}\n  Operator: {}\n  Expression:\n{}",
            self.identifier, self.operator, self.expression
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKeyword {
    Break,
    Continue,
    Return,
}

impl BranchKeyword {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "break" => Some(BranchKeyword::Break),
            "continue" => Some(BranchKeyword::Continue),
            "return" => Some(BranchKeyword::Return),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            BranchKeyword::Break => "break",
            BranchKeyword::Continue => "continue",
            BranchKeyword::Return => "return",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchStmt {
    pub keyword: BranchKeyword,
}

impl Display for BranchStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nBranch statement:\n  Keyword: '{}'", self.keyword.keyword())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub if_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
}

impl Display for IfStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nIf statement:\n Condition:{}  If body:{}  Else body:", self.condition, self.if_body)?;
        match &self.else_body {
            Some(else_body) => write!(f, "{}", else_body),
            None => Ok(()),
        }
    }
}

/// One `case <expr>:` or `default:` arm. A default arm has an empty expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub expression: Expr,
    pub body: BlockStmt,
}

impl CaseStmt {
    pub fn is_default(&self) -> bool {
        self.expression.is_empty()
    }
}

impl Display for CaseStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nCase statement:\n  Case:\n{}  Body:{}", self.expression, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub expression: Expr,
    pub cases: Vec<CaseStmt>,
}

impl Display for SwitchStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nSwitch statement:\n  Expression:{}  Body:", self.expression)?;
        for case in self.cases.iter() {
            write!(f, "\n{}", case)?;
        }
        Ok(())
    }
}
