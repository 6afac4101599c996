use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    ast::{
        ast::File,
        expressions::{BinaryExpr, BinaryOperator, Expr},
        statements::{AssignOperator, AssignStmt, BlockStmt, IfStmt, Stmt, SwitchStmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    environment::{Environment, Variable},
    types::VarType,
};

/// Every variable defined during analysis, grouped by scope depth.
pub type Variables = BTreeMap<usize, Vec<Variable>>;

#[derive(Debug)]
pub struct TypeChecker {
    /// Open scopes, innermost last
    pub environments: Vec<Environment>,
    pub variables: Variables,
    pub errors: Vec<Error>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environments: vec![Environment::new(0)],
            variables: BTreeMap::new(),
            errors: vec![],
        }
    }

    /// Drops every open scope and starts again at depth 0.
    pub fn enter_function(&mut self) {
        self.environments = vec![Environment::new(0)];
    }

    pub fn push_environment(&mut self) {
        let depth = self.current_depth() + 1;
        self.environments.push(Environment::new(depth));
    }

    pub fn pop_environment(&mut self) {
        if self.environments.len() > 1 {
            self.environments.pop();
        }
    }

    pub fn current_depth(&self) -> usize {
        self.environments.last().map_or(0, |environment| environment.depth)
    }

    pub fn is_declared_here(&self, variable: &str) -> bool {
        self.environments
            .last()
            .is_some_and(|environment| environment.get_variable(variable).is_some())
    }

    /// Looks a variable up, innermost scope first.
    pub fn fetch_variable_type(&self, variable: &str) -> Option<VarType> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(variable))
    }

    /// Like [`TypeChecker::fetch_variable_type`], but reports unknown variables.
    pub fn resolve_variable(&mut self, variable: &str) -> Option<VarType> {
        let found = self.fetch_variable_type(variable);
        if found.is_none() {
            self.report(ErrorImpl::NotDefined {
                variable: variable.to_string(),
            });
        }
        found
    }

    pub fn declare_variable(&mut self, variable: &str, var_type: VarType) {
        let depth = self.current_depth();
        let Some(environment) = self.environments.last_mut() else {
            return;
        };

        match environment.declare_variable(variable, var_type) {
            Ok(()) => {
                trace!("defined '{}' as {} at depth {}", variable, var_type, depth);
                self.variables.entry(depth).or_default().push(Variable {
                    name: variable.to_string(),
                    var_type,
                });
            }
            Err(error) => self.errors.push(error),
        }
    }

    pub fn report(&mut self, error: ErrorImpl) {
        trace!("semantic error: {}", error);
        self.errors.push(Error::unpositioned(error));
    }
}

/// Infers the type of an expression, recording any errors found on the way.
pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr) -> VarType {
    match expr {
        Expr::Empty => VarType::Undefined,
        Expr::Literal(literal) => VarType::from(literal.kind()),
        Expr::Identifier(identifier) => type_checker
            .resolve_variable(&identifier.name)
            .unwrap_or(VarType::Undefined),
        Expr::Unary(unary) => type_check_expr(type_checker, &unary.operand),
        Expr::Binary(binary) => type_check_binary_expr(type_checker, binary),
    }
}

pub fn type_check_binary_expr(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> VarType {
    let left = type_check_expr(type_checker, &binary.left);
    let right = type_check_expr(type_checker, &binary.right);

    binary_type(type_checker, left, binary.operator, right)
}

/// Result type of `left <operator> right`.
///
/// Equal types keep their type, integers and floats mix into a float, and
/// comparisons always give a boolean. Anything else is a conflict.
pub fn binary_type(
    type_checker: &mut TypeChecker,
    left: VarType,
    operator: BinaryOperator,
    right: VarType,
) -> VarType {
    if left == right || (left.is_numeric() && right.is_numeric()) {
        if operator.is_comparison() {
            VarType::Boolean
        } else if left == right {
            left
        } else {
            VarType::Float
        }
    } else {
        type_checker.report(ErrorImpl::MismatchedTypes {
            left: left.to_string(),
            right: right.to_string(),
        });
        VarType::Undefined
    }
}

fn expect_condition(type_checker: &mut TypeChecker, condition_type: VarType) {
    if condition_type != VarType::Boolean {
        type_checker.report(ErrorImpl::NonBooleanCondition {
            received: condition_type.to_string(),
        });
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) {
    match stmt {
        Stmt::Assign(assign) => type_check_assign_stmt(type_checker, assign),
        Stmt::Branch(_) => {}
        Stmt::If(if_stmt) => type_check_if_stmt(type_checker, if_stmt),
        Stmt::Switch(switch) => type_check_switch_stmt(type_checker, switch),
    }
}

/// Checks the statements of a block in the current scope.
pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) {
    for stmt in block.iter() {
        type_check_stmt(type_checker, stmt);
    }
}

/// Checks a block inside a scope of its own.
pub fn type_check_nested_block(type_checker: &mut TypeChecker, block: &BlockStmt) {
    type_checker.push_environment();
    type_check_block(type_checker, block);
    type_checker.pop_environment();
}

pub fn type_check_assign_stmt(type_checker: &mut TypeChecker, assign: &AssignStmt) {
    // The parser has already complained about the missing expression.
    if assign.expression.is_empty() {
        return;
    }

    let name = assign.identifier.name.as_str();

    match assign.operator {
        AssignOperator::Define => {
            if type_checker.is_declared_here(name) {
                type_checker.report(ErrorImpl::AlreadyDefined {
                    variable: name.to_string(),
                });
                return;
            }

            let var_type = type_check_expr(type_checker, &assign.expression);
            type_checker.declare_variable(name, var_type);
        }
        AssignOperator::Assign => {
            let Some(expected) = type_checker.resolve_variable(name) else {
                return;
            };

            let received = type_check_expr(type_checker, &assign.expression);
            if received != expected {
                type_checker.report(ErrorImpl::AssignmentMismatch {
                    variable: name.to_string(),
                    expected: expected.to_string(),
                    received: received.to_string(),
                });
            }
        }
    }
}

/// Both branches are checked even when the condition is not a boolean.
pub fn type_check_if_stmt(type_checker: &mut TypeChecker, if_stmt: &IfStmt) {
    let condition_type = type_check_expr(type_checker, &if_stmt.condition);
    expect_condition(type_checker, condition_type);

    type_check_nested_block(type_checker, &if_stmt.if_body);
    if let Some(else_body) = &if_stmt.else_body {
        type_check_nested_block(type_checker, else_body);
    }
}

/// With a subject every case is checked as `subject == case`; without one
/// every case must be a boolean. `default` arms have nothing to check.
pub fn type_check_switch_stmt(type_checker: &mut TypeChecker, switch: &SwitchStmt) {
    let tagged = !switch.expression.is_empty();
    let subject_type = type_check_expr(type_checker, &switch.expression);

    type_checker.push_environment();

    for case in switch.cases.iter() {
        if !case.is_default() {
            let case_type = type_check_expr(type_checker, &case.expression);

            if tagged {
                binary_type(type_checker, subject_type, BinaryOperator::Equals, case_type);
            } else {
                expect_condition(type_checker, case_type);
            }
        }

        type_check_nested_block(type_checker, &case.body);
    }

    type_checker.pop_environment();
}

/// Checks every function body, each in a fresh set of scopes.
///
/// The tree is only read. Returns every variable defined, by depth, and the
/// semantic errors in the order they were found.
pub fn analyze(file: &File) -> (Variables, Vec<Error>) {
    let mut type_checker = TypeChecker::new();

    for declaration in file.declarations.iter() {
        trace!("checking function '{}'", declaration.name.name);
        type_checker.enter_function();
        type_check_block(&mut type_checker, &declaration.body);
    }

    debug!(
        "analyzed {} functions, {} semantic errors",
        file.declarations.len(),
        type_checker.errors.len()
    );

    (type_checker.variables, type_checker.errors)
}
