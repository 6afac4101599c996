//! Type checking and semantic analysis module.
//!
//! This module walks the AST without changing it while:
//!
//! - Resolving variables through nested scopes, innermost first
//! - Inferring the type of every expression
//! - Checking definitions, assignments and conditions
//!
//! The type checker keeps a stack of environments, one per open block, and
//! starts a new stack for every function.

pub mod environment;
pub mod type_checker;
pub mod types;
