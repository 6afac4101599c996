//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - The package clause and function declarations
//! - Statement parsing (assignments, branches, if/else, switch)
//! - Expression parsing with operator precedence
//! - Error recovery and reporting
//!
//! Statements are dispatched on their leading keyword through a lookup
//! table; binary operators carry a binding power used for precedence
//! climbing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
