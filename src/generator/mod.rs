//! Code generation module.
//!
//! Turns a checked AST into line-oriented pseudo-assembly. Every statement
//! gets a hierarchical address whose length encodes its nesting depth, and
//! switches are rewritten into if/else chains before they are written out.

pub mod address;
pub mod expr;
pub mod generator;
pub mod stmt;

#[cfg(test)]
mod tests;
