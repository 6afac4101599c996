/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The file root, package clause and function declarations
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
///
/// Every node implements `Display`, producing its debug form.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
