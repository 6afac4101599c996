use std::fmt::Display;

use crate::errors::errors::{format_errors, Error};

use super::{expressions::Identifier, statements::BlockStmt};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Package {
    pub name: String,
}

impl Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  Name: '{}'", self.name)
    }
}

/// `func <name>() { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Identifier,
    pub body: BlockStmt,
}

impl Display for FuncDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\nFunction declaration\n  Name: {}\n  Body: {}", self.name, self.body)
    }
}

/// Root of the tree, together with the syntax errors found while building it.
///
/// `package` is `None` only when the package clause was missing and parsing
/// stopped right away.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub package: Option<Package>,
    pub declarations: Vec<FuncDecl>,
    pub errors: Vec<Error>,
}

impl Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let package = self.package.clone().unwrap_or_default();

        write!(f, "Package:\n{}\nDeclarations:\n", package)?;
        for declaration in self.declarations.iter() {
            writeln!(f, "  {}", declaration)?;
        }
        write!(f, "\nErrors:\n{}\n", format_errors(&self.errors))
    }
}
