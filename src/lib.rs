#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    ast::ast::File, errors::errors::Diagnostics, generator::generator::generate,
    lexer::lexer::tokenize, parser::parser::parse, type_checker::type_checker::analyze,
};

pub mod ast;
pub mod errors;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Gathers the parser's errors and, when parsing completed, the analyzer's.
///
/// Parsing stops early only on a missing package clause, and nothing past
/// that point is worth checking.
pub fn diagnose(ast: &File, completed: bool) -> Diagnostics {
    let mut diagnostics = Diagnostics {
        syntax: ast.errors.clone(),
        semantic: vec![],
    };

    if completed {
        let (variables, semantic) = analyze(ast);
        debug!(
            "analysis recorded {} variables across {} scopes",
            variables.values().map(Vec::len).sum::<usize>(),
            variables.len()
        );
        diagnostics.semantic = semantic;
    }

    diagnostics
}

/// Runs the whole pipeline over a source string.
///
/// Returns the generated text, or every syntax and semantic error found.
pub fn compile(source: &str, file: Option<String>) -> Result<String, Diagnostics> {
    let tokens = tokenize(source, file);
    let (ast, completed) = parse(tokens);

    let diagnostics = diagnose(&ast, completed);
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    Ok(generate(&ast))
}

/// Same as [`compile`], but folds the error report into the returned string.
pub fn translate(source: &str) -> String {
    match compile(source, None) {
        Ok(code) => code,
        Err(diagnostics) => diagnostics.to_string(),
    }
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::{lexer::lexer::tokenize, parser::parser::parse};

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nThis is a test\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 38).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 3).is_none());
    }

    #[test]
    fn test_diagnose_skips_analysis_after_abort() {
        let source = "func main() {\n    b = 1\n}\n";
        let (ast, completed) = parse(tokenize(source, None));

        let diagnostics = super::diagnose(&ast, completed);
        assert_eq!(diagnostics.syntax.len(), 1);
        assert!(diagnostics.semantic.is_empty());
    }

    #[test]
    fn test_diagnose_runs_analysis_after_syntax_errors() {
        let source = "package main\nfunc main() {\n    @\n    b = 1\n}\n";
        let (ast, completed) = parse(tokenize(source, None));

        let diagnostics = super::diagnose(&ast, completed);
        assert!(completed);
        assert_eq!(diagnostics.syntax.len(), 1);
        assert_eq!(diagnostics.semantic.len(), 1);
        assert_eq!(diagnostics.semantic[0].to_string(), "Variable 'b' is not defined");
    }

    #[test]
    fn test_translate_reports_errors() {
        let report = super::translate("func main() {}\n");
        assert!(report.starts_with("Syntax errors:\n\t"));
        assert!(!report.contains("Semantic errors:"));
    }
}
