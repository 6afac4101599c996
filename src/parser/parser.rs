//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a keyword lookup table and binary
//! operators are climbed by binding power.
//!
//! The parser never stops at the first mistake. Errors are collected on the
//! parser and handed back inside the resulting `File`; only a missing package
//! clause ends parsing early.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::{
        ast::{File, FuncDecl, Package},
        expressions::Identifier,
    },
    errors::errors::{describe_found, Error, ErrorImpl, END_OF_FILE},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_block,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Syntax errors collected so far
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token, or `None` once the input is exhausted.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Advances to the next token and returns the one just passed.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn skip_line_endings(&mut self) {
        while self.current_token_kind() == Some(TokenKind::EndOfLine) {
            self.pos += 1;
        }
    }

    /// Checks the text of the next meaningful token, skipping line endings.
    pub fn is_token(&mut self, text: &str) -> bool {
        self.skip_line_endings();
        self.current_token().is_some_and(|token| token.value == text)
    }

    /// The current token as it should appear in an error message.
    pub fn found(&self) -> String {
        match self.current_token() {
            Some(token) => describe_found(&token.value),
            None => String::from(END_OF_FILE),
        }
    }

    /// Returns the position of the current token, or the end of the last one.
    pub fn get_position(&self) -> Position {
        if let Some(token) = self.current_token() {
            return token.span.start.clone();
        }

        match self.tokens.last() {
            Some(token) => token.span.end.clone(),
            None => Position::null(),
        }
    }

    /// Builds an "`expected` expected, got '...'" error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.found(),
            },
            self.get_position(),
        )
    }

    /// Expects a token with the given text.
    ///
    /// Leading line endings are skipped. The parser moves past the current
    /// token whether it matched or not, so a bad token is never seen twice.
    pub fn expect(&mut self, text: &str) -> Result<Token, Error> {
        self.skip_line_endings();

        if self.current_token().is_some_and(|token| token.value == text) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }

        let error = self.unexpected(text);
        self.advance();
        Err(error)
    }

    /// Expects a token with the given text and records the error if it is absent.
    pub fn consume(&mut self, text: &str) {
        if let Err(error) = self.expect(text) {
            self.report(error);
        }
    }

    /// Expects an identifier. Nothing is consumed on failure.
    pub fn parse_identifier(&mut self) -> Result<Identifier, Error> {
        let Some(token) = self.current_token() else {
            return Err(self.unexpected("Identifier"));
        };

        if token.kind != TokenKind::Identifier {
            return Err(Error::new(
                ErrorImpl::TypeMismatch {
                    expected: String::from("Identifier"),
                    found: describe_found(&token.value),
                    kind: token.kind.to_string(),
                },
                token.span.start.clone(),
            ));
        }

        let identifier = Identifier::new(&token.value);
        self.advance();
        Ok(identifier)
    }

    /// Expects the end of a statement.
    ///
    /// A `;` or a line ending is consumed. A closing `}` or the end of input
    /// also ends the statement but is left in place.
    pub fn expect_terminator(&mut self) -> Result<(), Error> {
        let Some(token) = self.current_token() else {
            return Ok(());
        };

        if token.is_terminator() {
            self.advance();
            Ok(())
        } else if token.value == "}" {
            Ok(())
        } else {
            Err(self.unexpected("';' or a new line"))
        }
    }

    /// Consumes a terminator if one follows.
    pub fn skip_terminator(&mut self) {
        if self.current_token().is_some_and(Token::is_terminator) {
            self.advance();
        }
    }

    pub fn report(&mut self, error: Error) {
        trace!("syntax error: {}", error);
        self.errors.push(error);
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a binary operator with its binding power.
    pub fn binary(&mut self, operator: &'static str, binding_power: BindingPower) {
        self.binding_power_lookup.insert(operator, binding_power);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses `package <name>` and its terminator.
///
/// Returns `None` when the clause is unusable, in which case nothing else in
/// the file is parsed.
pub fn parse_package(parser: &mut Parser) -> Option<Package> {
    let keyword = parser.expect("package");
    let name = parser.parse_identifier();
    let terminator = parser.expect_terminator();

    if let Err(error) = keyword {
        parser.report(error);
        return None;
    }

    let name = match name {
        Ok(identifier) => identifier.name,
        Err(error) => {
            parser.report(error);
            String::new()
        }
    };

    if let Err(error) = terminator {
        parser.report(error);
    }

    if name.is_empty() {
        None
    } else {
        Some(Package { name })
    }
}

/// Parses `func <name>() { ... }`.
///
/// Declarations without a usable name are dropped after their body has been
/// parsed, so the parser still moves past them.
pub fn parse_fn_decl(parser: &mut Parser) -> Option<FuncDecl> {
    if let Err(error) = parser.expect("func") {
        parser.report(error);
        return None;
    }

    let name = match parser.parse_identifier() {
        Ok(identifier) => Some(identifier),
        Err(error) => {
            parser.report(error);
            None
        }
    };

    parser.consume("(");
    parser.consume(")");

    parser.consume("{");
    let body = parse_block(parser);
    parser.consume("}");

    name.map(|name| FuncDecl { name, body })
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// The returned flag is `false` when parsing stopped at a malformed package
/// clause; the `File` then holds nothing but the errors.
pub fn parse(tokens: Vec<Token>) -> (File, bool) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let Some(package) = parse_package(&mut parser) else {
        debug!("package clause missing, parsing aborted");
        let file = File {
            package: None,
            declarations: vec![],
            errors: parser.take_errors(),
        };
        return (file, false);
    };

    let mut declarations = vec![];

    loop {
        parser.skip_line_endings();
        if parser.at_eof() {
            break;
        }

        if let Some(declaration) = parse_fn_decl(&mut parser) {
            trace!("parsed function '{}'", declaration.name.name);
            declarations.push(declaration);
        }
    }

    let errors = parser.take_errors();
    debug!(
        "parsed package '{}': {} functions, {} syntax errors",
        package.name,
        declarations.len(),
        errors.len()
    );

    let file = File {
        package: Some(package),
        declarations,
        errors,
    };

    (file, true)
}
