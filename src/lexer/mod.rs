//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, operators and delimiters
//! - Token position tracking for error reporting
//! - Comment removal, while keeping line endings as tokens

pub mod lexer;
pub mod tokens;
