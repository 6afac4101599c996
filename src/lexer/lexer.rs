use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Match, Regex};

use crate::{Position, Span, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind, KEYWORDS};

#[derive(Debug)]
pub struct RegexPattern {
    pub kind: TokenKind,
    pub regex: Regex,
}

lazy_static! {
    /// One pattern per token kind, in priority order. Earlier entries win ties.
    pub static ref TOKEN_PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(TokenKind::Keyword, &format!(r"\b(?:{})\b", KEYWORDS.join("|"))),
        MK_PATTERN!(TokenKind::Comment, r"//[^\r\n]*|/\*"),
        MK_PATTERN!(TokenKind::Operator, r":=|==|!=|<=|>=|&&|\|\||=|\+\+|--|\+|-|\*|/|%|>|<|!"),
        MK_PATTERN!(TokenKind::Delimiter, r"[{}():;,]"),
        MK_PATTERN!(
            TokenKind::Literal,
            r#"[0-9]+[.exobEXOB]?[0-9]*|\b(?:true|false)\b|"[^"]*"|'\\?.'"#
        ),
        MK_PATTERN!(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*"),
        MK_PATTERN!(TokenKind::EndOfLine, r"[\r\n]"),
        MK_PATTERN!(TokenKind::Invalid, r"\S+?"),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }

    /// Runs every pattern from the cursor and keeps the match that starts first.
    fn next_match(&self) -> Option<(TokenKind, Match<'a>)> {
        let mut nearest: Option<(TokenKind, Match<'a>)> = None;

        for pattern in TOKEN_PATTERNS.iter() {
            let Some(found) = pattern.regex.find_at(self.source, self.pos) else {
                continue;
            };

            let closer = match nearest {
                Some((_, current)) => found.start() < current.start(),
                None => true,
            };

            if closer {
                nearest = Some((pattern.kind, found));
            }
        }

        nearest
    }

    fn skip_block_comment(&mut self) {
        match self.remainder().find("*/") {
            Some(offset) => self.pos += offset + 2,
            None => self.pos = self.source.len(),
        }
    }
}

/// Splits source text into tokens.
///
/// Comments are dropped, line endings are kept. Tokenizing stops quietly once
/// no pattern matches what is left of the input.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let Some((kind, found)) = lex.next_match() else {
            trace!("nothing left to match after offset {}", lex.pos);
            break;
        };

        lex.pos = found.end();

        if kind == TokenKind::Comment {
            if found.as_str().starts_with("/*") {
                lex.skip_block_comment();
            }
            continue;
        }

        let token = MK_TOKEN!(kind, found.as_str().to_string(), lex.span(found.start(), found.end()));
        trace!("{} {:?}", token.kind, token.value);
        lex.push(token);
    }

    debug!("tokenized {} tokens from {}", lex.tokens.len(), lex.file);
    lex.tokens
}
