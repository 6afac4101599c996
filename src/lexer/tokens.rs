use std::fmt::Display;

use crate::Span;

/// Reserved words, matched only on word boundaries.
pub const KEYWORDS: [&str; 12] = [
    "package", "func", "switch", "case", "default", "var", "for", "break", "continue",
    "return", "if", "else",
];

/// Token classes, declared in the priority order the lexer tries them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Comment,
    Operator,
    Delimiter,
    Literal,
    Identifier,
    EndOfLine,
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfLine => write!(f, "EOL"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value.escape_default())
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// True for `;` and line endings.
    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::EndOfLine || (self.kind == TokenKind::Delimiter && self.value == ";")
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenKind::Literal, TokenKind::Identifier, TokenKind::Invalid]) {
            println!("{} ({})", self.kind, self.value);
        } else if self.kind == TokenKind::EndOfLine {
            println!("{} ()", self.kind);
        } else {
            println!("{} `{}`", self.kind, self.value);
        }
    }
}
