//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a lexer pattern for one token kind
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Literal, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer pattern pairing a token kind with the regex that recognises it.
///
/// The regex is compiled immediately, so this belongs inside a `lazy_static!` block.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Delimiter, r"[{}():;,]")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:expr) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new($regex).unwrap(),
        }
    };
}
