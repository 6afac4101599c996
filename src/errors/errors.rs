use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The broad classes every diagnostic falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidLiteral,
    UnexpectedToken,
    AssignmentError,
    TypeConflict,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Builds an error that is not tied to a source location.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ErrorImpl::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ErrorImpl::AlreadyDefined { .. }
            | ErrorImpl::NotDefined { .. }
            | ErrorImpl::AssignmentMismatch { .. } => ErrorKind::AssignmentError,
            ErrorImpl::MismatchedTypes { .. } | ErrorImpl::NonBooleanCondition { .. } => {
                ErrorKind::TypeConflict
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::AlreadyDefined { .. } => "AlreadyDefined",
            ErrorImpl::NotDefined { .. } => "NotDefined",
            ErrorImpl::AssignmentMismatch { .. } => "AssignmentMismatch",
            ErrorImpl::MismatchedTypes { .. } => "MismatchedTypes",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } if found == END_OF_FILE => {
                ErrorTip::Suggestion(String::from("Is a closing `}` or a terminator missing?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::TypeMismatch { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected a token of type {}", expected))
            }
            ErrorImpl::InvalidLiteral { token } => ErrorTip::Suggestion(format!(
                "`{}` is not an integer, float, boolean or quoted literal",
                token
            )),
            ErrorImpl::AlreadyDefined { variable } => ErrorTip::Suggestion(format!(
                "Use `{} = ...` to assign to the existing variable",
                variable
            )),
            ErrorImpl::NotDefined { variable } => ErrorTip::Suggestion(format!(
                "Define `{}` with `:=` or `var` before using it",
                variable
            )),
            ErrorImpl::AssignmentMismatch { expected, .. } => ErrorTip::Suggestion(format!(
                "The variable keeps the type {} it was defined with",
                expected
            )),
            ErrorImpl::MismatchedTypes { .. } => ErrorTip::Suggestion(String::from(
                "Only integers and floats can be mixed in one expression",
            )),
            ErrorImpl::NonBooleanCondition { .. } => {
                ErrorTip::Suggestion(String::from("Compare the value to get a boolean"))
            }
        }
    }
}

/// Replacement text used when the offending token is a line ending or the input ran out.
pub const END_OF_FILE: &str = "end of file";

/// Renders a found token for an error message.
pub fn describe_found(text: &str) -> String {
    text.replace(['\n', '\r'], END_OF_FILE)
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{expected} expected, got '{found}' of type '{kind}'")]
    TypeMismatch {
        expected: String,
        found: String,
        kind: String,
    },
    #[error("Unexpected literal '{token}'")]
    InvalidLiteral { token: String },
    #[error("{expected} expected, got '{found}'")]
    UnexpectedToken { expected: String, found: String },
    #[error("Variable '{variable}' is already defined")]
    AlreadyDefined { variable: String },
    #[error("Variable '{variable}' is not defined")]
    NotDefined { variable: String },
    #[error("Cannot use type {received} in variable '{variable}' of type {expected}")]
    AssignmentMismatch {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("Mismatched types: {left} and {right}")]
    MismatchedTypes { left: String, right: String },
    #[error("Non-bool type {received} used as condition")]
    NonBooleanCondition { received: String },
}

/// Everything the parser and the analyzer complained about.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub syntax: Vec<Error>,
    pub semantic: Vec<Error>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.syntax.is_empty() && self.semantic.is_empty()
    }
}

/// One tab-indented line per error.
pub fn format_errors(errors: &[Error]) -> String {
    errors.iter().map(|error| format!("\t{}\n", error)).collect()
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.syntax.is_empty() {
            write!(f, "Syntax errors:\n{}", format_errors(&self.syntax))?;
        }
        if !self.semantic.is_empty() {
            write!(f, "Semantic errors:\n{}", format_errors(&self.semantic))?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
