use std::fmt::Display;

use crate::ast::expressions::LiteralKind;

/// The type of a variable or expression. `Undefined` marks anything whose
/// type could not be worked out; the error has already been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Undefined,
    Integer,
    Float,
    String,
    Boolean,
}

impl VarType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, VarType::Integer | VarType::Float)
    }
}

impl From<LiteralKind> for VarType {
    fn from(kind: LiteralKind) -> Self {
        match kind {
            LiteralKind::Integer => VarType::Integer,
            LiteralKind::Float => VarType::Float,
            LiteralKind::String => VarType::String,
            LiteralKind::Boolean => VarType::Boolean,
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
