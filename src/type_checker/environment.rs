use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorImpl};

use super::types::VarType;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub var_type: VarType,
}

/// Variables defined directly in one block.
#[derive(Debug)]
pub struct Environment {
    pub variable_lookup: HashMap<String, VarType>,
    pub depth: usize,
}

impl Environment {
    pub fn new(depth: usize) -> Self {
        Environment {
            variable_lookup: HashMap::new(),
            depth,
        }
    }

    pub fn declare_variable(&mut self, variable_name: &str, variable_type: VarType) -> Result<(), Error> {
        if self.variable_lookup.contains_key(variable_name) {
            Err(Error::unpositioned(ErrorImpl::AlreadyDefined {
                variable: variable_name.to_string(),
            }))
        } else {
            self.variable_lookup.insert(variable_name.to_string(), variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<VarType> {
        self.variable_lookup.get(variable_name).copied()
    }
}
