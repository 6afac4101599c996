//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with optional source position information
//! - Specific error variants for the parsing and analysis phases
//! - The combined diagnostics report returned when a pipeline run fails

pub mod errors;
