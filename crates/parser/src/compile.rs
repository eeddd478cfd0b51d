//! The unified compilation pipeline: shape detection, parsing, validation,
//! and SQL emission behind one entry point.
//!
//! Callers pick a front end by document shape, not by importing a specific
//! parser: a document whose first non-whitespace character is `{` is
//! structured JSON, anything else is infix notation.

use dcsql_core::constraint::{Constraint, ValidationError};
use dcsql_core::sql::{self, EmitError, SqlOptions, TableBinding};
use derive_more::From;

use crate::infix::{parse_infix, SyntaxError};
use crate::structured::{parse_structured, StructuredError};

/// Which surface syntax a document uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocumentShape {
    /// The symbolic notation `¬(t.A = t'.A ∧ ...)`.
    Infix,
    /// One JSON object with a `predicates` array.
    Structured,
}

impl DocumentShape {
    /// Detect the shape of `input` from its first non-whitespace character.
    #[must_use]
    pub fn detect(input: &str) -> Self {
        if input.trim_start().starts_with('{') {
            Self::Structured
        } else {
            Self::Infix
        }
    }
}

/// Any failure while compiling a single constraint document.
///
/// All variants are terminal for the document being compiled; whether to
/// skip it and continue with the next document or abort the batch is the
/// caller's decision.
#[derive(Debug, From)]
pub enum CompileError {
    /// Infix text does not match the grammar.
    Syntax(SyntaxError),
    /// Structured document is malformed or uses unknown operator names or
    /// tuple indices.
    Structured(StructuredError),
    /// The parsed tree violates a model invariant.
    Validation(ValidationError),
    /// The constraint could not be rendered against the given binding.
    Emit(EmitError),
}

impl core::fmt::Display for CompileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Structured(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "validation failed: {e}"),
            Self::Emit(e) => write!(f, "emission failed: {e}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Structured(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Emit(e) => Some(e),
        }
    }
}

/// Parse one constraint document, selecting the front end by shape.
///
/// # Errors
///
/// Returns the front end's error for malformed input.
pub fn parse_constraint(input: &str) -> Result<Constraint, CompileError> {
    let shape = DocumentShape::detect(input);
    tracing::debug!(?shape, "parsing constraint document");
    match shape {
        DocumentShape::Infix => Ok(parse_infix(input)?),
        DocumentShape::Structured => Ok(parse_structured(input)?),
    }
}

/// Compile one constraint document to SQL: parse, validate, emit.
///
/// This is the whole pipeline; the result is a single statement whose
/// result rows are the violating row pairs. Identical inputs produce
/// byte-identical output.
///
/// # Errors
///
/// Returns a [`CompileError`] if any stage fails; a failing document yields
/// no SQL.
pub fn compile(
    input: &str,
    binding: &TableBinding,
    options: &SqlOptions,
) -> Result<String, CompileError> {
    let constraint = parse_constraint(input)?;
    dcsql_core::validate(&constraint)?;
    Ok(sql::emit(&constraint, binding, options)?)
}
