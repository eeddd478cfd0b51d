//! Model invariant checks, run after parsing and before emission.
//!
//! The closed enums of the model already discharge two of the invariants
//! statically: a [`TupleRef`](super::TupleRef) is always `First` or `Second`
//! and an [`Operator`](super::Operator) is always one of the six comparison
//! operators. What remains is the identifier grammar for column names, which
//! both front ends accept as free-form strings.

use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

use super::types::Constraint;

/// Which side of a predicate a column name came from.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A well-formed constraint tree that violates a model invariant.
///
/// Validation is all-or-nothing; the error names the first offending
/// predicate by its zero-based position in the conjunction.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A column name is empty or does not match `[A-Za-z_][A-Za-z0-9_]*`.
    InvalidColumnName {
        position: usize,
        side: Side,
        column: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidColumnName {
                position,
                side,
                column,
            } => write!(
                f,
                "predicate {position}: {side} column name {column:?} is not a valid identifier"
            ),
        }
    }
}

impl core::error::Error for ValidationError {}

/// Whether `name` matches the identifier grammar: one letter or underscore,
/// followed by letters, digits, or underscores.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check every predicate of `constraint` against the model invariants.
///
/// An empty constraint is trivially valid.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first offending predicate.
pub fn validate(constraint: &Constraint) -> core::result::Result<(), ValidationError> {
    tracing::debug!(predicates = constraint.len(), "validating constraint");
    for (position, predicate) in constraint.predicates().iter().enumerate() {
        for (side, column) in [
            (Side::Left, &predicate.left_column),
            (Side::Right, &predicate.right_column),
        ] {
            if !is_valid_identifier(column) {
                tracing::debug!(position, %side, column = %column, "invalid column name");
                return Err(ValidationError::InvalidColumnName {
                    position,
                    side,
                    column: column.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::types::{Operator, Predicate, TupleRef};

    fn pred(left_column: &str, right_column: &str) -> Predicate {
        Predicate::new(
            TupleRef::First,
            left_column.into(),
            Operator::Equal,
            TupleRef::Second,
            right_column.into(),
        )
    }

    #[test]
    fn test_identifier_grammar() {
        for ok in ["Role", "bonus_2", "_hidden", "x"] {
            assert!(is_valid_identifier(ok), "{ok} should be valid");
        }
        for bad in ["", "2fast", "em-dash", "a b", "naïve"] {
            assert!(!is_valid_identifier(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_valid_constraint_passes() {
        let constraint = Constraint::new(vec![pred("Role", "Role"), pred("Hours", "Hours")]);
        assert_eq!(validate(&constraint), Ok(()));
    }

    #[test]
    fn test_empty_constraint_is_valid() {
        assert_eq!(validate(&Constraint::default()), Ok(()));
    }

    #[test]
    fn test_first_offender_is_reported() {
        let constraint = Constraint::new(vec![
            pred("Role", "Role"),
            pred("", "Hours"),
            pred("9bad", "Hours"),
        ]);
        assert_eq!(
            validate(&constraint),
            Err(ValidationError::InvalidColumnName {
                position: 1,
                side: Side::Left,
                column: String::new(),
            })
        );
    }

    #[test]
    fn test_right_side_is_checked() {
        let constraint = Constraint::new(vec![pred("Role", "Ro le")]);
        assert_eq!(
            validate(&constraint),
            Err(ValidationError::InvalidColumnName {
                position: 0,
                side: Side::Right,
                column: "Ro le".into(),
            })
        );
    }

    #[test]
    fn test_error_display_names_position() {
        let err = ValidationError::InvalidColumnName {
            position: 3,
            side: Side::Left,
            column: "bad name".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("predicate 3"), "{msg}");
        assert!(msg.contains("left"), "{msg}");
    }
}
