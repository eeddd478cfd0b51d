//! Serde-based parser for the structured denial-constraint notation.
//!
//! One constraint is one self-contained JSON object (batching and
//! line-splitting of a results file is the caller's concern):
//!
//! ```json
//! {
//!   "type": "DenialConstraint",
//!   "predicates": [
//!     {
//!       "type": "...",
//!       "column1": { "tableIdentifier": "hours", "columnIdentifier": "Role" },
//!       "index1": 0,
//!       "op": "EQUAL",
//!       "column2": { "tableIdentifier": "hours", "columnIdentifier": "Role" },
//!       "index2": 1
//!     }
//!   ]
//! }
//! ```
//!
//! The `type` fields are required by the schema but never dispatched on.
//! Operator names map through the total, fail-closed
//! [`Operator::from_name`] table; tuple indices through
//! [`TupleRef::from_index`]. The `tableIdentifier` of each column object is
//! accepted but not carried into the canonical model -- the table binding
//! is supplied separately at emission time.

use dcsql_core::constraint::{Constraint, InvalidTupleIndex, Operator, TupleRef, UnknownOperator};
use dcsql_core::Predicate;
use derive_more::From;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// The outer constraint document.
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintDoc {
    /// Document tag, conventionally `"DenialConstraint"`. Required but not
    /// interpreted.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// The predicates of the conjunction, in order. May be empty.
    pub predicates: Vec<PredicateDoc>,
}

/// One predicate of the conjunction.
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct PredicateDoc {
    /// Predicate tag. Required but not interpreted.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Column reference of the left operand.
    pub column1: ColumnDoc,
    /// Tuple index of the left operand: `0` or `1`.
    pub index1: i64,
    /// Symbolic operator name: one of `EQUAL`, `UNEQUAL`, `LESS`,
    /// `LESS_EQUAL`, `GREATER`, `GREATER_EQUAL`.
    pub op: String,
    /// Column reference of the right operand.
    pub column2: ColumnDoc,
    /// Tuple index of the right operand: `0` or `1`.
    pub index2: i64,
}

/// A column reference inside a predicate.
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDoc {
    /// The relation the column belongs to. Accepted for schema fidelity;
    /// the emitter binds tables separately.
    #[serde(rename = "tableIdentifier")]
    pub table_identifier: String,
    /// The column name.
    #[serde(rename = "columnIdentifier")]
    pub column_identifier: String,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Error parsing a structured constraint document.
#[derive(Debug, From)]
pub enum StructuredError {
    /// The document does not match the schema: missing fields, wrong types,
    /// or not JSON at all.
    Shape(serde_json::Error),
    /// An operator name outside the six recognised ones. No placeholder is
    /// ever substituted.
    #[from(ignore)]
    UnknownOperator {
        source: UnknownOperator,
        /// Zero-based index into the predicate array.
        position: usize,
    },
    /// A tuple index outside `{0, 1}`.
    #[from(ignore)]
    InvalidTupleIndex {
        source: InvalidTupleIndex,
        /// Zero-based index into the predicate array.
        position: usize,
    },
}

impl core::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "malformed constraint document: {e}"),
            Self::UnknownOperator { source, position } => {
                write!(f, "predicate {position}: {source}")
            }
            Self::InvalidTupleIndex { source, position } => {
                write!(f, "predicate {position}: {source}")
            }
        }
    }
}

impl std::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::UnknownOperator { source, .. } => Some(source),
            Self::InvalidTupleIndex { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse one structured constraint document into the canonical model.
///
/// Predicate order in the canonical [`Constraint`] matches array order. An
/// empty `predicates` array is valid and yields an empty constraint.
///
/// # Errors
///
/// Returns [`StructuredError::Shape`] for schema mismatches,
/// [`StructuredError::UnknownOperator`] for operator names outside the
/// fixed six, and [`StructuredError::InvalidTupleIndex`] for tuple indices
/// outside `{0, 1}`.
pub fn parse_structured(input: &str) -> Result<Constraint, StructuredError> {
    let doc: ConstraintDoc = serde_json::from_str(input)?;
    let constraint = lower(&doc)?;
    tracing::debug!(
        predicates = constraint.len(),
        "parsed structured constraint"
    );
    Ok(constraint)
}

/// Lower a deserialized document into the canonical model, mapping operator
/// names and tuple indices strictly.
fn lower(doc: &ConstraintDoc) -> Result<Constraint, StructuredError> {
    doc.predicates
        .iter()
        .enumerate()
        .map(|(position, p)| {
            let op = Operator::from_name(&p.op)
                .map_err(|source| StructuredError::UnknownOperator { source, position })?;
            let left = TupleRef::from_index(p.index1)
                .map_err(|source| StructuredError::InvalidTupleIndex { source, position })?;
            let right = TupleRef::from_index(p.index2)
                .map_err(|source| StructuredError::InvalidTupleIndex { source, position })?;
            Ok(Predicate::new(
                left,
                p.column1.column_identifier.clone(),
                op,
                right,
                p.column2.column_identifier.clone(),
            ))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate_json(op: &str, index1: i64, index2: i64, column: &str) -> String {
        format!(
            r#"{{
                "type": "de.metanome.algorithm_integration.PredicateVariable",
                "column1": {{ "tableIdentifier": "hours", "columnIdentifier": "{column}" }},
                "index1": {index1},
                "op": "{op}",
                "column2": {{ "tableIdentifier": "hours", "columnIdentifier": "{column}" }},
                "index2": {index2}
            }}"#
        )
    }

    fn doc_json(predicates: &[String]) -> String {
        format!(
            r#"{{ "type": "DenialConstraint", "predicates": [{}] }}"#,
            predicates.join(",")
        )
    }

    // -----------------------------------------------------------------------
    // Happy-path tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_predicate() {
        let input = doc_json(&[predicate_json("EQUAL", 0, 1, "Role")]);
        let constraint = parse_structured(&input).expect("should parse");
        assert_eq!(
            constraint.predicates(),
            &[Predicate::new(
                TupleRef::First,
                "Role".into(),
                Operator::Equal,
                TupleRef::Second,
                "Role".into(),
            )]
        );
    }

    #[test]
    fn test_empty_predicate_array() {
        let constraint =
            parse_structured(r#"{ "type": "DenialConstraint", "predicates": [] }"#)
                .expect("should parse");
        assert!(constraint.is_empty());
    }

    #[test]
    fn test_predicate_order_matches_array_order() {
        let input = doc_json(&[
            predicate_json("GREATER", 0, 1, "Hours"),
            predicate_json("EQUAL", 0, 1, "Role"),
        ]);
        let constraint = parse_structured(&input).expect("should parse");
        assert_eq!(constraint.predicates()[0].left_column, "Hours");
        assert_eq!(constraint.predicates()[1].left_column, "Role");
    }

    #[test]
    fn test_all_six_operator_names() {
        let cases = [
            ("EQUAL", Operator::Equal),
            ("UNEQUAL", Operator::NotEqual),
            ("LESS", Operator::Less),
            ("LESS_EQUAL", Operator::LessOrEqual),
            ("GREATER", Operator::Greater),
            ("GREATER_EQUAL", Operator::GreaterOrEqual),
        ];
        for (name, op) in cases {
            let input = doc_json(&[predicate_json(name, 0, 1, "A")]);
            let constraint = parse_structured(&input).expect("should parse");
            assert_eq!(constraint.predicates()[0].op, op, "operator {name}");
        }
    }

    #[test]
    fn test_index_mapping() {
        let input = doc_json(&[predicate_json("EQUAL", 1, 0, "A")]);
        let constraint = parse_structured(&input).expect("should parse");
        let p = &constraint.predicates()[0];
        assert_eq!(p.left, TupleRef::Second);
        assert_eq!(p.right, TupleRef::First);
    }

    #[test]
    fn test_outer_type_value_is_not_dispatched_on() {
        // Only the field's presence matters, not its value.
        let input = format!(
            r#"{{ "type": "SomethingElse", "predicates": [{}] }}"#,
            predicate_json("EQUAL", 0, 1, "A")
        );
        parse_structured(&input).expect("should parse");
    }

    // -----------------------------------------------------------------------
    // Error tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_unknown_operator_fails_closed() {
        let input = doc_json(&[predicate_json("NOT_EQUAL", 0, 1, "A")]);
        let err = parse_structured(&input).expect_err("should fail");
        match err {
            StructuredError::UnknownOperator { source, position } => {
                assert_eq!(source.name, "NOT_EQUAL");
                assert_eq!(position, 0);
            }
            other => panic!("expected UnknownOperator, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_operator_reports_position() {
        let input = doc_json(&[
            predicate_json("EQUAL", 0, 1, "A"),
            predicate_json("BOGUS", 0, 1, "B"),
        ]);
        let err = parse_structured(&input).expect_err("should fail");
        match err {
            StructuredError::UnknownOperator { position, .. } => assert_eq!(position, 1),
            other => panic!("expected UnknownOperator, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_indices_fail() {
        for (index1, index2) in [(2, 1), (0, -1), (7, 7)] {
            let input = doc_json(&[predicate_json("EQUAL", index1, index2, "A")]);
            let err = parse_structured(&input).expect_err("should fail");
            assert!(
                matches!(err, StructuredError::InvalidTupleIndex { .. }),
                "indices ({index1}, {index2}) gave {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_is_shape_error() {
        let input = r#"{ "type": "DenialConstraint" }"#;
        let err = parse_structured(input).expect_err("should fail");
        assert!(matches!(err, StructuredError::Shape(_)), "{err:?}");
    }

    #[test]
    fn test_wrong_field_type_is_shape_error() {
        let input = r#"{ "type": "DenialConstraint", "predicates": "nope" }"#;
        let err = parse_structured(input).expect_err("should fail");
        assert!(matches!(err, StructuredError::Shape(_)), "{err:?}");
    }

    #[test]
    fn test_not_json_is_shape_error() {
        let err = parse_structured("¬(t.A = t'.A)").expect_err("should fail");
        assert!(matches!(err, StructuredError::Shape(_)), "{err:?}");
    }

    #[test]
    fn test_error_display_names_predicate_position() {
        let input = doc_json(&[predicate_json("MAYBE_EQUAL", 0, 1, "A")]);
        let err = parse_structured(&input).expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("predicate 0"), "{msg}");
        assert!(msg.contains("MAYBE_EQUAL"), "{msg}");
    }
}
