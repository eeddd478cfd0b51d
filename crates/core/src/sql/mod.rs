//! SQL emission for validated constraints.
//!
//! Given a [`Constraint`] and a [`TableBinding`], [`emit`] renders a single
//! self-join statement whose result rows are exactly the violating row
//! pairs. Emission is a pure function: identical inputs produce
//! byte-identical text, and no engine is contacted.

pub mod error;

pub use error::EmitError;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use crate::constraint::Constraint;

/// What the two join aliases refer to.
///
/// The binding is supplied by the caller at emission time; it is never
/// parsed out of the constraint text. Its text is substituted into the FROM
/// clause verbatim -- the emitter performs no escaping beyond rejecting the
/// statement terminator (see [`EmitError::BindingContainsTerminator`]).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBinding {
    /// A relation already registered with the execution engine.
    Relation(String),
    /// A CSV file to be scanned by the engine's table-reading facility.
    /// Renders as `read_csv_auto('<path>')`.
    CsvFile(String),
}

impl TableBinding {
    /// The raw caller-supplied text (relation name or file path).
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Relation(name) => name,
            Self::CsvFile(path) => path,
        }
    }

    /// The FROM-clause text both aliases are bound to.
    #[must_use]
    pub fn from_clause(&self) -> String {
        match self {
            Self::Relation(name) => name.clone(),
            Self::CsvFile(path) => format!("read_csv_auto('{path}')"),
        }
    }
}

/// Emission choices that change violation semantics.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SqlOptions {
    /// Whether the self-join may pair a row with itself.
    ///
    /// `true` (the default) emits an unrestricted self-join, matching the
    /// system this one reimplements: a row satisfying a reflexive predicate
    /// such as `t1.A = t2.A` counts as a violation against itself. `false`
    /// appends `t1.rowid <> t2.rowid`, restricting violations to distinct
    /// row pairs; `rowid` is the row-identity pseudo-column of engines such
    /// as DuckDB and SQLite, so this form is engine-dependent.
    pub include_reflexive_pairs: bool,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            include_reflexive_pairs: true,
        }
    }
}

/// Render `constraint` against `binding` as one SQL statement.
///
/// An empty constraint can never be violated; it emits a query guaranteed
/// to return zero rows (`SELECT 1 FROM <binding> WHERE 1=0;`). Otherwise
/// the statement is a self-join selecting both row-instances, with the
/// predicates conjoined in input order:
///
/// ```text
/// SELECT t1.*, t2.* FROM hours t1, hours t2
/// WHERE t1.Role = t2.Role AND t1.Hours > t2.Hours;
/// ```
///
/// # Errors
///
/// Returns [`EmitError::BindingContainsTerminator`] when the binding's raw
/// text contains `;`.
pub fn emit(
    constraint: &Constraint,
    binding: &TableBinding,
    options: &SqlOptions,
) -> Result<String, EmitError> {
    if binding.raw().contains(';') {
        return Err(EmitError::BindingContainsTerminator {
            binding: binding.raw().into(),
        });
    }

    let from = binding.from_clause();
    tracing::debug!(predicates = constraint.len(), from = %from, "emitting SQL");

    if constraint.is_empty() {
        return Ok(format!("SELECT 1 FROM {from} WHERE 1=0;"));
    }

    let mut sql = format!("SELECT t1.*, t2.* FROM {from} t1, {from} t2 WHERE ");
    for (i, predicate) in constraint.predicates().iter().enumerate() {
        if i > 0 {
            sql.push_str(" AND ");
        }
        let _ = write!(sql, "{predicate}");
    }
    if !options.include_reflexive_pairs {
        sql.push_str(" AND t1.rowid <> t2.rowid");
    }
    sql.push(';');
    Ok(sql)
}
