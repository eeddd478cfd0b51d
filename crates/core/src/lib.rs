//! Denial-constraint compilation for relational data.
//!
//! A *denial constraint* (DC) forbids any pair of rows in a relation from
//! jointly satisfying a conjunction of binary predicates. `dcsql_core` holds
//! the canonical, engine-independent representation of such a constraint and
//! turns it into a SQL query whose result set is exactly the set of violating
//! row pairs:
//!
//! ```text
//! SELECT t1.*, t2.* FROM <binding> t1, <binding> t2
//! WHERE t1.Role = t2.Role AND t1.Hours > t2.Hours AND t1.Bonus < t2.Bonus;
//! ```
//!
//! The pipeline is: surface text -> front end (see the `dcsql_parser` crate)
//! -> [`Constraint`] -> [`validate()`](constraint::validate::validate) ->
//! [`emit()`](sql::emit) -> SQL text. Every step is a pure function over
//! immutable values; nothing here reads files, opens connections, or prints.
//! Executing the emitted query and interpreting its row count as a violation
//! count is the caller's job.
//!
//! # Entry points
//!
//! - [`Constraint`] / [`Predicate`] / [`Operator`] / [`TupleRef`] -- the
//!   canonical model produced by both front ends.
//! - [`validate()`](constraint::validate::validate) -- all-or-nothing model
//!   invariant check, run after parsing and before emission.
//! - [`emit()`](sql::emit) -- render a validated constraint against a
//!   [`TableBinding`](sql::TableBinding) as a single SQL statement.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the model
//!   and error types.
//!
//! This crate is `no_std` compatible (requires `alloc`). The front ends live
//! in the separate `dcsql_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod constraint;
pub mod sql;

pub use constraint::validate::{validate, ValidationError};
pub use constraint::{Constraint, Operator, Predicate, TupleRef};
pub use sql::{emit, EmitError, SqlOptions, TableBinding};
