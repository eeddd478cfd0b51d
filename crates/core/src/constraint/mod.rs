//! The canonical denial-constraint model.
//!
//! Both front ends (infix and structured, in `dcsql_parser`) produce this
//! representation; the SQL emitter consumes it. The types are immutable value
//! objects: constructed once per input document, validated, emitted, dropped.

pub mod error;
pub mod types;
pub mod validate;

pub use error::{InvalidTupleIndex, UnknownOperator};
pub use types::{Constraint, Operator, Predicate, TupleRef};
pub use validate::{is_valid_identifier, ValidationError};
