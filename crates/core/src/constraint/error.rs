use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

/// A structured-notation operator name outside the six recognised ones.
///
/// The legacy system silently substituted a `"???"` placeholder here; this
/// implementation fails instead.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator {
    /// The operator name as it appeared in the input.
    pub name: String,
}

impl Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "unknown operator name {:?}", self.name)
    }
}

impl core::error::Error for UnknownOperator {}

/// A structured-notation tuple index outside `{0, 1}`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidTupleIndex {
    /// The index as it appeared in the input.
    pub index: i64,
}

impl Display for InvalidTupleIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "tuple index {} is outside {{0, 1}}", self.index)
    }
}

impl core::error::Error for InvalidTupleIndex {}
