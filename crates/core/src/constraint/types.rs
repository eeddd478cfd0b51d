use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};

use super::error::{InvalidTupleIndex, UnknownOperator};

/// Which row-instance of the self-join a column reference belongs to.
///
/// A denial constraint quantifies over an (ordered) pair of rows. `First`
/// is the unprimed tuple variable `t` of the infix notation (index `0` of
/// the structured notation) and renders as the join alias `t1`; `Second` is
/// the primed `t'` (index `1`) and renders as `t2`. This is a symbolic role,
/// never a literal row identity.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TupleRef {
    First,
    Second,
}

impl TupleRef {
    /// The join alias this tuple reference renders as in emitted SQL.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::First => "t1",
            Self::Second => "t2",
        }
    }

    /// Map a structured-notation tuple index to a reference.
    ///
    /// `0` maps to [`First`](Self::First) and `1` to [`Second`](Self::Second).
    ///
    /// # Errors
    ///
    /// Any index outside `{0, 1}` is rejected with [`InvalidTupleIndex`].
    pub const fn from_index(index: i64) -> core::result::Result<Self, InvalidTupleIndex> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            _ => Err(InvalidTupleIndex { index }),
        }
    }
}

impl Display for TupleRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.alias())
    }
}

/// The six comparison operators a denial-constraint predicate may use.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Operator {
    /// The SQL comparison symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }

    /// Map a structured-notation operator name to an operator.
    ///
    /// The mapping is total over the six recognised names and fails closed:
    /// there is no placeholder value for anything else.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownOperator`] for any name outside the six.
    pub fn from_name(name: &str) -> core::result::Result<Self, UnknownOperator> {
        match name {
            "EQUAL" => Ok(Self::Equal),
            "UNEQUAL" => Ok(Self::NotEqual),
            "LESS" => Ok(Self::Less),
            "LESS_EQUAL" => Ok(Self::LessOrEqual),
            "GREATER" => Ok(Self::Greater),
            "GREATER_EQUAL" => Ok(Self::GreaterOrEqual),
            _ => Err(UnknownOperator { name: name.into() }),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

/// One binary comparison between columns of the two joined row-instances.
///
/// Renders as the SQL fragment `<alias>.<column> <op> <alias>.<column>`,
/// e.g. `t1.Hours > t2.Hours`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub left: TupleRef,
    pub left_column: String,
    pub op: Operator,
    pub right: TupleRef,
    pub right_column: String,
}

impl Predicate {
    #[must_use]
    pub const fn new(
        left: TupleRef,
        left_column: String,
        op: Operator,
        right: TupleRef,
        right_column: String,
    ) -> Self {
        Self {
            left,
            left_column,
            op,
            right,
            right_column,
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}.{} {} {}.{}",
            self.left, self.left_column, self.op, self.right, self.right_column
        )
    }
}

/// An ordered conjunction of [`Predicate`]s.
///
/// Order is preserved so that emission is deterministic, even though the
/// conjunction is logically order-independent. The sequence may be empty
/// (the structured notation permits an empty predicate array); an empty
/// constraint can never be violated. The table binding is deliberately not
/// stored here -- it is supplied at emission time, so one parsed constraint
/// can be emitted against several bindings.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    predicates: Vec<Predicate>,
}

impl Constraint {
    #[must_use]
    pub const fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// The predicates in input order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl FromIterator<Predicate> for Constraint {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
