use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

/// Error rendering a constraint as SQL.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// The table binding contains the statement terminator `;`. The binding
    /// is substituted verbatim into the FROM clause, so this is the one
    /// character the emitter refuses.
    BindingContainsTerminator { binding: String },
}

impl Display for EmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::BindingContainsTerminator { binding } => {
                write!(f, "table binding {binding:?} contains ';'")
            }
        }
    }
}

impl core::error::Error for EmitError {}
