//! Winnow-based parser for the infix denial-constraint notation.
//!
//! Grammar:
//! ```text
//! start       = "¬" "(" conjunction ")"
//! conjunction = predicate ("∧" predicate)*
//! predicate   = var "." column OP var "." column
//! var         = "t" | "t'"
//! column      = IDENT
//! OP          = "=" | "!=" | "<=" | ">=" | "<" | ">"
//! ```
//!
//! Whitespace is insignificant between tokens. The unprimed variable `t`
//! maps to [`TupleRef::First`], the primed `t'` to [`TupleRef::Second`].
//! Compound operators are tried before their single-character prefixes.

use dcsql_core::constraint::{Constraint, Operator, Predicate, TupleRef};
use winnow::combinator::{alt, opt, separated};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "syntax error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse an infix denial-constraint string into the canonical model.
///
/// The table binding is not part of the notation; the caller supplies it at
/// emission time.
///
/// # Errors
///
/// Returns a [`SyntaxError`] with line/column information when the input
/// does not conform to the grammar.
pub fn parse_infix(input: &str) -> Result<Constraint, SyntaxError> {
    let original = input;
    let mut stream: &str = input;
    match constraint_parser.parse_next(&mut stream) {
        Ok(constraint) => {
            tracing::debug!(predicates = constraint.len(), "parsed infix constraint");
            Ok(constraint)
        }
        Err(e) => {
            // Compute how many bytes were consumed before the error.
            let remaining_len = stream.len();
            let consumed = original.len().saturating_sub(remaining_len);
            let (line, column) = offset_to_line_col(original, consumed);
            Err(SyntaxError {
                message: e.to_string(),
                line,
                column,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional whitespace between tokens.
fn opt_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

/// Parse a column identifier: a letter or underscore followed by letters,
/// digits, or underscores.
fn identifier(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .map(str::to_string)
        .parse_next(input)
}

/// `"t"` -- first tuple variable, `"t'"` -- second.
fn tuple_var(input: &mut &str) -> ModalResult<TupleRef> {
    literal("t").parse_next(input)?;
    let prime = opt(literal("'")).parse_next(input)?;
    Ok(if prime.is_some() {
        TupleRef::Second
    } else {
        TupleRef::First
    })
}

/// A comparison operator. Compound operators must come before their
/// single-character prefixes so `<=` is not read as `<` followed by `=`.
fn operator(input: &mut &str) -> ModalResult<Operator> {
    alt((
        literal("!=").value(Operator::NotEqual),
        literal("<=").value(Operator::LessOrEqual),
        literal(">=").value(Operator::GreaterOrEqual),
        literal("=").value(Operator::Equal),
        literal("<").value(Operator::Less),
        literal(">").value(Operator::Greater),
    ))
    .parse_next(input)
}

// ---------------------------------------------------------------------------
// Predicate and conjunction parsers
// ---------------------------------------------------------------------------

/// `var "." column OP var "." column`
///
/// Whitespace may appear around the dot like between any other tokens; only
/// the prime is part of the `t'` terminal itself.
fn predicate(input: &mut &str) -> ModalResult<Predicate> {
    let left = tuple_var.parse_next(input)?;
    opt_ws.parse_next(input)?;
    literal(".").parse_next(input)?;
    opt_ws.parse_next(input)?;
    let left_column = identifier.parse_next(input)?;
    opt_ws.parse_next(input)?;
    let op = operator.parse_next(input)?;
    opt_ws.parse_next(input)?;
    let right = tuple_var.parse_next(input)?;
    opt_ws.parse_next(input)?;
    literal(".").parse_next(input)?;
    opt_ws.parse_next(input)?;
    let right_column = identifier.parse_next(input)?;
    Ok(Predicate::new(left, left_column, op, right, right_column))
}

/// The `∧` between predicates, with surrounding whitespace.
fn conjunction_sep(input: &mut &str) -> ModalResult<()> {
    opt_ws.parse_next(input)?;
    literal("∧").parse_next(input)?;
    opt_ws.parse_next(input)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Top-level parser
// ---------------------------------------------------------------------------

/// `"¬" "(" predicate ("∧" predicate)* ")"` followed by end-of-input.
///
/// The infix grammar requires at least one predicate; only the structured
/// notation can express an empty constraint.
fn constraint_parser(input: &mut &str) -> ModalResult<Constraint> {
    opt_ws.parse_next(input)?;
    literal("¬").parse_next(input)?;
    opt_ws.parse_next(input)?;
    literal("(").parse_next(input)?;
    opt_ws.parse_next(input)?;
    let predicates: Vec<Predicate> =
        separated(1.., predicate, conjunction_sep).parse_next(input)?;
    opt_ws.parse_next(input)?;
    literal(")").parse_next(input)?;
    opt_ws.parse_next(input)?;

    // Verify we are at end-of-input.
    if !input.is_empty() {
        // Return a backtrack error so the caller sees remaining input.
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }

    Ok(Constraint::new(predicates))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
