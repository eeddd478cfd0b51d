//! Front ends for the denial-constraint compiler.
//!
//! Two surface syntaxes are accepted, both producing the canonical
//! [`Constraint`](dcsql_core::Constraint) model from `dcsql_core`:
//!
//! - **Infix** ([`infix`]): the compact symbolic notation
//!   `¬(t.Role = t'.Role ∧ t.Hours > t'.Hours)`, parsed by a winnow grammar
//!   directly over the source text. The separate [`lexer`] is a spanned
//!   tokenizer for tooling such as syntax highlighting.
//! - **Structured** ([`structured`]): one JSON object per constraint,
//!   `{"type": "DenialConstraint", "predicates": [...]}`, with symbolic
//!   operator names (`EQUAL`, `LESS_EQUAL`, ...) and integer tuple indices.
//!
//! The [`compile`] module exposes the single entry point callers should
//! use: it selects the front end by document shape and runs the full
//! parse -> validate -> emit pipeline.

pub mod compile;
pub mod infix;
pub mod lexer;
pub mod structured;

pub use compile::{compile, parse_constraint, CompileError, DocumentShape};
pub use infix::{parse_infix, SyntaxError};
pub use lexer::{tokenize, tokenize_with_text, Token, TokenKind};
pub use structured::{parse_structured, ConstraintDoc, StructuredError};
