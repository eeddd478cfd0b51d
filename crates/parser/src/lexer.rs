//! Logos-based lexer for the infix denial-constraint notation.
//!
//! The notation wraps a conjunction of binary predicates in a negation:
//! `¬(...)`. Predicates compare a column of the unprimed tuple variable `t`
//! with a column of the primed `t'` using one of six comparison operators.
//!
//! This is a standalone tokenization surface for tooling (syntax
//! highlighting, editor integration): every token carries its byte span and
//! whitespace is emitted rather than discarded. The grammar itself
//! ([`infix`](crate::infix)) parses the source text directly and does not go
//! through this lexer.
//!
//! # Example input
//!
//! ```text
//! ¬(t.Role = t'.Role ∧ t.Hours > t'.Hours ∧ t.Bonus < t'.Bonus)
//! ```

use core::ops::Range;

/// All token kinds produced by the infix lexer.
#[derive(::logos::Logos, Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// The negation sign `¬` opening a constraint.
    #[token("¬")]
    Not,

    /// The conjunction sign `∧` between predicates.
    #[token("∧")]
    And,

    /// Opening parenthesis `(`.
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis `)`.
    #[token(")")]
    ParenClose,

    /// The dot `.` between a tuple variable and a column name.
    #[token(".")]
    Dot,

    /// The prime mark `'` turning `t` into the second tuple variable.
    #[token("'")]
    Prime,

    /// Comparison `=`.
    #[token("=")]
    Equal,

    /// Comparison `!=`.
    #[token("!=")]
    NotEqual,

    /// Comparison `<`. Longest-match gives [`LessEqual`](Self::LessEqual)
    /// priority when the input is `<=`.
    #[token("<")]
    Less,

    /// Comparison `<=`.
    #[token("<=")]
    LessEqual,

    /// Comparison `>`.
    #[token(">")]
    Greater,

    /// Comparison `>=`.
    #[token(">=")]
    GreaterEqual,

    /// An identifier: starts with a letter or underscore, followed by
    /// letters, digits, or underscores. Covers both column names and the
    /// tuple variable `t`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// Spaces, tabs, and newlines. Emitted so the tokenizer can be used for
    /// syntax highlighting where whitespace positioning matters.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    /// Construct a new [`Token`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all valid tokens.
///
/// Tokens that the lexer cannot recognise are silently skipped.
/// Use [`tokenize_with_text`] if you also need the source slice for each token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}

/// Tokenize `input` and return tokens paired with their source text slices.
///
/// Tokens that the lexer cannot recognise are silently skipped.
#[must_use]
pub fn tokenize_with_text(input: &str) -> Vec<(Token, &str)> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|kind| {
                let text = &input[span.clone()];
                (Token { kind, span }, text)
            })
        })
        .collect()
}
