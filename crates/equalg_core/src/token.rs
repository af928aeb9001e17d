//! Token model produced by the lexer and consumed by the parser.

use std::fmt;

/// The kind of a [`Token`], parameterized over the algebra's element type so
/// numeric literals carry an already-constructed value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind<E> {
    OpenParen,
    CloseParen,
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Power,
    /// The binary `min` operator.
    Min,
    /// The binary `max` operator.
    Max,
    Comma,
    /// A recognized function spelling, e.g. `sin`.
    FunctionName(String),
    /// An indexed input slot reference, `$N`.
    Index(usize),
    /// A literal, already constructed by the algebra.
    Numeric(E),
}

/// One lexed token: a kind plus the character offset it started at.
///
/// Tokens are immutable once created; they live only for the duration of a
/// parse and are discarded once the procedure tree is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<E> {
    pub kind: TokenKind<E>,
    /// Character offset of the token's first character in the source string.
    pub start: usize,
}

impl<E> Token<E> {
    pub fn new(kind: TokenKind<E>, start: usize) -> Self {
        Self { kind, start }
    }
}

impl<E: fmt::Debug> fmt::Display for TokenKind<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        match self {
            OpenParen => write!(f, "("),
            CloseParen => write!(f, ")"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Times => write!(f, "*"),
            Divide => write!(f, "/"),
            Mod => write!(f, "%"),
            Power => write!(f, "^"),
            Min => write!(f, "min"),
            Max => write!(f, "max"),
            Comma => write!(f, ","),
            FunctionName(name) => write!(f, "{name}"),
            Index(n) => write!(f, "${n}"),
            Numeric(value) => write!(f, "{value:?}"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Token<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_source_spelling() {
        let cases: Vec<(TokenKind<f64>, &str)> = vec![
            (TokenKind::OpenParen, "("),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Times, "*"),
            (TokenKind::Divide, "/"),
            (TokenKind::Mod, "%"),
            (TokenKind::Power, "^"),
            (TokenKind::Min, "min"),
            (TokenKind::Max, "max"),
            (TokenKind::Comma, ","),
            (TokenKind::FunctionName("sinh".into()), "sinh"),
            (TokenKind::Index(12), "$12"),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.to_string(), expected);
        }
    }

    #[test]
    fn numeric_displays_payload() {
        let kind: TokenKind<f64> = TokenKind::Numeric(1.5);
        assert_eq!(kind.to_string(), "1.5");
    }
}
