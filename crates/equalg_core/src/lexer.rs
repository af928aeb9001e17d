//! Character-level lexer.
//!
//! Walks the source left to right with an explicit cursor, emitting one token
//! per lexeme. Literals in the algebra's own notation (plain numerals,
//! `[...]` multi-dimensional text, `{...}` multi-component text) are only
//! delimited here; the accumulated text is handed to
//! [`Algebra::element_from_str`] to produce the element value. The first
//! error terminates the pass.

use crate::error::EquationError;
use crate::token::{Token, TokenKind};
use crate::traits::Algebra;

/// Fixed candidate list for keyword matching, longest-match-first so that
/// e.g. `sinch` is never claimed by `sin`. The order is load-bearing.
const FUNCTION_NAMES: [&str; 26] = [
    "sinchpi", "sincpi", "sinch", "acosh", "asinh", "atanh", "tmin", "tmax", "acos", "asin",
    "atan", "cosh", "sinh", "tanh", "cbrt", "sqrt", "rand", "sinc", "zero", "min", "max", "cos",
    "sin", "tan", "exp", "log",
];

/// Tokenizes `source` against `algebra`.
///
/// On error the partially built token sequence is discarded; lex errors carry
/// the character offset they were detected at.
pub fn lex<A: Algebra>(
    algebra: &A,
    source: &str,
) -> Result<Vec<Token<A::Element>>, EquationError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens: Vec<Token<A::Element>> = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        let start = i;
        let c = chars[i];
        match c {
            _ if c.is_whitespace() => {
                i += 1;
            }
            '(' => {
                tokens.push(Token::new(TokenKind::OpenParen, start));
                i += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::CloseParen, start));
                i += 1;
            }
            '+' => {
                tokens.push(Token::new(TokenKind::Plus, start));
                i += 1;
            }
            '-' => {
                tokens.push(Token::new(TokenKind::Minus, start));
                i += 1;
            }
            '*' => {
                tokens.push(Token::new(TokenKind::Times, start));
                i += 1;
            }
            '/' => {
                tokens.push(Token::new(TokenKind::Divide, start));
                i += 1;
            }
            '%' => {
                tokens.push(Token::new(TokenKind::Mod, start));
                i += 1;
            }
            '^' => {
                tokens.push(Token::new(TokenKind::Power, start));
                i += 1;
            }
            ',' => {
                tokens.push(Token::new(TokenKind::Comma, start));
                i += 1;
            }
            '$' => {
                i += 1;
                let digit_start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == digit_start {
                    return Err(lex_error(
                        digit_start,
                        "`$` sign should be followed by one or more digits",
                    ));
                }
                let digits: String = chars[digit_start..i].iter().collect();
                let number = digits
                    .parse::<usize>()
                    .map_err(|_| lex_error(digit_start, "input slot index out of range"))?;
                tokens.push(Token::new(TokenKind::Index(number), start));
            }
            '[' => {
                // Bracket-delimited multi-dimensional literal. Only balance
                // is checked here; the inner grammar belongs to the algebra.
                let mut level = 0i64;
                let mut text = String::new();
                loop {
                    if i >= chars.len() {
                        return Err(lex_error(start, "unterminated multidim numeric type"));
                    }
                    let c = chars[i];
                    text.push(c);
                    if c == '[' {
                        level += 1;
                    } else if c == ']' {
                        level -= 1;
                    }
                    i += 1;
                    if level == 0 {
                        break;
                    }
                }
                let value = construct(algebra, start, &text)?;
                tokens.push(Token::new(TokenKind::Numeric(value), start));
            }
            '{' => {
                // Brace-delimited multi-component literal, single level.
                let mut text = String::new();
                loop {
                    if i >= chars.len() {
                        return Err(lex_error(start, "unterminated multicomponent numeric type"));
                    }
                    let c = chars[i];
                    text.push(c);
                    i += 1;
                    if c == '}' {
                        break;
                    }
                }
                let value = construct(algebra, start, &text)?;
                tokens.push(Token::new(TokenKind::Numeric(value), start));
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let mut text = String::new();
                let mut seen_dot = false;
                let mut seen_exp = false;
                while i < chars.len() {
                    let c = chars[i];
                    if c.is_ascii_digit() {
                        text.push(c);
                    } else if c == '.' && !seen_dot {
                        seen_dot = true;
                        text.push(c);
                    } else if c == 'e' && !seen_exp {
                        seen_exp = true;
                        text.push(c);
                    } else if (c == '+' || c == '-') && text.ends_with('e') {
                        text.push(c);
                    } else {
                        // Terminator; leave the cursor on it for the outer
                        // loop to re-examine.
                        break;
                    }
                    i += 1;
                }
                let value = construct(algebra, start, &text)?;
                tokens.push(Token::new(TokenKind::Numeric(value), start));
            }
            'E' => {
                let consts = algebra
                    .constants()
                    .ok_or_else(|| lex_error(start, "E not defined for given algebra"))?;
                tokens.push(Token::new(TokenKind::Numeric(consts.e()), start));
                i += 1;
            }
            'G' => {
                if !matches_at(&chars, i + 1, "AMMA") {
                    return Err(lex_error(start, "G char should be followed by AMMA"));
                }
                let consts = algebra
                    .constants()
                    .ok_or_else(|| lex_error(start, "GAMMA not defined for given algebra"))?;
                tokens.push(Token::new(TokenKind::Numeric(consts.gamma()), start));
                i += 5;
            }
            'P' => {
                // PHI is tested before PI; both spellings start with P.
                if matches_at(&chars, i + 1, "HI") {
                    let consts = algebra
                        .constants()
                        .ok_or_else(|| lex_error(start, "PHI not defined for given algebra"))?;
                    tokens.push(Token::new(TokenKind::Numeric(consts.phi()), start));
                    i += 3;
                } else if matches_at(&chars, i + 1, "I") {
                    let consts = algebra
                        .constants()
                        .ok_or_else(|| lex_error(start, "PI not defined for given algebra"))?;
                    tokens.push(Token::new(TokenKind::Numeric(consts.pi()), start));
                    i += 2;
                } else {
                    return Err(lex_error(start, "P char should be followed by I"));
                }
            }
            _ => {
                let name = FUNCTION_NAMES
                    .iter()
                    .copied()
                    .find(|candidate| matches_at(&chars, i, candidate))
                    .ok_or_else(|| {
                        lex_error(start, "unknown function name or other bad syntax")
                    })?;
                i += name.len();
                match name {
                    "tmin" => {
                        let bounded = algebra.bounded().ok_or_else(|| {
                            lex_error(start, "tmin not defined for given algebra")
                        })?;
                        tokens.push(Token::new(TokenKind::Numeric(bounded.min_bound()), start));
                    }
                    "tmax" => {
                        let bounded = algebra.bounded().ok_or_else(|| {
                            lex_error(start, "tmax not defined for given algebra")
                        })?;
                        tokens.push(Token::new(TokenKind::Numeric(bounded.max_bound()), start));
                    }
                    "zero" => {
                        tokens.push(Token::new(TokenKind::Numeric(algebra.zero()), start));
                    }
                    "min" => tokens.push(Token::new(TokenKind::Min, start)),
                    "max" => tokens.push(Token::new(TokenKind::Max, start)),
                    _ => tokens.push(Token::new(TokenKind::FunctionName(name.to_string()), start)),
                }
            }
        }
    }

    Ok(tokens)
}

fn lex_error(position: usize, message: &str) -> EquationError {
    EquationError::Lex {
        position,
        message: message.to_string(),
    }
}

fn construct<A: Algebra>(
    algebra: &A,
    position: usize,
    text: &str,
) -> Result<A::Element, EquationError> {
    algebra
        .element_from_str(text)
        .map_err(|err| lex_error(position, &err.to_string()))
}

/// True when `word` occurs in `chars` starting at `at`.
fn matches_at(chars: &[char], at: usize, word: &str) -> bool {
    let mut i = at;
    for expected in word.chars() {
        if i >= chars.len() || chars[i] != expected {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{ComplexAlgebra, RealAlgebra, VectorAlgebra};
    use anyhow::{anyhow, Result};

    /// An algebra with no optional capabilities at all.
    #[derive(Debug, Clone, Copy)]
    struct BareAlgebra;

    impl Algebra for BareAlgebra {
        type Element = f64;

        fn name(&self) -> &str {
            "bare"
        }

        fn element_from_str(&self, text: &str) -> Result<f64> {
            text.parse::<f64>()
                .map_err(|_| anyhow!("malformed real literal `{text}`"))
        }

        fn zero(&self) -> f64 {
            0.0
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }
        fn sub(&self, a: &f64, b: &f64) -> f64 {
            a - b
        }
        fn mul(&self, a: &f64, b: &f64) -> f64 {
            a * b
        }
        fn div(&self, a: &f64, b: &f64) -> f64 {
            a / b
        }
        fn rem(&self, a: &f64, b: &f64) -> f64 {
            a % b
        }
        fn pow(&self, a: &f64, b: &f64) -> f64 {
            a.powf(*b)
        }
        fn neg(&self, a: &f64) -> f64 {
            -a
        }
        fn min(&self, a: &f64, b: &f64) -> f64 {
            a.min(*b)
        }
        fn max(&self, a: &f64, b: &f64) -> f64 {
            a.max(*b)
        }
    }

    fn real() -> RealAlgebra<f64> {
        RealAlgebra::new()
    }

    fn kinds(source: &str) -> Vec<TokenKind<f64>> {
        lex(&real(), source)
            .expect("lex should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_err(source: &str) -> EquationError {
        lex(&real(), source).expect_err("lex should fail")
    }

    #[test]
    fn punctuation_and_whitespace() {
        assert_eq!(
            kinds("( ) + - * / % ^ ,"),
            vec![
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Times,
                TokenKind::Divide,
                TokenKind::Mod,
                TokenKind::Power,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn token_starts_record_source_offsets() {
        let tokens = lex(&real(), "  $0 + 12").expect("lex should succeed");
        let starts: Vec<usize> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![2, 5, 7]);
    }

    #[test]
    fn index_references() {
        assert_eq!(kinds("$0"), vec![TokenKind::Index(0)]);
        assert_eq!(kinds("$12"), vec![TokenKind::Index(12)]);
        assert_eq!(kinds("$999"), vec![TokenKind::Index(999)]);
    }

    #[test]
    fn index_without_digits_fails_at_position_one() {
        for source in ["$", "$x"] {
            match lex_err(source) {
                EquationError::Lex { position, message } => {
                    assert_eq!(position, 1);
                    assert!(message.contains("one or more digits"), "{message}");
                }
                other => panic!("expected lex error, got {other:?}"),
            }
        }
    }

    #[test]
    fn numeral_round_trips_through_the_algebra() {
        let algebra = real();
        for source in ["42", "3.25", ".5", "1e6", "2.5e-3", "7e+2"] {
            let tokens = lex(&algebra, source).expect("lex should succeed");
            assert_eq!(tokens.len(), 1, "`{source}` should be one token");
            let expected = algebra.element_from_str(source).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Numeric(expected));
        }
    }

    #[test]
    fn numeral_stops_before_second_dot_or_exponent() {
        // "1.5.2" lexes as the numeral 1.5 followed by the numeral .2
        assert_eq!(
            kinds("1.5.2"),
            vec![TokenKind::Numeric(1.5), TokenKind::Numeric(0.2)]
        );
        // the sign after a non-exponent position terminates the numeral
        assert_eq!(
            kinds("3-2"),
            vec![
                TokenKind::Numeric(3.0),
                TokenKind::Minus,
                TokenKind::Numeric(2.0)
            ]
        );
    }

    #[test]
    fn bracket_literal_is_delimited_not_validated() {
        let algebra = VectorAlgebra::new(2);
        let tokens = lex(&algebra, "[1, 2]").expect("lex should succeed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Numeric(vec![1.0, 2.0]));
    }

    #[test]
    fn unterminated_bracket_literal_fails() {
        let algebra = VectorAlgebra::new(2);
        let err = lex(&algebra, "[1,2").expect_err("lex should fail");
        assert!(
            err.to_string().contains("unterminated multidim numeric type"),
            "{err}"
        );
    }

    #[test]
    fn brace_literal_constructs_a_complex_element() {
        let algebra = ComplexAlgebra::new();
        let tokens = lex(&algebra, "{1, 2}").expect("lex should succeed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Numeric(num_complex::Complex::new(1.0, 2.0))
        );
    }

    #[test]
    fn unterminated_brace_literal_fails() {
        let algebra = ComplexAlgebra::new();
        let err = lex(&algebra, "{1, 2").expect_err("lex should fail");
        assert!(err.to_string().contains("unterminated"), "{err}");
    }

    #[test]
    fn named_constants_over_a_capable_algebra() {
        assert_eq!(kinds("E"), vec![TokenKind::Numeric(std::f64::consts::E)]);
        assert_eq!(kinds("PI"), vec![TokenKind::Numeric(std::f64::consts::PI)]);
        assert_eq!(
            kinds("PHI"),
            vec![TokenKind::Numeric((1.0 + 5.0_f64.sqrt()) / 2.0)]
        );
        let gamma = kinds("GAMMA");
        match &gamma[0] {
            TokenKind::Numeric(v) => assert!((v - 0.577_215_664_901_532_9).abs() < 1e-15),
            other => panic!("expected numeric, got {other:?}"),
        }
    }

    #[test]
    fn named_constants_require_the_constants_capability() {
        let err = lex(&BareAlgebra, "PI").expect_err("lex should fail");
        assert!(
            err.to_string().contains("PI not defined for given algebra"),
            "{err}"
        );
        let err = lex(&BareAlgebra, "E").expect_err("lex should fail");
        assert!(
            err.to_string().contains("E not defined for given algebra"),
            "{err}"
        );
    }

    #[test]
    fn malformed_constant_continuations() {
        assert!(lex_err("GAMA")
            .to_string()
            .contains("G char should be followed by AMMA"));
        assert!(lex_err("PX")
            .to_string()
            .contains("P char should be followed by I"));
    }

    #[test]
    fn keyword_matching_is_longest_first() {
        assert_eq!(
            kinds("sinch(1)"),
            vec![
                TokenKind::FunctionName("sinch".into()),
                TokenKind::OpenParen,
                TokenKind::Numeric(1.0),
                TokenKind::CloseParen,
            ]
        );
        assert_eq!(
            kinds("sinchpi(1)")[0],
            TokenKind::FunctionName("sinchpi".into())
        );
        assert_eq!(kinds("sincpi(1)")[0], TokenKind::FunctionName("sincpi".into()));
    }

    #[test]
    fn min_max_lex_as_operators_not_function_names() {
        assert_eq!(kinds("min")[0], TokenKind::Min);
        assert_eq!(kinds("max")[0], TokenKind::Max);
    }

    #[test]
    fn zero_and_bounds_lex_as_numeric_literals() {
        assert_eq!(kinds("zero"), vec![TokenKind::Numeric(0.0)]);
        assert_eq!(kinds("tmin"), vec![TokenKind::Numeric(f64::MIN)]);
        assert_eq!(kinds("tmax"), vec![TokenKind::Numeric(f64::MAX)]);
    }

    #[test]
    fn bounds_require_the_bounded_capability() {
        let algebra = ComplexAlgebra::new();
        let err = lex(&algebra, "tmin").expect_err("lex should fail");
        assert!(
            err.to_string().contains("tmin not defined for given algebra"),
            "{err}"
        );
    }

    #[test]
    fn unknown_spelling_is_a_lex_error() {
        let err = lex_err("bogus(1)");
        assert!(
            err.to_string()
                .contains("unknown function name or other bad syntax"),
            "{err}"
        );
    }
}
