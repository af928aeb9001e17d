//! Recursive-descent, precedence-climbing parser.
//!
//! One method per grammar level, each taking a starting token position and
//! returning the next unconsumed position plus the subtree built so far:
//!
//! ```text
//! equation    := term (('+' | '-') equation)?
//! term        := factor (('*' | '/' | '%') term)?
//! factor      := signed_atom ('^' factor)?
//! signed_atom := ('+' | '-')? atom
//! atom        := Index
//!              | FunctionName '(' equation ')'
//!              | FunctionName                          -- only `rand`
//!              | '(' equation ')'
//!              | (Min | Max) '(' equation ',' equation ')'
//!              | num
//! num         := Numeric
//! ```
//!
//! Every binary level recurses into itself on the right branch rather than
//! looping, so `+ - * / %` group right-associatively. That grouping is a
//! documented behavior of this grammar and is preserved as-is; expressions
//! mixing subtraction or division at one precedence level evaluate
//! accordingly (`$0-$1-$2` is `$0-($1-$2)`).

use crate::error::EquationError;
use crate::factory::create_function;
use crate::lexer::lex;
use crate::procedure::{BinaryOp, Procedure};
use crate::token::{Token, TokenKind};
use crate::traits::Algebra;

/// Compiles `source` into a procedure tree, or fails with the first lex,
/// syntax or unsupported-function error.
pub fn compile<A: Algebra>(algebra: &A, source: &str) -> Result<Procedure<A>, EquationError> {
    let tokens = lex(algebra, source)?;
    let parser = Parser { algebra, tokens };
    let step = parser.equation(0)?;
    Ok(step.procedure)
}

/// The caller-facing entry point: always yields a usable procedure.
///
/// On success the error slot is `None`; on any failure it carries the error
/// and the procedure is a zero-valued constant, so callers never have to
/// handle an absent procedure.
pub fn parse<A: Algebra>(algebra: &A, source: &str) -> (Option<EquationError>, Procedure<A>) {
    match compile(algebra, source) {
        Ok(procedure) => (None, procedure),
        Err(err) => (Some(err), Procedure::Const(algebra.zero())),
    }
}

/// Result of one grammar rule: the next unconsumed token position and the
/// subtree the rule built.
struct ParseStep<A: Algebra> {
    next: usize,
    procedure: Procedure<A>,
}

struct Parser<'a, A: Algebra> {
    algebra: &'a A,
    tokens: Vec<Token<A::Element>>,
}

impl<'a, A: Algebra> Parser<'a, A> {
    fn kind_at(&self, pos: usize) -> Option<&TokenKind<A::Element>> {
        self.tokens.get(pos).map(|t| &t.kind)
    }

    /// Builds the error for an unexpected token at `pos`. When `pos` is past
    /// the end of the sequence the failure instead names the last consumed
    /// token, which changes the message shape, not just its content.
    fn error_at(&self, pos: usize, message: &str) -> EquationError {
        match self.tokens.get(pos) {
            Some(token) => EquationError::Syntax {
                column: token.start,
                token: token.kind.to_string(),
                message: message.to_string(),
            },
            None => match pos.checked_sub(1).and_then(|p| self.tokens.get(p)) {
                Some(last) => EquationError::UnexpectedEnd {
                    column: last.start,
                    token: last.kind.to_string(),
                },
                None => EquationError::UnexpectedEnd {
                    column: 0,
                    token: "start of input".to_string(),
                },
            },
        }
    }

    fn equation(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        let first = self.term(pos)?;
        let op = match self.kind_at(first.next) {
            Some(TokenKind::Plus) => BinaryOp::Add,
            Some(TokenKind::Minus) => BinaryOp::Sub,
            _ => return Ok(first),
        };
        let rest = self.equation(first.next + 1)?;
        Ok(ParseStep {
            next: rest.next,
            procedure: Procedure::Binary(op, Box::new(first.procedure), Box::new(rest.procedure)),
        })
    }

    fn term(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        let first = self.factor(pos)?;
        let op = match self.kind_at(first.next) {
            Some(TokenKind::Times) => BinaryOp::Mul,
            Some(TokenKind::Divide) => BinaryOp::Div,
            Some(TokenKind::Mod) => BinaryOp::Rem,
            _ => return Ok(first),
        };
        let rest = self.term(first.next + 1)?;
        Ok(ParseStep {
            next: rest.next,
            procedure: Procedure::Binary(op, Box::new(first.procedure), Box::new(rest.procedure)),
        })
    }

    fn factor(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        let base = self.signed_atom(pos)?;
        if !matches!(self.kind_at(base.next), Some(TokenKind::Power)) {
            return Ok(base);
        }
        let exponent = self.factor(base.next + 1)?;
        Ok(ParseStep {
            next: exponent.next,
            procedure: Procedure::Binary(
                BinaryOp::Pow,
                Box::new(base.procedure),
                Box::new(exponent.procedure),
            ),
        })
    }

    /// Negation binds to the atom alone, so `-$0^2` parses as `(-$0)^2`.
    fn signed_atom(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        match self.kind_at(pos) {
            Some(TokenKind::Plus) => self.atom(pos + 1),
            Some(TokenKind::Minus) => {
                let inner = self.atom(pos + 1)?;
                Ok(ParseStep {
                    next: inner.next,
                    procedure: Procedure::Neg(Box::new(inner.procedure)),
                })
            }
            _ => self.atom(pos),
        }
    }

    fn atom(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        match self.kind_at(pos) {
            Some(TokenKind::Index(slot)) => Ok(ParseStep {
                next: pos + 1,
                procedure: Procedure::Slot(*slot),
            }),
            Some(TokenKind::FunctionName(name)) => {
                if matches!(self.kind_at(pos + 1), Some(TokenKind::OpenParen)) {
                    let arg = self.equation(pos + 2)?;
                    if !matches!(self.kind_at(arg.next), Some(TokenKind::CloseParen)) {
                        return Err(self.error_at(arg.next, "Expected `)`"));
                    }
                    let procedure = create_function(self.algebra, name, Some(arg.procedure))?;
                    Ok(ParseStep {
                        next: arg.next + 1,
                        procedure,
                    })
                } else if name == "rand" {
                    // The only spelling callable with no parentheses.
                    let procedure = create_function(self.algebra, name, None)?;
                    Ok(ParseStep {
                        next: pos + 1,
                        procedure,
                    })
                } else {
                    Err(self.error_at(pos + 1, "Expected `(`"))
                }
            }
            Some(TokenKind::OpenParen) => {
                let inner = self.equation(pos + 1)?;
                if !matches!(self.kind_at(inner.next), Some(TokenKind::CloseParen)) {
                    return Err(self.error_at(inner.next, "Expected `)`"));
                }
                Ok(ParseStep {
                    next: inner.next + 1,
                    procedure: inner.procedure,
                })
            }
            Some(TokenKind::Min) | Some(TokenKind::Max) => {
                let op = if matches!(self.kind_at(pos), Some(TokenKind::Min)) {
                    BinaryOp::Min
                } else {
                    BinaryOp::Max
                };
                if !matches!(self.kind_at(pos + 1), Some(TokenKind::OpenParen)) {
                    return Err(self.error_at(pos + 1, "Expected `(`"));
                }
                let lhs = self.equation(pos + 2)?;
                if !matches!(self.kind_at(lhs.next), Some(TokenKind::Comma)) {
                    return Err(self.error_at(lhs.next, "Expected `,`"));
                }
                let rhs = self.equation(lhs.next + 1)?;
                if !matches!(self.kind_at(rhs.next), Some(TokenKind::CloseParen)) {
                    return Err(self.error_at(rhs.next, "Expected `)`"));
                }
                Ok(ParseStep {
                    next: rhs.next + 1,
                    procedure: Procedure::Binary(
                        op,
                        Box::new(lhs.procedure),
                        Box::new(rhs.procedure),
                    ),
                })
            }
            _ => self.num(pos),
        }
    }

    fn num(&self, pos: usize) -> Result<ParseStep<A>, EquationError> {
        match self.kind_at(pos) {
            Some(TokenKind::Numeric(value)) => Ok(ParseStep {
                next: pos + 1,
                procedure: Procedure::Const(value.clone()),
            }),
            _ => Err(self.error_at(pos, "Expected something numeric")),
        }
    }
}
