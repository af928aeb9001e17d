//! The compiled procedure tree.
//!
//! Each node is one unit of computation over the algebra's element type.
//! Composite nodes own their children and evaluate them left to right before
//! combining the results through the algebra's operations; leaves are literal
//! constants or indexed input-slot references. The tree mirrors the AST, has
//! no cycles, and is immutable once built, so a single compiled procedure can
//! be evaluated concurrently against different slot bindings.

use crate::error::EvalError;
use crate::traits::Algebra;
use serde::{Deserialize, Serialize};

/// Binary combination selected by an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

/// One-argument transcendental operation selected by the node factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionOp {
    Acos,
    Asin,
    Atan,
    Acosh,
    Asinh,
    Atanh,
    Sqrt,
    Cbrt,
    Cos,
    Sin,
    Tan,
    Sinc,
    SincPi,
    Cosh,
    Sinh,
    Tanh,
    Sinch,
    SinchPi,
    Exp,
    Log,
}

impl FunctionOp {
    /// The source spelling of the operation.
    pub fn name(self) -> &'static str {
        match self {
            FunctionOp::Acos => "acos",
            FunctionOp::Asin => "asin",
            FunctionOp::Atan => "atan",
            FunctionOp::Acosh => "acosh",
            FunctionOp::Asinh => "asinh",
            FunctionOp::Atanh => "atanh",
            FunctionOp::Sqrt => "sqrt",
            FunctionOp::Cbrt => "cbrt",
            FunctionOp::Cos => "cos",
            FunctionOp::Sin => "sin",
            FunctionOp::Tan => "tan",
            FunctionOp::Sinc => "sinc",
            FunctionOp::SincPi => "sincpi",
            FunctionOp::Cosh => "cosh",
            FunctionOp::Sinh => "sinh",
            FunctionOp::Tanh => "tanh",
            FunctionOp::Sinch => "sinch",
            FunctionOp::SinchPi => "sinchpi",
            FunctionOp::Exp => "exp",
            FunctionOp::Log => "log",
        }
    }
}

/// A compiled, reusable computation over an algebra.
#[derive(Debug, Clone)]
pub enum Procedure<A: Algebra> {
    /// A literal element value.
    Const(A::Element),
    /// An indexed input slot, `$N`.
    Slot(usize),
    /// Unary negation.
    Neg(Box<Procedure<A>>),
    /// An infix binary combination.
    Binary(BinaryOp, Box<Procedure<A>>, Box<Procedure<A>>),
    /// A one-argument function call.
    Call(FunctionOp, Box<Procedure<A>>),
    /// A fresh pseudo-random element per evaluation.
    Rand,
}

impl<A: Algebra> Procedure<A> {
    /// Evaluates the tree against `inputs`, where `inputs[n]` binds `$n`.
    ///
    /// The algebra supplied here performs every combination step; it should
    /// provide at least the capabilities of the algebra the procedure was
    /// compiled against, otherwise [`EvalError::MissingCapability`] is
    /// returned.
    pub fn evaluate(&self, algebra: &A, inputs: &[A::Element]) -> Result<A::Element, EvalError> {
        match self {
            Procedure::Const(value) => Ok(value.clone()),
            Procedure::Slot(slot) => {
                inputs
                    .get(*slot)
                    .cloned()
                    .ok_or(EvalError::SlotOutOfRange {
                        slot: *slot,
                        provided: inputs.len(),
                    })
            }
            Procedure::Neg(inner) => {
                let value = inner.evaluate(algebra, inputs)?;
                Ok(algebra.neg(&value))
            }
            Procedure::Binary(op, lhs, rhs) => {
                let a = lhs.evaluate(algebra, inputs)?;
                let b = rhs.evaluate(algebra, inputs)?;
                Ok(match op {
                    BinaryOp::Add => algebra.add(&a, &b),
                    BinaryOp::Sub => algebra.sub(&a, &b),
                    BinaryOp::Mul => algebra.mul(&a, &b),
                    BinaryOp::Div => algebra.div(&a, &b),
                    BinaryOp::Rem => algebra.rem(&a, &b),
                    BinaryOp::Pow => algebra.pow(&a, &b),
                    BinaryOp::Min => algebra.min(&a, &b),
                    BinaryOp::Max => algebra.max(&a, &b),
                })
            }
            Procedure::Call(op, arg) => {
                let x = arg.evaluate(algebra, inputs)?;
                apply_function(algebra, *op, &x)
            }
            Procedure::Rand => algebra
                .random()
                .map(|r| r.rand())
                .ok_or(EvalError::MissingCapability { function: "rand" }),
        }
    }
}

fn apply_function<A: Algebra>(
    algebra: &A,
    op: FunctionOp,
    x: &A::Element,
) -> Result<A::Element, EvalError> {
    let missing = EvalError::MissingCapability {
        function: op.name(),
    };
    Ok(match op {
        FunctionOp::Acos => algebra.inverse_trig().ok_or(missing)?.acos(x),
        FunctionOp::Asin => algebra.inverse_trig().ok_or(missing)?.asin(x),
        FunctionOp::Atan => algebra.inverse_trig().ok_or(missing)?.atan(x),
        FunctionOp::Acosh => algebra.inverse_hyperbolic().ok_or(missing)?.acosh(x),
        FunctionOp::Asinh => algebra.inverse_hyperbolic().ok_or(missing)?.asinh(x),
        FunctionOp::Atanh => algebra.inverse_hyperbolic().ok_or(missing)?.atanh(x),
        FunctionOp::Sqrt => algebra.roots().ok_or(missing)?.sqrt(x),
        FunctionOp::Cbrt => algebra.roots().ok_or(missing)?.cbrt(x),
        FunctionOp::Cos => algebra.trig().ok_or(missing)?.cos(x),
        FunctionOp::Sin => algebra.trig().ok_or(missing)?.sin(x),
        FunctionOp::Tan => algebra.trig().ok_or(missing)?.tan(x),
        FunctionOp::Sinc => algebra.trig().ok_or(missing)?.sinc(x),
        FunctionOp::SincPi => algebra.trig().ok_or(missing)?.sincpi(x),
        FunctionOp::Cosh => algebra.hyperbolic().ok_or(missing)?.cosh(x),
        FunctionOp::Sinh => algebra.hyperbolic().ok_or(missing)?.sinh(x),
        FunctionOp::Tanh => algebra.hyperbolic().ok_or(missing)?.tanh(x),
        FunctionOp::Sinch => algebra.hyperbolic().ok_or(missing)?.sinch(x),
        FunctionOp::SinchPi => algebra.hyperbolic().ok_or(missing)?.sinchpi(x),
        FunctionOp::Exp => algebra.exponential().ok_or(missing)?.exp(x),
        FunctionOp::Log => algebra.exponential().ok_or(missing)?.log(x),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::RealAlgebra;

    fn real() -> RealAlgebra<f64> {
        RealAlgebra::new()
    }

    #[test]
    fn constants_and_slots() {
        let algebra = real();
        let constant: Procedure<RealAlgebra<f64>> = Procedure::Const(4.5);
        assert_eq!(constant.evaluate(&algebra, &[]), Ok(4.5));

        let slot: Procedure<RealAlgebra<f64>> = Procedure::Slot(1);
        assert_eq!(slot.evaluate(&algebra, &[7.0, 8.0]), Ok(8.0));
    }

    #[test]
    fn out_of_range_slot_is_an_error() {
        let algebra = real();
        let slot: Procedure<RealAlgebra<f64>> = Procedure::Slot(3);
        assert_eq!(
            slot.evaluate(&algebra, &[1.0]),
            Err(EvalError::SlotOutOfRange {
                slot: 3,
                provided: 1
            })
        );
    }

    #[test]
    fn children_evaluate_before_combining() {
        let algebra = real();
        let tree: Procedure<RealAlgebra<f64>> = Procedure::Binary(
            BinaryOp::Mul,
            Box::new(Procedure::Binary(
                BinaryOp::Add,
                Box::new(Procedure::Slot(0)),
                Box::new(Procedure::Const(1.0)),
            )),
            Box::new(Procedure::Slot(1)),
        );
        assert_eq!(tree.evaluate(&algebra, &[2.0, 4.0]), Ok(12.0));
    }

    #[test]
    fn missing_capability_is_reported_not_panicked() {
        // RealAlgebra has every capability; build against it, then evaluate
        // against a capability-free algebra sharing the element type.
        use anyhow::{anyhow, Result};

        #[derive(Debug)]
        struct Stripped;
        impl crate::traits::Algebra for Stripped {
            type Element = f64;
            fn name(&self) -> &str {
                "stripped"
            }
            fn element_from_str(&self, text: &str) -> Result<f64> {
                text.parse().map_err(|_| anyhow!("bad literal"))
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

        let tree: Procedure<Stripped> =
            Procedure::Call(FunctionOp::Sin, Box::new(Procedure::Const(1.0)));
        assert_eq!(
            tree.evaluate(&Stripped, &[]),
            Err(EvalError::MissingCapability { function: "sin" })
        );
    }

    #[test]
    fn procedures_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Procedure<RealAlgebra<f64>>>();
    }
}
