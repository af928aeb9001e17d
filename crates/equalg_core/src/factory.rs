//! Procedure-node factory.
//!
//! Maps a lexically recognized function spelling to a procedure node, gated
//! on the algebra's capabilities. The capability blocks are tested in a fixed
//! priority order and each spelling is reachable through exactly one block,
//! so a name whose owning capability is absent falls through every block to
//! the unsupported-function error even though it lexed successfully.

use crate::error::EquationError;
use crate::procedure::{FunctionOp, Procedure};
use crate::traits::Algebra;

/// Instantiates the node for `name`, wrapping `argument` for the unary
/// operations. Only `rand` is nullary; the grammar supplies an argument for
/// every other spelling, so a missing one is a contract violation and panics.
pub fn create_function<A: Algebra>(
    algebra: &A,
    name: &str,
    argument: Option<Procedure<A>>,
) -> Result<Procedure<A>, EquationError> {
    if algebra.inverse_trig().is_some() {
        if let Some(op) = match name {
            "acos" => Some(FunctionOp::Acos),
            "asin" => Some(FunctionOp::Asin),
            "atan" => Some(FunctionOp::Atan),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.inverse_hyperbolic().is_some() {
        if let Some(op) = match name {
            "acosh" => Some(FunctionOp::Acosh),
            "asinh" => Some(FunctionOp::Asinh),
            "atanh" => Some(FunctionOp::Atanh),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.roots().is_some() {
        if let Some(op) = match name {
            "sqrt" => Some(FunctionOp::Sqrt),
            "cbrt" => Some(FunctionOp::Cbrt),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.trig().is_some() {
        if let Some(op) = match name {
            "cos" => Some(FunctionOp::Cos),
            "sin" => Some(FunctionOp::Sin),
            "tan" => Some(FunctionOp::Tan),
            "sinc" => Some(FunctionOp::Sinc),
            "sincpi" => Some(FunctionOp::SincPi),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.hyperbolic().is_some() {
        if let Some(op) = match name {
            "cosh" => Some(FunctionOp::Cosh),
            "sinh" => Some(FunctionOp::Sinh),
            "tanh" => Some(FunctionOp::Tanh),
            "sinch" => Some(FunctionOp::Sinch),
            "sinchpi" => Some(FunctionOp::SinchPi),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.exponential().is_some() {
        if let Some(op) = match name {
            "exp" => Some(FunctionOp::Exp),
            "log" => Some(FunctionOp::Log),
            _ => None,
        } {
            return Ok(unary(op, argument));
        }
    }
    if algebra.random().is_some() && name == "rand" {
        // The random block owns the spelling unconditionally; a parsed
        // argument, if any, is discarded.
        return Ok(Procedure::Rand);
    }

    Err(EquationError::UnsupportedFunction {
        function: name.to_string(),
        algebra: algebra.name().to_string(),
    })
}

fn unary<A: Algebra>(op: FunctionOp, argument: Option<Procedure<A>>) -> Procedure<A> {
    match argument {
        Some(arg) => Procedure::Call(op, Box::new(arg)),
        // The grammar always supplies an argument for unary functions.
        None => panic!("function `{}` requires an argument", op.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{ComplexAlgebra, RealAlgebra};

    fn constant(value: f64) -> Option<Procedure<RealAlgebra<f64>>> {
        Some(Procedure::Const(value))
    }

    #[test]
    fn every_spelling_resolves_over_a_full_algebra() {
        let algebra = RealAlgebra::<f64>::new();
        for name in [
            "acos", "asin", "atan", "acosh", "asinh", "atanh", "sqrt", "cbrt", "cos", "sin",
            "tan", "sinc", "sincpi", "cosh", "sinh", "tanh", "sinch", "sinchpi", "exp", "log",
        ] {
            let node = create_function(&algebra, name, constant(0.5))
                .unwrap_or_else(|e| panic!("`{name}` should resolve: {e}"));
            match node {
                Procedure::Call(op, _) => assert_eq!(op.name(), name),
                other => panic!("expected a call node for `{name}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn rand_builds_a_nullary_node() {
        let algebra = RealAlgebra::<f64>::new();
        let node = create_function(&algebra, "rand", None).expect("rand should resolve");
        assert!(matches!(node, Procedure::Rand));
    }

    #[test]
    fn missing_capability_rejects_a_recognized_name() {
        // ComplexAlgebra declares no random capability.
        let algebra = ComplexAlgebra::new();
        let err = create_function::<ComplexAlgebra>(&algebra, "rand", None)
            .expect_err("rand should be rejected");
        match err {
            EquationError::UnsupportedFunction { function, algebra } => {
                assert_eq!(function, "rand");
                assert_eq!(algebra, "complex");
            }
            other => panic!("expected UnsupportedFunction, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_error_names_function_and_algebra() {
        let algebra = ComplexAlgebra::new();
        let err = create_function::<ComplexAlgebra>(
            &algebra,
            "rand",
            None,
        )
        .expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "function `rand` is not supported by the complex algebra"
        );
    }
}
