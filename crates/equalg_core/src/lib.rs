//! The `equalg_core` crate compiles textual infix equations into immutable,
//! reusable procedure trees evaluable over any numeric algebra.
//!
//! Key components:
//! - **Traits**: `Algebra` (element construction, core operations) plus one
//!   optional capability family per transcendental group (trig, hyperbolic,
//!   inverse forms, roots, exponential, named constants, bounds, random).
//! - **Lexer**: a cursor-driven character lexer with multi-character
//!   lookahead for keywords, named constants and delimited literals.
//! - **Parser**: a recursive-descent, precedence-climbing grammar building
//!   the procedure tree bottom-up, one method per precedence level.
//! - **Factory**: capability-gated dispatch from function spellings to
//!   procedure nodes; a recognized name is still rejected when the bound
//!   algebra lacks the owning capability.
//! - **Algebras**: modest real, complex and vector collaborators used by the
//!   tests and as reference implementations of the trait seam.

pub mod algebra;
pub mod error;
pub mod factory;
pub mod lexer;
pub mod parser;
pub mod procedure;
pub mod token;
pub mod traits;

pub use error::{EquationError, EvalError};
pub use parser::{compile, parse};
pub use procedure::{BinaryOp, FunctionOp, Procedure};
pub use traits::Algebra;
