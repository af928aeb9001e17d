//! Concrete algebra collaborators.
//!
//! These are intentionally modest reference implementations of the
//! [`Algebra`](crate::traits::Algebra) seam: a generic real algebra with the
//! full capability set, a complex algebra with brace-delimited component
//! literals, and an elementwise vector algebra with bracket-delimited
//! literals. The full numeric-type hierarchy (matrices, tensors, exotic
//! precisions) lives outside this crate and plugs in through the same trait.

pub mod complex;
pub mod real;
pub mod vector;

pub use complex::ComplexAlgebra;
pub use real::RealAlgebra;
pub use vector::VectorAlgebra;
