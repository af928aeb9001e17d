//! The algebra collaborator seam.
//!
//! The compilation pipeline treats the numeric side of the system purely
//! through these traits: constructing an element from text, obtaining the
//! additive identity, the always-present ring/field operations, and one
//! optional accessor per capability family. A capability is queryable
//! (`is_some()`) without invoking any of its operations, which is what lets
//! the lexer and the node factory gate behavior on the algebra they were
//! handed.

use anyhow::Result;
use std::fmt::Debug;

/// A numeric algebra the equation pipeline can compile against.
///
/// Implementations provide the core operations unconditionally and opt into
/// capability families by overriding the corresponding accessor to return
/// `Some(self)`.
pub trait Algebra {
    /// The element type expressions evaluate to.
    type Element: Clone + Debug + PartialEq + Send + Sync;

    /// Short human-readable name, used in error messages.
    fn name(&self) -> &str;

    /// Parses a literal in this algebra's own notation (plain numeral,
    /// bracket-delimited multi-dimensional literal, or brace-delimited
    /// multi-component literal) into one element. The lexer only balances
    /// delimiters; validating the literal's internal grammar happens here.
    fn element_from_str(&self, text: &str) -> Result<Self::Element>;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn pow(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn min(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn max(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Named nullary constants (`E`, `PI`, `PHI`, `GAMMA`).
    fn constants(&self) -> Option<&dyn NamedConstants<Self::Element>> {
        None
    }

    /// Least and greatest representable elements (`tmin`, `tmax`).
    fn bounded(&self) -> Option<&dyn Bounded<Self::Element>> {
        None
    }

    fn trig(&self) -> Option<&dyn Trig<Self::Element>> {
        None
    }

    fn inverse_trig(&self) -> Option<&dyn InverseTrig<Self::Element>> {
        None
    }

    fn hyperbolic(&self) -> Option<&dyn Hyperbolic<Self::Element>> {
        None
    }

    fn inverse_hyperbolic(&self) -> Option<&dyn InverseHyperbolic<Self::Element>> {
        None
    }

    fn roots(&self) -> Option<&dyn Roots<Self::Element>> {
        None
    }

    fn exponential(&self) -> Option<&dyn Exponential<Self::Element>> {
        None
    }

    fn random(&self) -> Option<&dyn Random<Self::Element>> {
        None
    }
}

/// Named nullary constants.
pub trait NamedConstants<E> {
    /// Euler's number.
    fn e(&self) -> E;
    fn pi(&self) -> E;
    /// The golden ratio.
    fn phi(&self) -> E;
    /// The Euler-Mascheroni constant.
    fn gamma(&self) -> E;
}

/// Least and greatest representable elements.
pub trait Bounded<E> {
    fn min_bound(&self) -> E;
    fn max_bound(&self) -> E;
}

pub trait Trig<E> {
    fn cos(&self, x: &E) -> E;
    fn sin(&self, x: &E) -> E;
    fn tan(&self, x: &E) -> E;
    /// sin(x)/x, continuously extended to 1 at zero.
    fn sinc(&self, x: &E) -> E;
    /// sinc(pi * x).
    fn sincpi(&self, x: &E) -> E;
}

pub trait InverseTrig<E> {
    fn acos(&self, x: &E) -> E;
    fn asin(&self, x: &E) -> E;
    fn atan(&self, x: &E) -> E;
}

pub trait Hyperbolic<E> {
    fn cosh(&self, x: &E) -> E;
    fn sinh(&self, x: &E) -> E;
    fn tanh(&self, x: &E) -> E;
    /// sinh(x)/x, continuously extended to 1 at zero.
    fn sinch(&self, x: &E) -> E;
    /// sinch(pi * x).
    fn sinchpi(&self, x: &E) -> E;
}

pub trait InverseHyperbolic<E> {
    fn acosh(&self, x: &E) -> E;
    fn asinh(&self, x: &E) -> E;
    fn atanh(&self, x: &E) -> E;
}

pub trait Roots<E> {
    fn sqrt(&self, x: &E) -> E;
    fn cbrt(&self, x: &E) -> E;
}

pub trait Exponential<E> {
    fn exp(&self, x: &E) -> E;
    /// Natural logarithm.
    fn log(&self, x: &E) -> E;
}

pub trait Random<E> {
    /// A fresh pseudo-random element.
    fn rand(&self) -> E;
}
