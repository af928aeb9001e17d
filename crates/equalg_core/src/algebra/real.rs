//! Real algebra, generic over the floating-point precision.

use crate::traits::{
    Algebra, Bounded, Exponential, Hyperbolic, InverseHyperbolic, InverseTrig, NamedConstants,
    Random, Roots, Trig,
};
use anyhow::{anyhow, Result};
use num_traits::{Float, FloatConst, FromPrimitive, One, Zero};
use rand::Rng;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::str::FromStr;

/// Euler-Mascheroni constant, which `num_traits::FloatConst` does not carry.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// The real numbers at precision `T`, with every capability family.
///
/// Stateless and `Copy`; one value serves any number of concurrent parses
/// and evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealAlgebra<T> {
    _precision: PhantomData<T>,
}

impl<T> RealAlgebra<T> {
    pub fn new() -> Self {
        Self {
            _precision: PhantomData,
        }
    }
}

/// Everything a precision needs to back [`RealAlgebra`]: `Float` supplies
/// arithmetic and transcendentals, `FloatConst` the named constants,
/// `FromPrimitive` the f64 conversions.
pub trait RealScalar:
    Float + FloatConst + FromPrimitive + FromStr + Debug + Send + Sync + 'static
{
}

impl<T: Float + FloatConst + FromPrimitive + FromStr + Debug + Send + Sync + 'static> RealScalar
    for T
{
}

impl<T: RealScalar> Algebra for RealAlgebra<T> {
    type Element = T;

    fn name(&self) -> &str {
        "real"
    }

    fn element_from_str(&self, text: &str) -> Result<T> {
        text.trim()
            .parse::<T>()
            .map_err(|_| anyhow!("malformed real literal `{text}`"))
    }

    fn zero(&self) -> T {
        T::zero()
    }

    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }
    fn sub(&self, a: &T, b: &T) -> T {
        *a - *b
    }
    fn mul(&self, a: &T, b: &T) -> T {
        *a * *b
    }
    fn div(&self, a: &T, b: &T) -> T {
        *a / *b
    }
    fn rem(&self, a: &T, b: &T) -> T {
        *a % *b
    }
    fn pow(&self, a: &T, b: &T) -> T {
        a.powf(*b)
    }
    fn neg(&self, a: &T) -> T {
        -*a
    }
    fn min(&self, a: &T, b: &T) -> T {
        a.min(*b)
    }
    fn max(&self, a: &T, b: &T) -> T {
        a.max(*b)
    }

    fn constants(&self) -> Option<&dyn NamedConstants<T>> {
        Some(self)
    }
    fn bounded(&self) -> Option<&dyn Bounded<T>> {
        Some(self)
    }
    fn trig(&self) -> Option<&dyn Trig<T>> {
        Some(self)
    }
    fn inverse_trig(&self) -> Option<&dyn InverseTrig<T>> {
        Some(self)
    }
    fn hyperbolic(&self) -> Option<&dyn Hyperbolic<T>> {
        Some(self)
    }
    fn inverse_hyperbolic(&self) -> Option<&dyn InverseHyperbolic<T>> {
        Some(self)
    }
    fn roots(&self) -> Option<&dyn Roots<T>> {
        Some(self)
    }
    fn exponential(&self) -> Option<&dyn Exponential<T>> {
        Some(self)
    }
    fn random(&self) -> Option<&dyn Random<T>> {
        Some(self)
    }
}

impl<T: RealScalar> NamedConstants<T> for RealAlgebra<T> {
    fn e(&self) -> T {
        T::E()
    }
    fn pi(&self) -> T {
        T::PI()
    }
    fn phi(&self) -> T {
        let five = T::from_f64(5.0).unwrap();
        (T::one() + five.sqrt()) / T::from_f64(2.0).unwrap()
    }
    fn gamma(&self) -> T {
        T::from_f64(EULER_GAMMA).unwrap()
    }
}

impl<T: RealScalar> Bounded<T> for RealAlgebra<T> {
    fn min_bound(&self) -> T {
        T::min_value()
    }
    fn max_bound(&self) -> T {
        T::max_value()
    }
}

impl<T: RealScalar> Trig<T> for RealAlgebra<T> {
    fn cos(&self, x: &T) -> T {
        x.cos()
    }
    fn sin(&self, x: &T) -> T {
        x.sin()
    }
    fn tan(&self, x: &T) -> T {
        x.tan()
    }
    fn sinc(&self, x: &T) -> T {
        if x.is_zero() {
            T::one()
        } else {
            x.sin() / *x
        }
    }
    fn sincpi(&self, x: &T) -> T {
        self.sinc(&(*x * T::PI()))
    }
}

impl<T: RealScalar> InverseTrig<T> for RealAlgebra<T> {
    fn acos(&self, x: &T) -> T {
        x.acos()
    }
    fn asin(&self, x: &T) -> T {
        x.asin()
    }
    fn atan(&self, x: &T) -> T {
        x.atan()
    }
}

impl<T: RealScalar> Hyperbolic<T> for RealAlgebra<T> {
    fn cosh(&self, x: &T) -> T {
        x.cosh()
    }
    fn sinh(&self, x: &T) -> T {
        x.sinh()
    }
    fn tanh(&self, x: &T) -> T {
        x.tanh()
    }
    fn sinch(&self, x: &T) -> T {
        if x.is_zero() {
            T::one()
        } else {
            x.sinh() / *x
        }
    }
    fn sinchpi(&self, x: &T) -> T {
        self.sinch(&(*x * T::PI()))
    }
}

impl<T: RealScalar> InverseHyperbolic<T> for RealAlgebra<T> {
    fn acosh(&self, x: &T) -> T {
        x.acosh()
    }
    fn asinh(&self, x: &T) -> T {
        x.asinh()
    }
    fn atanh(&self, x: &T) -> T {
        x.atanh()
    }
}

impl<T: RealScalar> Roots<T> for RealAlgebra<T> {
    fn sqrt(&self, x: &T) -> T {
        x.sqrt()
    }
    fn cbrt(&self, x: &T) -> T {
        x.cbrt()
    }
}

impl<T: RealScalar> Exponential<T> for RealAlgebra<T> {
    fn exp(&self, x: &T) -> T {
        x.exp()
    }
    fn log(&self, x: &T) -> T {
        x.ln()
    }
}

impl<T: RealScalar> Random<T> for RealAlgebra<T> {
    fn rand(&self) -> T {
        T::from_f64(rand::thread_rng().gen::<f64>()).unwrap()
    }
}
