//! Complex algebra over `Complex<f64>`.
//!
//! Literals come in two notations: a plain numeral (purely real) or the
//! brace-delimited component form `{re, im}` the lexer hands over verbatim.
//! The algebra declares no bounded and no random capability, so `tmin`,
//! `tmax` and `rand` are rejected for expressions bound to it.

use crate::traits::{
    Algebra, Exponential, Hyperbolic, InverseHyperbolic, InverseTrig, NamedConstants, Roots, Trig,
};
use anyhow::{anyhow, bail, Result};
use num_complex::Complex;

type C = Complex<f64>;

/// The complex numbers at double precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexAlgebra;

impl ComplexAlgebra {
    pub fn new() -> Self {
        Self
    }
}

fn component(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("malformed complex component `{}`", text.trim()))
}

impl Algebra for ComplexAlgebra {
    type Element = C;

    fn name(&self) -> &str {
        "complex"
    }

    fn element_from_str(&self, text: &str) -> Result<C> {
        let trimmed = text.trim();
        if let Some(inner) = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            let parts: Vec<&str> = inner.split(',').collect();
            match parts.as_slice() {
                [re] => Ok(Complex::new(component(re)?, 0.0)),
                [re, im] => Ok(Complex::new(component(re)?, component(im)?)),
                _ => bail!("complex literal `{trimmed}` must have one or two components"),
            }
        } else {
            Ok(Complex::new(component(trimmed)?, 0.0))
        }
    }

    fn zero(&self) -> C {
        Complex::new(0.0, 0.0)
    }

    fn add(&self, a: &C, b: &C) -> C {
        a + b
    }
    fn sub(&self, a: &C, b: &C) -> C {
        a - b
    }
    fn mul(&self, a: &C, b: &C) -> C {
        a * b
    }
    fn div(&self, a: &C, b: &C) -> C {
        a / b
    }
    fn rem(&self, a: &C, b: &C) -> C {
        a % b
    }
    fn pow(&self, a: &C, b: &C) -> C {
        a.powc(*b)
    }
    fn neg(&self, a: &C) -> C {
        -a
    }
    /// Ordering by modulus; ties keep the left operand.
    fn min(&self, a: &C, b: &C) -> C {
        if a.norm() <= b.norm() {
            *a
        } else {
            *b
        }
    }
    fn max(&self, a: &C, b: &C) -> C {
        if a.norm() >= b.norm() {
            *a
        } else {
            *b
        }
    }

    fn constants(&self) -> Option<&dyn NamedConstants<C>> {
        Some(self)
    }
    fn trig(&self) -> Option<&dyn Trig<C>> {
        Some(self)
    }
    fn inverse_trig(&self) -> Option<&dyn InverseTrig<C>> {
        Some(self)
    }
    fn hyperbolic(&self) -> Option<&dyn Hyperbolic<C>> {
        Some(self)
    }
    fn inverse_hyperbolic(&self) -> Option<&dyn InverseHyperbolic<C>> {
        Some(self)
    }
    fn roots(&self) -> Option<&dyn Roots<C>> {
        Some(self)
    }
    fn exponential(&self) -> Option<&dyn Exponential<C>> {
        Some(self)
    }
}

impl NamedConstants<C> for ComplexAlgebra {
    fn e(&self) -> C {
        Complex::new(std::f64::consts::E, 0.0)
    }
    fn pi(&self) -> C {
        Complex::new(std::f64::consts::PI, 0.0)
    }
    fn phi(&self) -> C {
        Complex::new((1.0 + 5.0_f64.sqrt()) / 2.0, 0.0)
    }
    fn gamma(&self) -> C {
        Complex::new(0.577_215_664_901_532_9, 0.0)
    }
}

impl Trig<C> for ComplexAlgebra {
    fn cos(&self, x: &C) -> C {
        x.cos()
    }
    fn sin(&self, x: &C) -> C {
        x.sin()
    }
    fn tan(&self, x: &C) -> C {
        x.tan()
    }
    fn sinc(&self, x: &C) -> C {
        if x.norm() == 0.0 {
            Complex::new(1.0, 0.0)
        } else {
            x.sin() / x
        }
    }
    fn sincpi(&self, x: &C) -> C {
        self.sinc(&(x * std::f64::consts::PI))
    }
}

impl InverseTrig<C> for ComplexAlgebra {
    fn acos(&self, x: &C) -> C {
        x.acos()
    }
    fn asin(&self, x: &C) -> C {
        x.asin()
    }
    fn atan(&self, x: &C) -> C {
        x.atan()
    }
}

impl Hyperbolic<C> for ComplexAlgebra {
    fn cosh(&self, x: &C) -> C {
        x.cosh()
    }
    fn sinh(&self, x: &C) -> C {
        x.sinh()
    }
    fn tanh(&self, x: &C) -> C {
        x.tanh()
    }
    fn sinch(&self, x: &C) -> C {
        if x.norm() == 0.0 {
            Complex::new(1.0, 0.0)
        } else {
            x.sinh() / x
        }
    }
    fn sinchpi(&self, x: &C) -> C {
        self.sinch(&(x * std::f64::consts::PI))
    }
}

impl InverseHyperbolic<C> for ComplexAlgebra {
    fn acosh(&self, x: &C) -> C {
        x.acosh()
    }
    fn asinh(&self, x: &C) -> C {
        x.asinh()
    }
    fn atanh(&self, x: &C) -> C {
        x.atanh()
    }
}

impl Roots<C> for ComplexAlgebra {
    fn sqrt(&self, x: &C) -> C {
        x.sqrt()
    }
    fn cbrt(&self, x: &C) -> C {
        x.cbrt()
    }
}

impl Exponential<C> for ComplexAlgebra {
    fn exp(&self, x: &C) -> C {
        x.exp()
    }
    fn log(&self, x: &C) -> C {
        x.ln()
    }
}
