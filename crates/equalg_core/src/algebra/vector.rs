//! Elementwise vector algebra with a fixed dimension.
//!
//! Literals are bracket-delimited, `[a, b, ...]`, and must match the
//! algebra's dimension; a plain numeral broadcasts to every component so
//! mixed expressions like `[1, 2] * 3` work. All operations and the declared
//! capability families apply componentwise.

use crate::traits::{Algebra, Exponential, NamedConstants, Roots, Trig};
use anyhow::{anyhow, bail, Result};

/// `dim`-component vectors of `f64` under elementwise arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct VectorAlgebra {
    dim: usize,
}

impl VectorAlgebra {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn zip(&self, a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
        a.iter().zip(b.iter()).map(|(x, y)| f(*x, *y)).collect()
    }

    fn map(&self, a: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
        a.iter().map(|x| f(*x)).collect()
    }

    fn broadcast(&self, value: f64) -> Vec<f64> {
        vec![value; self.dim]
    }
}

impl Algebra for VectorAlgebra {
    type Element = Vec<f64>;

    fn name(&self) -> &str {
        "vector"
    }

    fn element_from_str(&self, text: &str) -> Result<Vec<f64>> {
        let trimmed = text.trim();
        let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            // Plain numerals broadcast.
            let value = trimmed
                .parse::<f64>()
                .map_err(|_| anyhow!("malformed vector literal `{trimmed}`"))?;
            return Ok(self.broadcast(value));
        };
        let components = inner
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| anyhow!("malformed vector component `{}`", part.trim()))
            })
            .collect::<Result<Vec<f64>>>()?;
        if components.len() != self.dim {
            bail!(
                "vector literal `{trimmed}` has {} components, expected {}",
                components.len(),
                self.dim
            );
        }
        Ok(components)
    }

    fn zero(&self) -> Vec<f64> {
        self.broadcast(0.0)
    }

    fn add(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, |x, y| x + y)
    }
    fn sub(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, |x, y| x - y)
    }
    fn mul(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, |x, y| x * y)
    }
    fn div(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, |x, y| x / y)
    }
    fn rem(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, |x, y| x % y)
    }
    fn pow(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, f64::powf)
    }
    fn neg(&self, a: &Vec<f64>) -> Vec<f64> {
        self.map(a, |x| -x)
    }
    fn min(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, f64::min)
    }
    fn max(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        self.zip(a, b, f64::max)
    }

    fn constants(&self) -> Option<&dyn NamedConstants<Vec<f64>>> {
        Some(self)
    }
    fn trig(&self) -> Option<&dyn Trig<Vec<f64>>> {
        Some(self)
    }
    fn roots(&self) -> Option<&dyn Roots<Vec<f64>>> {
        Some(self)
    }
    fn exponential(&self) -> Option<&dyn Exponential<Vec<f64>>> {
        Some(self)
    }
}

impl NamedConstants<Vec<f64>> for VectorAlgebra {
    fn e(&self) -> Vec<f64> {
        self.broadcast(std::f64::consts::E)
    }
    fn pi(&self) -> Vec<f64> {
        self.broadcast(std::f64::consts::PI)
    }
    fn phi(&self) -> Vec<f64> {
        self.broadcast((1.0 + 5.0_f64.sqrt()) / 2.0)
    }
    fn gamma(&self) -> Vec<f64> {
        self.broadcast(0.577_215_664_901_532_9)
    }
}

impl Trig<Vec<f64>> for VectorAlgebra {
    fn cos(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::cos)
    }
    fn sin(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::sin)
    }
    fn tan(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::tan)
    }
    fn sinc(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, |v| if v == 0.0 { 1.0 } else { v.sin() / v })
    }
    fn sincpi(&self, x: &Vec<f64>) -> Vec<f64> {
        let scaled = self.map(x, |v| v * std::f64::consts::PI);
        self.sinc(&scaled)
    }
}

impl Roots<Vec<f64>> for VectorAlgebra {
    fn sqrt(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::sqrt)
    }
    fn cbrt(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::cbrt)
    }
}

impl Exponential<Vec<f64>> for VectorAlgebra {
    fn exp(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::exp)
    }
    fn log(&self, x: &Vec<f64>) -> Vec<f64> {
        self.map(x, f64::ln)
    }
}
