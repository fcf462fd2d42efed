use crate::general_format::general;

use ::itertools::Itertools;
use ::std::fmt;

/// Significant digits per coefficient in [`format_formula`].
const FORMULA_DIGITS: usize = 6;

/// Coefficients of a polynomial, indexed by power of x.
///
/// Never empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients(Vec<f64>);

impl Coefficients {
    /// `None` if `coeffs` is empty.
    pub fn new(coeffs: Vec<f64>) -> Option<Self>
    {
        match coeffs.is_empty() {
            true => None,
            false => Some(Coefficients(coeffs)),
        }
    }

    pub fn degree(&self) -> usize { self.0.len() - 1 }
    pub fn as_slice(&self) -> &[f64] { &self.0 }
    pub fn into_vec(self) -> Vec<f64> { self.0 }

    pub fn evaluate(&self, x: f64) -> f64 { evaluate(&self.0, x) }

    pub fn formula(&self) -> String { format_formula(&self.0) }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(&self.formula()) }
}

/// `Σ coeffs[i] * x^i`.
pub fn evaluate(coeffs: &[f64], x: f64) -> f64
{
    let mut y = 0.0;
    for (power, &c) in coeffs.iter().enumerate() {
        y += c * x.powf(power as f64);
    }
    y
}

/// Renders `c0 + c1*x^1 + c2*x^2 + ...`.
///
/// Every coefficient is written with 6 significant digits, including zero
/// and negative ones (`1 + -2*x^1 + 0*x^2`); no term is ever dropped.
pub fn format_formula(coeffs: &[f64]) -> String
{
    coeffs.iter().enumerate()
        .map(|(power, &c)| match power {
            0 => general(c, FORMULA_DIGITS),
            _ => format!("{}*x^{}", general(c, FORMULA_DIGITS), power),
        })
        .join(" + ")
}
