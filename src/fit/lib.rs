/* ************************************************************************ **
** This file is part of polyreg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of polyreg is provided under this permissive       **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

//! Least-squares polynomial fitting.
//!
//! ```text
//! points, degree
//!   -> vandermonde(xs, degree)              V
//!   -> transpose / multiply                 VᵗV, Vᵗy
//!   -> polyreg_linalg::invert               (VᵗV)⁻¹
//!   -> multiply, take the column            Coefficients
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate itertools;
extern crate polyreg_linalg;
extern crate polyreg_matrix;
#[cfg(test)]
#[macro_use]
extern crate polyreg_assert_close;
#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub use self::vandermonde::vandermonde;
mod vandermonde;

pub use self::regress::regress;
mod regress;

pub use self::poly::{evaluate, format_formula, Coefficients};
mod poly;

mod general_format;

use ::polyreg_linalg::InvertError;
use ::polyreg_matrix::MatrixError;
use ::std::fmt;

/// A sample point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self { Point { x, y } }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Point { x, y } }
}

/// Degree of a fitted polynomial.  Always at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u32);

impl Degree {
    pub fn new(degree: i64) -> Result<Self, FitError>
    {
        if degree < 1 || degree > i64::from(u32::max_value()) {
            return Err(FitError::InvalidDegree(degree));
        }
        Ok(Degree(degree as u32))
    }

    pub fn get(self) -> u32 { self.0 }

    /// Number of coefficients in a polynomial of this degree.
    pub fn num_coeffs(self) -> usize { self.0 as usize + 1 }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { fmt::Display::fmt(&self.0, f) }
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum FitError {
    #[fail(display = "need at least {} points for degree {} regression (have {})", needed, degree, points)]
    InsufficientPoints { points: usize, needed: usize, degree: u32 },

    #[fail(display = "invalid polynomial degree: {}", _0)]
    InvalidDegree(i64),

    #[fail(display = "regression failed: {}", _0)]
    RegressionFailed(#[fail(cause)] InvertError),

    #[fail(display = "{}", _0)]
    Matrix(#[fail(cause)] MatrixError),
}

impl From<InvertError> for FitError {
    fn from(error: InvertError) -> Self { FitError::RegressionFailed(error) }
}

impl From<MatrixError> for FitError {
    fn from(error: MatrixError) -> Self { FitError::Matrix(error) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_bounds() {
        assert_eq!(Degree::new(1).unwrap().get(), 1);
        assert_eq!(Degree::new(10).unwrap().num_coeffs(), 11);
        assert_eq!(Degree::new(0), Err(FitError::InvalidDegree(0)));
        assert_eq!(Degree::new(-3), Err(FitError::InvalidDegree(-3)));
    }

    #[test]
    fn insufficient_points_message() {
        let e = FitError::InsufficientPoints { points: 2, needed: 3, degree: 2 };
        assert_eq!(e.to_string(), "need at least 3 points for degree 2 regression (have 2)");
    }
}
