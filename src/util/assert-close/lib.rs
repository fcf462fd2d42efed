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

//! `assert_close!` and the `CheckClose` trait behind it.
//!
//! ```text
//! assert_close!(1.0, 1.0 + 1e-12);
//! assert_close!(abs=1e-6, expected, actual);
//! assert_close!(rel=1e-8, abs=1e-8, expected, actual, "at step {}", i);
//! ```

#[macro_use]
extern crate failure;

use ::std::fmt;

/// Relative tolerance used when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close_parse!{
            [rel = $crate::DEFAULT_NONZERO_TOL] [abs = 0.0] $($t)*
        }
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_parse {
    // tolerance overrides; later ones win
    ([rel = $r:expr] [abs = $a:expr] rel=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{ [rel = $tol] [abs = $a] $($rest)* }
    };
    ([rel = $r:expr] [abs = $a:expr] abs=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{ [rel = $r] [abs = $tol] $($rest)* }
    };

    // operands, with or without a message
    ([rel = $r:expr] [abs = $a:expr] $left:expr, $right:expr $(,)*) => {
        $crate::__assert_close_parse!{ @go ($r) ($a) ($left) ($right) ("not nearly equal!") }
    };
    ([rel = $r:expr] [abs = $a:expr] $left:expr, $right:expr, $($fmt:tt)+) => {
        $crate::__assert_close_parse!{ @go ($r) ($a) ($left) ($right) ($($fmt)+) }
    };

    (@go ($r:expr) ($a:expr) ($left:expr) ($right:expr) ($($fmt:tt)+)) => {{
        let left = $left;
        let right = $right;
        let tol = $crate::Tolerances { rel: $r, abs: $a };
        if let Err(e) = $crate::CheckClose::check_close(&left, &right, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, left, right, e,
            );
        }
    }};
}

/// Python's `math.isclose`.
#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, tol: Tolerances) -> bool {
    let Tolerances { abs, rel } = tol;
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // also catches infinities of the same sign
    if a == b { return true; }

    if a.is_infinite() || b.is_infinite() { return false; }

    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T,
}

/// The first pair of elements that were not close.
#[derive(Debug, Fail)]
pub struct CheckCloseError<T: fmt::Debug + Send + Sync + 'static = f64> {
    /// Position of the failing pair inside nested containers, outermost first.
    pub index: Vec<usize>,
    pub values: (T, T),
    pub tol: Tolerances<T>,
}

impl<T: fmt::Debug + Send + Sync + 'static> CheckCloseError<T> {
    fn at(mut self, i: usize) -> Self {
        self.index.insert(0, i);
        self
    }
}

impl<T: fmt::Debug + Send + Sync + 'static> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (ref left, ref right) = self.values;
        if !self.index.is_empty() {
            writeln!(f, "failed at index {:?}:", self.index)?;
        } else {
            writeln!(f, "failed at:")?;
        }
        write!(f, "  left: {:?}\n right: {:?}\n   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug + Send + Sync + 'static;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match __is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { index: vec![], values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len(), "check_close: length mismatch");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose> CheckClose<Vec<T>> for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self.check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}
