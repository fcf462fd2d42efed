/* ********************************************************************** **
**  This file is part of polyreg.                                         **
**                                                                        **
**  polyreg is free software: you can redistribute it and/or modify it    **
**  under the terms of the GNU General Public License as published by the **
**  Free Software Foundation, either version 3 of the License, or (at     **
**  your option) any later version.                                       **
**                                                                        **
**      http://www.gnu.org/licenses/                                      **
**                                                                        **
** Do note that, while the whole of polyreg is licensed under the GPL,    **
** many parts of it are licensed under more permissive terms.             **
** ********************************************************************** */

//! Everything a user of the workspace is likely to want, in one place.

pub extern crate polyreg_fit as fit;
pub extern crate polyreg_linalg as linalg;
pub extern crate polyreg_matrix as matrix;
pub extern crate polyreg_tasks as tasks;

pub use crate::fit::{evaluate, format_formula, regress, vandermonde};
pub use crate::fit::{Coefficients, Degree, FitError, Point};
pub use crate::linalg::{invert, InvertError, PIVOT_THRESHOLD};
pub use crate::matrix::{multiply, transpose, Matrix, MatrixError};
pub use crate::tasks::{FitSession, Settings};
