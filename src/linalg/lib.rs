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

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate polyreg_matrix;
#[cfg(test)]
#[macro_use]
extern crate polyreg_assert_close;
#[cfg(test)]
extern crate rand;

pub use self::gauss_jordan::{invert, PIVOT_THRESHOLD};
mod gauss_jordan;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum InvertError {
    #[fail(display = "cannot invert a non-square {}x{} matrix", _0, _1)]
    NotSquare(usize, usize),

    #[fail(display = "matrix is singular (no usable pivot in column {})", column)]
    SingularMatrix { column: usize },
}
