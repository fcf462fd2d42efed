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
#[cfg_attr(test, macro_use)]
extern crate polyreg_assert_close;

pub use self::matrix::Matrix;
pub use self::ops::{multiply, transpose};

mod matrix;
mod ops;
mod util;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum MatrixError {
    #[fail(display = "cannot multiply a {}x{} matrix by a {}x{} matrix", _0, _1, _2, _3)]
    DimensionMismatch(usize, usize, usize, usize),

    #[fail(display = "a {}x{} matrix needs {} elements, but {} were given", _0, _1, _2, _3)]
    DataLength(usize, usize, usize, usize),

    #[fail(display = "row {} has {} columns, but row 0 has {}", row, found, expected)]
    RaggedRows { row: usize, expected: usize, found: usize },
}

impl MatrixError {
    pub(crate) fn dimension_mismatch(left: (usize, usize), right: (usize, usize)) -> Self
    { MatrixError::DimensionMismatch(left.0, left.1, right.0, right.1) }
}
