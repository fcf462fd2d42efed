use crate::{Matrix, MatrixError};
use crate::util::zip_eq;

/// Standard matrix product of an `m x n` and an `n x p` matrix.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>
{
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::dimension_mismatch(a.dims(), b.dims()));
    }

    // this is suboptimal.  who cares.
    let b_t = b.to_transpose();
    let mut data = Vec::with_capacity(a.num_rows() * b.num_cols());
    for a_row in a.rows() {
        for b_col in b_t.rows() {
            // summed in order of increasing k
            let mut acc = 0.0;
            for (x, y) in zip_eq(a_row, b_col) {
                acc += x * y;
            }
            data.push(acc);
        }
    }
    Matrix::from_row_major_data((a.num_rows(), b.num_cols()), data)
}

pub fn transpose<T: Clone>(a: &Matrix<T>) -> Matrix<T>
{ a.to_transpose() }
