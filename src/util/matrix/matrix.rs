use crate::MatrixError;

use ::std::ops::{Index, IndexMut};
use ::polyreg_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Owned matrix type with C layout.
///
/// The row length is stored once, so a `Matrix` can never be ragged.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: height * width == data.len()
    height: usize,
    width: usize,
}

impl<T> Matrix<T> {
    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Result<Self, MatrixError>
    {
        if data.len() != height * width {
            return Err(MatrixError::DataLength(height, width, height * width, data.len()));
        }
        Ok(Matrix { data, height, width })
    }

    /// An `n x 1` matrix.
    pub fn column(data: Vec<T>) -> Self
    { Matrix { height: data.len(), width: 1, data } }

    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn is_square(&self) -> bool { self.height == self.width }

    pub fn row_major_data(&self) -> &[T] { &self.data }
    pub fn into_row_major_data(self) -> Vec<T> { self.data }

    pub fn row(&self, r: usize) -> &[T]
    {
        assert!(r < self.height, "row {} out of bounds for {} rows", r, self.height);
        &self.data[r * self.width..(r + 1) * self.width]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T]
    {
        assert!(r < self.height, "row {} out of bounds for {} rows", r, self.height);
        &mut self.data[r * self.width..(r + 1) * self.width]
    }

    // (not `chunks`, which can't produce the empty rows of an n x 0 matrix)
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_
    { (0..self.height).map(move |r| self.row(r)) }

    pub fn col(&self, c: usize) -> impl ExactSizeIterator<Item = &T> + '_
    {
        assert!(c < self.width, "column {} out of bounds for {} columns", c, self.width);
        (0..self.height).map(move |r| &self[(r, c)])
    }

    pub fn swap_rows(&mut self, a: usize, b: usize)
    {
        assert!(a < self.height && b < self.height);
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let w = self.width;
        let (head, tail) = self.data.split_at_mut(hi * w);
        head[lo * w..(lo + 1) * w].swap_with_slice(&mut tail[..w]);
    }
}

impl<T: Clone> Matrix<T> {
    pub fn new_filled((height, width): (usize, usize), fill: &T) -> Self
    { Matrix {
        data: vec![fill.clone(); height * width],
        height,
        width,
    }}

    /// Builds a matrix from nested rows, which must all have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError>
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::RaggedRows { row: r, expected: width, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { data, height: rows.len(), width })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    { self.rows().map(|row| row.to_vec()).collect() }

    pub fn to_transpose(&self) -> Self
    {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.width {
            data.extend(self.col(c).cloned());
        }
        Matrix { data, height: self.width, width: self.height }
    }
}

impl Matrix<f64> {
    pub fn identity(n: usize) -> Self
    {
        let mut out = Matrix::new_filled((n, n), &0.0);
        for i in 0..n {
            out[(i, i)] = 1.0;
        }
        out
    }

    /// Fallible form of `&a * &b`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError>
    { crate::ops::multiply(self, rhs) }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &T
    {
        debug_assert!(r < self.height && c < self.width);
        &self.data[r * self.width + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T
    {
        debug_assert!(r < self.height && c < self.width);
        &mut self.data[r * self.width + c]
    }
}

impl<'a, 'b> ::std::ops::Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on incompatible shapes.  Use [`Matrix::try_mul`] otherwise.
    fn mul(self, rhs: &'b Matrix) -> Matrix
    {
        match self.try_mul(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

impl CheckClose for Matrix<f64> {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.dims(), other.dims(), "check_close: matrix shape mismatch");
        let width = self.width;
        self.data.check_close(&other.data, tol)
            .map_err(|mut e| {
                // report (row, col) instead of the flat index
                if let Some(&flat) = e.index.first() {
                    e.index = vec![flat / width, flat % width];
                }
                e
            })
    }
}
