use crate::InvertError;

use ::polyreg_matrix::Matrix;

/// Pivots smaller than this in magnitude are treated as zero.
pub const PIVOT_THRESHOLD: f64 = 1e-12;

/// Inverts a square matrix by Gauss-Jordan elimination.
///
/// The input is never modified; elimination happens on a working copy,
/// with a second working matrix (starting as the identity) receiving every
/// row operation.  Once the copy has been reduced to the identity, the second
/// matrix is the inverse.
///
/// # Pivoting
///
/// A row swap only happens when the diagonal element is below
/// [`PIVOT_THRESHOLD`], and the replacement is the *first* row below it whose
/// entry in the pivot column exceeds the threshold, not the largest one.
/// This is weaker than true partial pivoting, and gives different results on
/// ill-conditioned input.
///
/// # Errors
///
/// * [`InvertError::NotSquare`] for non-square input.
/// * [`InvertError::SingularMatrix`] when some column has no usable pivot.
///   No partial result is produced.
pub fn invert(a: &Matrix) -> Result<Matrix, InvertError>
{
    if !a.is_square() {
        let (rows, cols) = a.dims();
        return Err(InvertError::NotSquare(rows, cols));
    }

    let n = a.num_rows();
    let mut work = a.clone();
    let mut inv = Matrix::identity(n);

    for i in 0..n {
        let mut pivot = work[(i, i)];
        if pivot.abs() < PIVOT_THRESHOLD {
            let swap_with = (i + 1..n).find(|&r| work[(r, i)].abs() > PIVOT_THRESHOLD);
            let r = match swap_with {
                Some(r) => r,
                None => return Err(InvertError::SingularMatrix { column: i }),
            };
            trace!("pivot {:e} in column {} is too small; swapping rows {} and {}", pivot, i, i, r);
            work.swap_rows(i, r);
            inv.swap_rows(i, r);
            pivot = work[(i, i)];
        }

        for x in work.row_mut(i) { *x /= pivot; }
        for x in inv.row_mut(i) { *x /= pivot; }

        let work_i = work.row(i).to_vec();
        let inv_i = inv.row(i).to_vec();
        for r in (0..n).filter(|&r| r != i) {
            let factor = work[(r, i)];
            for (x, p) in work.row_mut(r).iter_mut().zip(&work_i) {
                *x -= factor * p;
            }
            for (x, p) in inv.row_mut(r).iter_mut().zip(&inv_i) {
                *x -= factor * p;
            }
        }
    }
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::Rng;

    fn mat<R: AsRef<[f64]>>(rows: &[R]) -> Matrix
    { Matrix::from_rows(rows).unwrap() }

    fn assert_inverse(a: &Matrix, inv: &Matrix) {
        let prod = a * inv;
        assert_close!(abs=1e-6, prod, Matrix::identity(a.num_rows()), "{:#?}", a);
    }

    #[test]
    fn random_round_trip() {
        let mut rng = ::rand::thread_rng();
        for _ in 0..1000 {
            let n = rng.gen_range(1, 12);
            let data = (0..n * n).map(|_| 1.0 - 2.0 * rng.gen::<f64>()).collect();
            let mut a = Matrix::from_row_major_data((n, n), data).unwrap();
            // diagonally dominant, hence well-conditioned
            for i in 0..n {
                a[(i, i)] += n as f64;
            }
            let inv = invert(&a).unwrap();
            assert_inverse(&a, &inv);
        }
    }

    #[test]
    fn known_inverse() {
        let a = mat(&[[4.0, 7.0], [2.0, 6.0]]);
        let inv = invert(&a).unwrap();
        assert_close!(abs=1e-12, inv, mat(&[[0.6, -0.7], [-0.2, 0.4]]));
    }

    #[test]
    fn zero_pivot_needs_swap() {
        let a = mat(&[[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [2.0, 0.0, 1.0]]);
        let inv = invert(&a).unwrap();
        assert_inverse(&a, &inv);

        let perm = mat(&[[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(invert(&perm).unwrap(), perm);
    }

    // The larger entry in the last row would give an inverse that differs in
    // the final bits.  These values are what the first usable row produces.
    #[test]
    fn swap_takes_first_usable_row() {
        let a = mat(&[[0.0, 1.0, 2.0], [0.3, 0.1, 0.7], [0.9, 0.2, 0.4]]);
        assert_eq!(invert(&a).unwrap().to_rows(), vec![
            vec![-0.2222222222222222, 0.0, 1.1111111111111112],
            vec![1.1333333333333333, -4.0, 1.3333333333333333],
            vec![-0.0666666666666667, 2.0, -0.6666666666666666],
        ]);
    }

    #[test]
    fn swap_skips_rows_below_threshold() {
        // row 1 is under the threshold in column 0; row 2 is first usable
        let a = mat(&[
            [0.0, 1.0, 2.0, 1.0],
            [5e-13, 3.0, 1.0, 0.0],
            [0.3, 0.1, 0.7, 2.0],
            [0.9, 0.2, 0.4, 1.0],
        ]);
        assert_eq!(invert(&a).unwrap().to_rows(), vec![
            vec![2.220446049250313e-16, -0.06666666666666893, -0.6666666666666896, 1.333333333333378],
            vec![-0.25, 0.4150000000000138, 0.15000000000013836, -0.05000000000027667],
            vec![0.75, -0.24500000000000816, -0.4500000000000817, 0.15000000000016334],
            vec![-0.25000000000000006, 0.0750000000000025, 0.7500000000000251, -0.25000000000005],
        ]);
    }

    #[test]
    fn zero_row_is_singular() {
        let a = mat(&[[1.0, 2.0], [0.0, 0.0]]);
        assert_eq!(invert(&a).unwrap_err(), InvertError::SingularMatrix { column: 1 });
    }

    #[test]
    fn dependent_rows_are_singular() {
        let a = mat(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(match invert(&a) {
            Err(InvertError::SingularMatrix { .. }) => true,
            _ => false,
        });
    }

    #[test]
    fn pivot_below_threshold_counts_as_zero() {
        // invertible on paper, but 1e-13 is not a usable pivot
        // and there is no row below to swap in
        let a = mat(&[[1e-13, 0.0], [0.0, 1.0]]);
        assert_eq!(invert(&a).unwrap_err(), InvertError::SingularMatrix { column: 0 });
    }

    #[test]
    fn input_is_not_modified() {
        let a = mat(&[[0.0, 1.0], [3.0, 5.0]]);
        let before = a.clone();
        let _ = invert(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn not_square() {
        let a = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(invert(&a).unwrap_err(), InvertError::NotSquare(2, 3));
    }

    #[test]
    fn trivial_sizes() {
        assert_eq!(invert(&Matrix::identity(0)).unwrap().dims(), (0, 0));
        assert_eq!(invert(&mat(&[[4.0]])).unwrap(), mat(&[[0.25]]));
    }
}
