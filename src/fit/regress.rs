use crate::{vandermonde, Coefficients, Degree, FitError, Point};

use ::polyreg_linalg::invert;
use ::polyreg_matrix::{multiply, transpose, Matrix};

/// Least-squares fit of a polynomial of the given degree.
///
/// Solves the normal equations `(VᵗV) c = Vᵗy`, where `V` is the
/// Vandermonde matrix of the sample x values, by explicitly inverting `VᵗV`.
///
/// # Errors
///
/// * [`FitError::InsufficientPoints`] if there are fewer than `degree + 1`
///   points.  This is checked before any matrix is built.
/// * [`FitError::RegressionFailed`] if `VᵗV` is singular, which happens
///   when the samples have too few distinct x values (e.g. `(1, 1)` and
///   `(1, 5)` for a line).
pub fn regress(points: &[Point], degree: Degree) -> Result<Coefficients, FitError>
{
    let needed = degree.num_coeffs();
    if points.len() < needed {
        return Err(FitError::InsufficientPoints {
            points: points.len(),
            needed,
            degree: degree.get(),
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    let v = vandermonde(&xs, i64::from(degree.get()))?;
    let v_t = transpose(&v);
    let v_t_v = multiply(&v_t, &v)?;
    let v_t_y = multiply(&v_t, &Matrix::column(ys))?;

    let inv = invert(&v_t_v).map_err(|e| {
        debug!("normal equations for {} points at degree {} are singular", points.len(), degree);
        FitError::from(e)
    })?;

    let solution = multiply(&inv, &v_t_y)?;
    trace!("fitted coefficients: {:?}", solution.row_major_data());

    // `solution` is a single column
    match Coefficients::new(solution.into_row_major_data()) {
        Some(coeffs) => Ok(coeffs),
        None => unreachable!("a polynomial always has at least one coefficient"),
    }
}
