use crate::FitError;

use ::polyreg_matrix::Matrix;

/// Design matrix for a polynomial fit.
///
/// Row `i` is `[1, x_i, x_i^2, ..., x_i^degree]`.  A degree of 0 gives a
/// single column of ones; negative degrees are rejected with
/// [`FitError::InvalidDegree`].
///
/// All `xs.len() * (degree + 1)` entries are allocated up front.  A degree
/// whose matrix cannot be allocated is also reported as `InvalidDegree`.
pub fn vandermonde(xs: &[f64], degree: i64) -> Result<Matrix, FitError>
{
    if degree < 0 || degree > i64::from(u32::max_value()) {
        return Err(FitError::InvalidDegree(degree));
    }
    let width = degree as usize + 1;

    let mut data = Vec::<f64>::new();
    xs.len().checked_mul(width)
        .and_then(|len| data.try_reserve_exact(len).ok())
        .ok_or(FitError::InvalidDegree(degree))?;
    for &x in xs {
        data.push(1.0);
        data.extend((1..width).map(|power| x.powf(power as f64)));
    }
    Ok(Matrix::from_row_major_data((xs.len(), width), data)?)
}
