use ::polyreg_fit::{Coefficients, Point};

/// `(1/n) Σ (y_i - p(x_i))²`, or `None` for no points.
pub fn mean_squared_error(coeffs: &Coefficients, points: &[Point]) -> Option<f64>
{
    if points.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for p in points {
        let residual = p.y - coeffs.evaluate(p.x);
        sum += residual * residual;
    }
    Some(sum / points.len() as f64)
}

/// Evaluates the polynomial at `count` evenly spaced x values spanning the
/// samples, both ends included.
///
/// Empty if there are no points or `count` is zero.
pub fn sample_curve(coeffs: &Coefficients, points: &[Point], count: usize) -> Vec<Point>
{
    let (lo, hi) = match x_range(points) {
        Some(range) => range,
        None => return vec![],
    };

    let step = match count {
        0 => return vec![],
        1 => 0.0,
        _ => (hi - lo) / (count - 1) as f64,
    };
    (0..count)
        .map(|i| match i + 1 == count {
            // exactly `hi`, rather than whatever the accumulated step gives
            true if count > 1 => hi,
            _ => lo + i as f64 * step,
        })
        .map(|x| Point::new(x, coeffs.evaluate(x)))
        .collect()
}

fn x_range(points: &[Point]) -> Option<(f64, f64)>
{
    let first = points.first()?.x;
    Some(points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
}
