use super::constants::{EPSILON, SIGMA};
use crate::error::PairDistError;
use ndarray::{Array1, Array4, ArrayView4, Axis};

/// Radial derivative `U'(r)` of the Lennard-Jones reference potential.
///
/// # Errors
///
/// Returns `PairDistError::ZeroDistance` for `r = 0`, where the derivative is singular.
///
/// # Examples
///
/// ```
/// use abp_pairdist::potential_derivative;
///
/// let force_free = potential_derivative(2f64.powf(1.0 / 6.0)).unwrap();
/// assert!(force_free.abs() < 1e-12);
/// ```
#[inline]
pub fn potential_derivative(r: f64) -> Result<f64, PairDistError> {
    if r == 0.0 {
        return Err(PairDistError::ZeroDistance);
    }
    let s = SIGMA / r;
    Ok(24.0 * EPSILON / SIGMA * (-2.0 * s.powi(13) + s.powi(7)))
}

/// Evaluates `U'(r)` for every distance in `r`.
pub fn potential_derivative_array(r: &[f64]) -> Result<Array1<f64>, PairDistError> {
    r.iter()
        .map(|&distance| potential_derivative(distance))
        .collect::<Result<Vec<_>, _>>()
        .map(Array1::from)
}

/// Converts a reconstructed `-gU'` field into the pair-distribution function `g`.
///
/// `field` is indexed `(r, theta1, theta2, phi2)` and `r` must list the distances of its first
/// axis. Each radial slab is divided by `-U'(r)`. At `r = 2^(1/6)` the division is `0/0` and the
/// result is not finite.
///
/// # Errors
///
/// Returns `PairDistError::ShapeMismatch` if `r` does not match the radial axis, or
/// `PairDistError::ZeroDistance` if it contains zero.
pub fn pair_distribution(
    field: ArrayView4<'_, f64>,
    r: &[f64],
) -> Result<Array4<f64>, PairDistError> {
    if field.len_of(Axis(0)) != r.len() {
        return Err(PairDistError::ShapeMismatch(format!(
            "field has {} radial entries but {} distances were given",
            field.len_of(Axis(0)),
            r.len()
        )));
    }

    let derivative = potential_derivative_array(r)?;
    let mut g = field.to_owned();
    for (mut slab, &u_prime) in g.axis_iter_mut(Axis(0)).zip(derivative.iter()) {
        slab.mapv_inplace(|value| -value / u_prime);
    }
    Ok(g)
}
