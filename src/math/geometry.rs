//! Conversion of particle orientations into the angle triple of the series.
//!
//! `theta1` is measured between the first orientation and the connecting vector, `theta2`
//! between the two orientations, and `phi2` is the azimuth of the second orientation in the plane
//! perpendicular to the first one, counted from the projection of the connecting vector.

use super::constants::PARALLEL_COS_LIMIT;
use crate::error::PairDistError;
use crate::types::Angles;
use nalgebra::Vector3;

/// Computes `(theta1, theta2, phi2)` from two orientations and the connecting vector.
///
/// The inputs need not be normalized. When either orientation pair is within one degree of
/// parallel or antiparallel, the azimuth is undefined and `phi2` is set to zero.
///
/// # Errors
///
/// Returns `PairDistError::DegenerateVector` if any input has zero length.
///
/// # Examples
///
/// ```
/// use abp_pairdist::angles_from_vectors;
///
/// let angles = angles_from_vectors([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
/// assert!((angles.theta1 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((angles.theta2 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!(angles.phi2.abs() < 1e-12);
/// ```
pub fn angles_from_vectors(
    u1: [f64; 3],
    u2: [f64; 3],
    u_delta: [f64; 3],
) -> Result<Angles, PairDistError> {
    let u1 = normalize(u1, "u1")?;
    let u2 = normalize(u2, "u2")?;
    let u_delta = normalize(u_delta, "u_delta")?;

    let u1_u2 = u1.dot(&u2).clamp(-1.0, 1.0);
    let u1_ud = u1.dot(&u_delta).clamp(-1.0, 1.0);

    let theta1 = u1_ud.acos();
    let theta2 = u1_u2.acos();

    let phi2 = if u1_u2.abs() > PARALLEL_COS_LIMIT || u1_ud.abs() > PARALLEL_COS_LIMIT {
        0.0
    } else {
        let ey = u1.cross(&u_delta).normalize();
        let ex = ey.cross(&u1);
        let cos_phi = u2.dot(&ex) / (1.0 - u1_u2 * u1_u2).sqrt();
        cos_phi.clamp(-1.0, 1.0).acos()
    };

    Ok(Angles {
        theta1,
        theta2,
        phi2,
    })
}

fn normalize(v: [f64; 3], name: &'static str) -> Result<Vector3<f64>, PairDistError> {
    let v = Vector3::from(v);
    let norm = v.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(PairDistError::DegenerateVector(name));
    }
    Ok(v / norm)
}
