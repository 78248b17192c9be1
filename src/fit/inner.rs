//! The density/Péclet fit that produces each scalar argument of a Fourier-coefficient fit.

/// Number of coefficients in one parameter row.
pub const PARAMETER_ROW_LEN: usize = 20;

/// The twenty coefficients `u1..u20` of one density/Péclet fit.
///
/// The fit is a cubic polynomial in the packing density whose four coefficients are each a
/// five-term expansion in `Pe^-1, Pe^-1/2, 1, Pe^1/2, Pe`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRow(pub [f64; PARAMETER_ROW_LEN]);

impl ParameterRow {
    /// Evaluates the fit at the given packing density and Péclet number.
    ///
    /// The Péclet number must be positive; the reconstruction entry points check this before
    /// any row is evaluated.
    #[inline]
    pub fn evaluate(&self, density: f64, peclet: f64) -> f64 {
        let sqrt_pe = peclet.sqrt();
        let mut density_power = 1.0;
        let mut total = 0.0;

        for u in self.0.chunks_exact(5) {
            let coefficient =
                u[0] / peclet + u[1] / sqrt_pe + u[2] + u[3] * sqrt_pe + u[4] * peclet;
            total += coefficient * density_power;
            density_power *= density;
        }

        total
    }
}

impl TryFrom<&[f64]> for ParameterRow {
    type Error = usize;

    /// Fails with the actual length when the slice does not hold exactly twenty values.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        <[f64; PARAMETER_ROW_LEN]>::try_from(values)
            .map(ParameterRow)
            .map_err(|_| values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_row(position: usize) -> ParameterRow {
        let mut u = [0.0; PARAMETER_ROW_LEN];
        u[position] = 1.0;
        ParameterRow(u)
    }

    #[test]
    fn test_all_zero_coefficients_vanish() {
        let row = ParameterRow([0.0; PARAMETER_ROW_LEN]);
        for &(density, peclet) in &[(0.0, 1.0), (0.2, 100.0), (0.9, 0.01)] {
            assert_eq!(row.evaluate(density, peclet), 0.0);
        }
    }

    #[test]
    fn test_peclet_powers_of_constant_term() {
        let (density, peclet) = (0.3, 16.0);
        assert_relative_eq!(unit_row(0).evaluate(density, peclet), 1.0 / 16.0);
        assert_relative_eq!(unit_row(1).evaluate(density, peclet), 0.25);
        assert_relative_eq!(unit_row(2).evaluate(density, peclet), 1.0);
        assert_relative_eq!(unit_row(3).evaluate(density, peclet), 4.0);
        assert_relative_eq!(unit_row(4).evaluate(density, peclet), 16.0);
    }

    #[test]
    fn test_density_powers() {
        let (density, peclet) = (0.5, 4.0);
        assert_relative_eq!(unit_row(7).evaluate(density, peclet), 0.5);
        assert_relative_eq!(unit_row(12).evaluate(density, peclet), 0.25);
        assert_relative_eq!(unit_row(17).evaluate(density, peclet), 0.125);
        assert_relative_eq!(unit_row(19).evaluate(density, peclet), 0.125 * 4.0);
    }

    #[test]
    fn test_matches_expanded_formula() {
        let u: [f64; PARAMETER_ROW_LEN] = std::array::from_fn(|i| 0.1 * (i as f64 + 1.0));
        let (d, pe): (f64, f64) = (0.35, 42.0);
        let s = pe.sqrt();
        let expected = (u[0] / pe + u[1] / s + u[2] + u[3] * s + u[4] * pe)
            + (u[5] / pe + u[6] / s + u[7] + u[8] * s + u[9] * pe) * d
            + (u[10] / pe + u[11] / s + u[12] + u[13] * s + u[14] * pe) * d.powi(2)
            + (u[15] / pe + u[16] / s + u[17] + u[18] * s + u[19] * pe) * d.powi(3);
        assert_relative_eq!(ParameterRow(u).evaluate(d, pe), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_try_from_slice_length() {
        let values = vec![1.0; PARAMETER_ROW_LEN];
        assert!(ParameterRow::try_from(values.as_slice()).is_ok());
        assert_eq!(ParameterRow::try_from(&values[..19]), Err(19));
    }
}
