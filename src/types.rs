//! This module defines the core value types shared by the reconstruction pipeline.
//!
//! It includes the `IndexTriple` identifying one term of the angular series, the `Family`
//! split between alpha and beta coefficients, the `AngleInput` accepted for each of the three
//! angles, and the `Angles` triple produced from orientation vectors.

use ndarray::{Array1, Array3};
use std::fmt;

/// The angular-frequency identifier `(h, j, k)` of one term of the series.
///
/// `h` is the frequency in `theta1`, `j` in `theta2` and `k` in `phi2`. Every component lies in
/// `0..=2`; the constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexTriple {
    pub h: u8,
    pub j: u8,
    pub k: u8,
}

impl IndexTriple {
    /// Creates a triple, returning `None` if any component exceeds 2.
    pub const fn new(h: u8, j: u8, k: u8) -> Option<Self> {
        if h > 2 || j > 2 || k > 2 {
            None
        } else {
            Some(Self { h, j, k })
        }
    }

    /// The coefficient family this triple reads from.
    ///
    /// Terms odd in `phi2` (`k = 1`) use the sine basis and the beta table; all others use the
    /// cosine basis and the alpha table.
    pub const fn family(&self) -> Family {
        if self.k == 1 { Family::Beta } else { Family::Alpha }
    }
}

impl fmt::Display for IndexTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.j, self.k)
    }
}

/// The two coefficient subsets of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Cosine terms, `k` in `{0, 2}`.
    Alpha,
    /// Sine terms, `k = 1`.
    Beta,
}

impl Family {
    /// Applies the trigonometric basis function of this family.
    #[inline]
    pub fn basis(self, x: f64) -> f64 {
        match self {
            Family::Alpha => x.cos(),
            Family::Beta => x.sin(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Alpha => f.write_str("alpha"),
            Family::Beta => f.write_str("beta"),
        }
    }
}

/// One of the three angle arguments of a reconstruction.
///
/// Scalars and sequences are expanded into a rectangular grid by outer-product indexing; grids
/// are used as given and must all share one shape. Mixing grids with scalars or sequences is
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleInput {
    /// One angle, a grid axis of length one.
    Scalar(f64),
    /// The points of one grid axis.
    Sequence(Array1<f64>),
    /// The angle at every point of a prebuilt grid.
    Grid(Array3<f64>),
}

impl From<f64> for AngleInput {
    fn from(value: f64) -> Self {
        AngleInput::Scalar(value)
    }
}

impl From<Vec<f64>> for AngleInput {
    fn from(values: Vec<f64>) -> Self {
        AngleInput::Sequence(Array1::from(values))
    }
}

impl From<&[f64]> for AngleInput {
    fn from(values: &[f64]) -> Self {
        AngleInput::Sequence(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for AngleInput {
    fn from(values: Array1<f64>) -> Self {
        AngleInput::Sequence(values)
    }
}

impl From<Array3<f64>> for AngleInput {
    fn from(grid: Array3<f64>) -> Self {
        AngleInput::Grid(grid)
    }
}

/// The scalar angle triple describing a particle pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    /// Angle between the first orientation and the connecting vector.
    pub theta1: f64,
    /// Angle between the two orientations.
    pub theta2: f64,
    /// Azimuth of the second orientation around the first one.
    pub phi2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_triple_rejects_out_of_range_components() {
        assert!(IndexTriple::new(0, 0, 0).is_some());
        assert!(IndexTriple::new(2, 2, 2).is_some());
        assert!(IndexTriple::new(3, 0, 0).is_none());
        assert!(IndexTriple::new(0, 0, 9).is_none());
    }

    #[test]
    fn test_family_selection_by_phi_frequency() {
        assert_eq!(IndexTriple::new(1, 1, 1).unwrap().family(), Family::Beta);
        assert_eq!(IndexTriple::new(1, 1, 0).unwrap().family(), Family::Alpha);
        assert_eq!(IndexTriple::new(2, 0, 2).unwrap().family(), Family::Alpha);
    }

    #[test]
    fn test_triple_display() {
        assert_eq!(IndexTriple::new(1, 2, 0).unwrap().to_string(), "(1, 2, 0)");
        assert_eq!(Family::Beta.to_string(), "beta");
    }
}
