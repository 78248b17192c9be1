//! This module defines the physical and numerical constants of the reconstruction.
//!
//! They fix the reference interaction potential used in the simulations the coefficients were
//! fitted to, and the geometric and validity thresholds applied to user input.

/// Lennard-Jones energy scale of the reference potential.
pub const EPSILON: f64 = 1.0;

/// Lennard-Jones particle diameter of the reference potential.
pub const SIGMA: f64 = 1.0;

/// The distance `2^(1/6)`, at which the reference potential has its minimum.
///
/// Every Fourier-coefficient fit carries a root here, since the force and hence `-gU'` vanish.
pub const REFERENCE_DISTANCE: f64 = 1.122_462_048_309_373;

/// Smallest particle distance covered by the fitted data.
pub const MIN_FIT_DISTANCE: f64 = 0.7775;

/// Largest particle distance covered by the fitted data.
pub const MAX_FIT_DISTANCE: f64 = REFERENCE_DISTANCE;

/// Cosine of one degree.
///
/// Orientation vectors closer than this to parallel or antiparallel leave the azimuth `phi2`
/// undefined; it is then set to zero.
pub const PARALLEL_COS_LIMIT: f64 = 0.999_847_695_156_391_3;
