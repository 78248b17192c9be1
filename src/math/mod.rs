//! This module provides the closed-form physics and geometry around the reconstruction.
//!
//! It contains the constants of the reference Lennard-Jones system and the fit's validity
//! region, the derivative of the reference potential used to turn `-gU'` into `g`, and the
//! conversion of orientation vectors into the angles the series is expressed in.

/// Physical constants and numerical thresholds.
///
/// This module fixes the Lennard-Jones parameters of the simulations the coefficients were
/// fitted to, the reference distance `2^(1/6)`, the distance range of the fitted data and the
/// near-parallel threshold of the angle conversion.
pub mod constants;

/// Angle triple from orientation vectors.
pub mod geometry;

/// Derivative of the reference potential and the `-gU'` to `g` conversion.
pub mod potential;
