//! This module contains the two levels of fit functions the coefficient table parameterizes.
//!
//! The inner level maps packing density and Péclet number to one scalar through a
//! `ParameterRow`. The outer level takes several such scalars as the arguments of an
//! exponentially-modified-Gaussian fit in the particle distance, yielding one Fourier coefficient
//! of the angular series.

mod inner;
mod outer;

pub use inner::{PARAMETER_ROW_LEN, ParameterRow};
pub use outer::{EmgParams, FitVariant, FourierFit, emg};
