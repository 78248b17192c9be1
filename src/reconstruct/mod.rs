//! This module contains the assembly of the angular series into the `-gU'` field.
//!
//! It includes the static table of series terms with their fit functions, the `Reconstructor`
//! that validates a coefficient table once and evaluates the field on demand, and the
//! `ReconstructOptions` that configure it.

mod implementation;
mod options;
mod series;

pub use implementation::Reconstructor;
pub use options::ReconstructOptions;
pub use series::{SERIES_TERMS, SeriesTerm, variant_for};
