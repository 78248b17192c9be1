//! This module defines configuration options for the reconstruction.
//!
//! It provides the `ReconstructOptions` struct, which controls how the series is evaluated and
//! how strictly inputs outside the fitted region are reported. None of the options change the
//! value of a successful reconstruction beyond floating-point rounding.

/// Configuration parameters for a `Reconstructor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructOptions {
    /// Evaluate the angular basis functions and the radial slabs on the rayon thread pool.
    ///
    /// Every grid cell and every slab is computed independently, so the result does not depend
    /// on this flag. Disable it when the caller already parallelizes over many small
    /// reconstructions.
    pub parallel: bool,
    /// Emit warnings for inputs outside the region covered by the fitted data.
    ///
    /// Distances outside `[0.7775, 2^(1/6)]` and packing densities outside `[0, 1]` are still
    /// evaluated; the fit simply was not made for them.
    pub check_bounds: bool,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            check_bounds: true,
        }
    }
}
