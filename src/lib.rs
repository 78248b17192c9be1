pub mod error;
pub mod fit;
pub mod math;
pub mod params;
pub mod reconstruct;
pub mod types;

pub use error::PairDistError;
pub use math::geometry::angles_from_vectors;
pub use math::potential::{pair_distribution, potential_derivative, potential_derivative_array};
pub use params::{CoefficientMap, CoefficientTable};
pub use reconstruct::{ReconstructOptions, Reconstructor};
pub use types::{AngleInput, Angles, Family, IndexTriple};

use ndarray::Array4;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

static DEFAULT_COEFFICIENTS: OnceLock<CoefficientTable> = OnceLock::new();
static DEFAULT_COEFFICIENTS_LOAD: Mutex<()> = Mutex::new(());

/// Returns the bundled coefficient table, reading it on first use.
///
/// The file is read at most once per process; later calls return the cached table. A failed
/// read is not cached, so a later call retries.
pub fn get_default_coefficients() -> Result<&'static CoefficientTable, PairDistError> {
    if let Some(table) = DEFAULT_COEFFICIENTS.get() {
        return Ok(table);
    }

    let _guard = DEFAULT_COEFFICIENTS_LOAD
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = DEFAULT_COEFFICIENTS.get() {
        return Ok(table);
    }

    let table = CoefficientTable::load_from_file(&CoefficientTable::default_path())?;
    Ok(DEFAULT_COEFFICIENTS.get_or_init(|| table))
}

/// Loads the alpha and beta coefficient tables from a CSV file.
pub fn load_parameter_file(path: impl AsRef<Path>) -> Result<CoefficientTable, PairDistError> {
    CoefficientTable::load_from_file(path.as_ref())
}

/// Reconstructs `-gU'`, falling back to the default table for any table not supplied.
///
/// See [`Reconstructor::reconstruct`] for the accepted angle inputs and the layout of the
/// result.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_gu_prime(
    r: &[f64],
    theta1: impl Into<AngleInput>,
    theta2: impl Into<AngleInput>,
    phi2: impl Into<AngleInput>,
    density: f64,
    peclet: f64,
    alpha: Option<&CoefficientMap>,
    beta: Option<&CoefficientMap>,
) -> Result<Array4<f64>, PairDistError> {
    reconstructor_for(alpha, beta)?.reconstruct(
        r,
        theta1.into(),
        theta2.into(),
        phi2.into(),
        density,
        peclet,
    )
}

/// Reconstructs `-gU'` for a pair configuration given by orientation vectors.
///
/// Caller-supplied tables are used for the evaluation; only missing ones fall back to the
/// default table.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_gu_prime_vectors(
    r: &[f64],
    u1: [f64; 3],
    u2: [f64; 3],
    u_delta: [f64; 3],
    density: f64,
    peclet: f64,
    alpha: Option<&CoefficientMap>,
    beta: Option<&CoefficientMap>,
) -> Result<Array4<f64>, PairDistError> {
    reconstructor_for(alpha, beta)?.reconstruct_from_vectors(r, u1, u2, u_delta, density, peclet)
}

fn reconstructor_for(
    alpha: Option<&CoefficientMap>,
    beta: Option<&CoefficientMap>,
) -> Result<Reconstructor, PairDistError> {
    match (alpha, beta) {
        (Some(alpha), Some(beta)) => Reconstructor::from_maps(alpha, beta),
        (alpha, beta) => {
            let defaults = get_default_coefficients()?;
            Reconstructor::from_maps(
                alpha.unwrap_or(&defaults.alpha),
                beta.unwrap_or(&defaults.beta),
            )
        }
    }
}
