use crate::error::PairDistError;
use crate::fit::{FitVariant, FourierFit, ParameterRow};
use crate::params::CoefficientMap;
use crate::types::{Family, IndexTriple};

const fn triple(h: u8, j: u8, k: u8) -> IndexTriple {
    IndexTriple { h, j, k }
}

/// Every term of the angular series with the fit function assigned to it.
///
/// Cosine terms run over `h, j` in `0..=2` for `k` in `{0, 2}`; sine terms (`k = 1`) start both
/// frequencies at 1 since `sin(0)` vanishes.
pub const SERIES_TERMS: [(IndexTriple, FitVariant); 22] = [
    (triple(0, 0, 0), FitVariant::FixedRoot),
    (triple(0, 1, 0), FitVariant::OneRoot),
    (triple(0, 2, 0), FitVariant::Quadratic),
    (triple(1, 0, 0), FitVariant::OneRoot),
    (triple(1, 1, 0), FitVariant::OneRoot),
    (triple(1, 2, 0), FitVariant::TwoRoots),
    (triple(2, 0, 0), FitVariant::OneRoot),
    (triple(2, 1, 0), FitVariant::OneRoot),
    (triple(2, 2, 0), FitVariant::OneRoot),
    (triple(1, 1, 1), FitVariant::OneRoot),
    (triple(1, 2, 1), FitVariant::TwoRoots),
    (triple(2, 1, 1), FitVariant::OneRoot),
    (triple(2, 2, 1), FitVariant::OneRoot),
    (triple(0, 0, 2), FitVariant::OneRoot),
    (triple(0, 1, 2), FitVariant::TwoRoots),
    (triple(0, 2, 2), FitVariant::OneRoot),
    (triple(1, 0, 2), FitVariant::TwoRoots),
    (triple(1, 1, 2), FitVariant::QuadraticRoot),
    (triple(1, 2, 2), FitVariant::TwoRoots),
    (triple(2, 0, 2), FitVariant::OneRoot),
    (triple(2, 1, 2), FitVariant::TwoRoots),
    (triple(2, 2, 2), FitVariant::OneRoot),
];

/// Looks up the fit function assigned to a triple, if the triple is part of the series.
pub fn variant_for(triple: IndexTriple) -> Option<FitVariant> {
    SERIES_TERMS
        .iter()
        .find(|(candidate, _)| *candidate == triple)
        .map(|&(_, variant)| variant)
}

/// One validated term of the series: its triple, fit function and one parameter row per
/// fit argument.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTerm {
    pub triple: IndexTriple,
    pub variant: FitVariant,
    rows: Vec<ParameterRow>,
}

impl SeriesTerm {
    /// Evaluates every argument row at `(density, peclet)` and binds the results to the fit.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::ArgumentCount` if the term holds the wrong number of rows, which
    /// `build_terms` rules out.
    pub fn fourier_fit(&self, density: f64, peclet: f64) -> Result<FourierFit, PairDistError> {
        let args: Vec<f64> = self
            .rows
            .iter()
            .map(|row| row.evaluate(density, peclet))
            .collect();
        self.variant.bind(&args)
    }

    /// The coefficient family, and with it the trigonometric basis, of this term.
    pub fn family(&self) -> Family {
        self.triple.family()
    }
}

/// Builds all series terms from the alpha and beta tables.
///
/// # Errors
///
/// Fails on the first triple whose coefficients are missing, whose row count differs from the
/// arity of its fit function, or whose rows do not hold twenty coefficients each.
pub fn build_terms(
    alpha: &CoefficientMap,
    beta: &CoefficientMap,
) -> Result<Vec<SeriesTerm>, PairDistError> {
    SERIES_TERMS
        .iter()
        .map(|&(triple, variant)| {
            let family = triple.family();
            let table = match family {
                Family::Alpha => alpha,
                Family::Beta => beta,
            };

            let raw_rows = table
                .get(&triple)
                .ok_or(PairDistError::MissingCoefficients { family, triple })?;

            if raw_rows.len() != variant.arity() {
                return Err(PairDistError::ArityMismatch {
                    triple,
                    expected: variant.arity(),
                    found: raw_rows.len(),
                });
            }

            let rows = raw_rows
                .iter()
                .enumerate()
                .map(|(row, values)| {
                    ParameterRow::try_from(values.as_slice())
                        .map_err(|found| PairDistError::RowLength { triple, row, found })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(SeriesTerm {
                triple,
                variant,
                rows,
            })
        })
        .collect()
}
