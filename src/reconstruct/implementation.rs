//! This module implements the `Reconstructor`, which evaluates the `-gU'` field.
//!
//! The field is a finite angular series. Each term multiplies a distance-dependent Fourier
//! coefficient, obtained from the two-level fit, with a product of trigonometric functions of
//! `theta1`, `theta2` and `phi2`. The reconstructor validates the coefficient table once when it
//! is built and then evaluates the series for any distance grid, angle grid, packing density and
//! Péclet number.

use super::options::ReconstructOptions;
use super::series::{SeriesTerm, build_terms};
use crate::{
    error::PairDistError,
    fit::FourierFit,
    math::{
        constants::{MAX_FIT_DISTANCE, MIN_FIT_DISTANCE},
        geometry,
    },
    params::{CoefficientMap, CoefficientTable},
    types::{AngleInput, IndexTriple},
};
use ndarray::{Array1, Array2, Array3, Array4, Zip};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Evaluates the angular series of `-gU'` from a validated coefficient table.
///
/// The reconstructor owns one `SeriesTerm` per term of the series, each holding the parameter
/// rows of its fit arguments. Building it checks that every term has exactly as many rows as its
/// fit function has arguments, so evaluation itself cannot misalign rows and arguments.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    /// The validated terms of the series.
    terms: Vec<SeriesTerm>,
    /// Evaluation settings.
    options: ReconstructOptions,
}

impl Reconstructor {
    /// Creates a reconstructor from a complete coefficient table, with default options.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::MissingCoefficients`, `PairDistError::ArityMismatch` or
    /// `PairDistError::RowLength` if the table does not cover every term of the series.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abp_pairdist::{Reconstructor, get_default_coefficients};
    ///
    /// let table = get_default_coefficients().unwrap();
    /// let reconstructor = Reconstructor::new(table).unwrap();
    /// ```
    pub fn new(table: &CoefficientTable) -> Result<Self, PairDistError> {
        Self::from_maps(&table.alpha, &table.beta)
    }

    /// Creates a reconstructor from separate alpha and beta tables.
    ///
    /// This allows combining tables from different sources, for instance a custom alpha table
    /// with the default beta table.
    pub fn from_maps(alpha: &CoefficientMap, beta: &CoefficientMap) -> Result<Self, PairDistError> {
        let terms = build_terms(alpha, beta)?;
        debug!(terms = terms.len(), "assembled angular series");
        Ok(Self {
            terms,
            options: ReconstructOptions::default(),
        })
    }

    /// Configures the reconstructor with custom options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abp_pairdist::{ReconstructOptions, Reconstructor, get_default_coefficients};
    ///
    /// let options = ReconstructOptions {
    ///     parallel: false,
    ///     ..Default::default()
    /// };
    /// let reconstructor = Reconstructor::new(get_default_coefficients().unwrap())
    ///     .unwrap()
    ///     .with_options(options);
    /// ```
    pub fn with_options(mut self, options: ReconstructOptions) -> Self {
        self.options = options;
        self
    }

    /// The validated terms of the series, in evaluation order.
    pub fn terms(&self) -> &[SeriesTerm] {
        &self.terms
    }

    /// The evaluation settings in effect.
    pub fn options(&self) -> ReconstructOptions {
        self.options
    }

    /// Evaluates the Fourier coefficient of every term at the given distances.
    ///
    /// Row `t` of the result belongs to `self.terms()[t]`, column `i` to `r[i]`.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::NonPositivePeclet` if `peclet` is not strictly positive.
    pub fn fourier_coefficients(
        &self,
        r: &[f64],
        density: f64,
        peclet: f64,
    ) -> Result<Array2<f64>, PairDistError> {
        check_peclet(peclet)?;
        let fits = self.fits(density, peclet)?;
        Ok(Array2::from_shape_fn((fits.len(), r.len()), |(t, i)| {
            fits[t].evaluate(r[i])
        }))
    }

    /// Reconstructs `-gU'` on a distance axis and an angle grid.
    ///
    /// The angles are either all scalars or sequences, which are expanded into a grid indexed
    /// `(theta1, theta2, phi2)`, or all grids of one common shape. The result is indexed
    /// `(r, theta1, theta2, phi2)`.
    ///
    /// # Arguments
    ///
    /// * `r` - Particle distances in multiples of the particle diameter.
    /// * `theta1`, `theta2`, `phi2` - The angles of the particle configuration in radians.
    /// * `density` - Packing density of the suspension.
    /// * `peclet` - Péclet number of the particles; must be positive.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::ShapeMismatch` for an unsupported combination of angle inputs,
    /// or `PairDistError::NonPositivePeclet` if `peclet` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abp_pairdist::{AngleInput, Reconstructor, get_default_coefficients};
    ///
    /// let reconstructor = Reconstructor::new(get_default_coefficients().unwrap()).unwrap();
    /// let angles: Vec<f64> = (0..36).map(|i| i as f64 * 10f64.to_radians()).collect();
    ///
    /// let field = reconstructor
    ///     .reconstruct(
    ///         &[0.9, 1.0],
    ///         angles.clone().into(),
    ///         AngleInput::Scalar(0.0),
    ///         angles.into(),
    ///         0.2,
    ///         100.0,
    ///     )
    ///     .unwrap();
    /// assert_eq!(field.shape(), &[2, 36, 1, 36]);
    /// ```
    pub fn reconstruct(
        &self,
        r: &[f64],
        theta1: AngleInput,
        theta2: AngleInput,
        phi2: AngleInput,
        density: f64,
        peclet: f64,
    ) -> Result<Array4<f64>, PairDistError> {
        check_peclet(peclet)?;
        if self.options.check_bounds {
            warn_outside_fit(r, density);
        }

        let grid = AngleGrid::from_inputs(theta1, theta2, phi2)?;
        let (n1, n2, n3) = grid.dim();
        let fits = self.fits(density, peclet)?;
        let parallel = self.options.parallel;

        let mut field = Array4::zeros((r.len(), n1, n2, n3));
        for (term, fit) in self.terms.iter().zip(&fits) {
            let angular = grid.angular_factor(term.triple, parallel);
            let coefficients: Vec<f64> = r.iter().map(|&distance| fit.evaluate(distance)).collect();

            if parallel {
                field
                    .outer_iter_mut()
                    .into_par_iter()
                    .zip(coefficients.par_iter())
                    .for_each(|(mut slab, &coefficient)| slab.scaled_add(coefficient, &angular));
            } else {
                for (mut slab, &coefficient) in field.outer_iter_mut().zip(&coefficients) {
                    slab.scaled_add(coefficient, &angular);
                }
            }
        }
        Ok(field)
    }

    /// Reconstructs `-gU'` for one pair configuration given by orientation vectors.
    ///
    /// The vectors are converted with [`geometry::angles_from_vectors`] and the field is
    /// evaluated at the resulting scalar angles, so the result has shape `(r.len(), 1, 1, 1)`.
    ///
    /// # Arguments
    ///
    /// * `u1`, `u2` - Orientations of the two particles.
    /// * `u_delta` - Vector connecting the two particles.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::DegenerateVector` for a zero-length vector, in addition to the
    /// errors of [`Reconstructor::reconstruct`].
    pub fn reconstruct_from_vectors(
        &self,
        r: &[f64],
        u1: [f64; 3],
        u2: [f64; 3],
        u_delta: [f64; 3],
        density: f64,
        peclet: f64,
    ) -> Result<Array4<f64>, PairDistError> {
        let angles = geometry::angles_from_vectors(u1, u2, u_delta)?;
        self.reconstruct(
            r,
            AngleInput::Scalar(angles.theta1),
            AngleInput::Scalar(angles.theta2),
            AngleInput::Scalar(angles.phi2),
            density,
            peclet,
        )
    }

    fn fits(&self, density: f64, peclet: f64) -> Result<Vec<FourierFit>, PairDistError> {
        self.terms
            .iter()
            .map(|term| term.fourier_fit(density, peclet))
            .collect()
    }
}

fn check_peclet(peclet: f64) -> Result<(), PairDistError> {
    if peclet > 0.0 && peclet.is_finite() {
        Ok(())
    } else {
        Err(PairDistError::NonPositivePeclet(peclet))
    }
}

fn warn_outside_fit(r: &[f64], density: f64) {
    if let Some(&distance) = r
        .iter()
        .find(|&&distance| !(MIN_FIT_DISTANCE..=MAX_FIT_DISTANCE).contains(&distance))
    {
        warn!(
            distance,
            "Distance is outside of approximation bounds [{MIN_FIT_DISTANCE}, {MAX_FIT_DISTANCE}]"
        );
    }
    if !(0.0..=1.0).contains(&density) {
        warn!(density, "Unphysical argument for packing density");
    }
}

/// The three angles on a common rectangular grid.
struct AngleGrid {
    theta1: Array3<f64>,
    theta2: Array3<f64>,
    phi2: Array3<f64>,
}

impl AngleGrid {
    /// Broadcasts the angle inputs to one grid.
    ///
    /// Scalars and sequences are combined by outer-product indexing, grids must already agree.
    fn from_inputs(
        theta1: AngleInput,
        theta2: AngleInput,
        phi2: AngleInput,
    ) -> Result<Self, PairDistError> {
        match (theta1, theta2, phi2) {
            (AngleInput::Grid(theta1), AngleInput::Grid(theta2), AngleInput::Grid(phi2)) => {
                if theta1.shape() != theta2.shape() || theta1.shape() != phi2.shape() {
                    return Err(PairDistError::ShapeMismatch(format!(
                        "angle grids have shapes {:?}, {:?} and {:?}",
                        theta1.shape(),
                        theta2.shape(),
                        phi2.shape()
                    )));
                }
                Ok(Self {
                    theta1,
                    theta2,
                    phi2,
                })
            }
            (theta1, theta2, phi2) => {
                let theta1 = into_axis(theta1, "theta1")?;
                let theta2 = into_axis(theta2, "theta2")?;
                let phi2 = into_axis(phi2, "phi2")?;
                let dim = (theta1.len(), theta2.len(), phi2.len());
                Ok(Self {
                    theta1: Array3::from_shape_fn(dim, |(i, _, _)| theta1[i]),
                    theta2: Array3::from_shape_fn(dim, |(_, j, _)| theta2[j]),
                    phi2: Array3::from_shape_fn(dim, |(_, _, l)| phi2[l]),
                })
            }
        }
    }

    fn dim(&self) -> (usize, usize, usize) {
        self.theta1.dim()
    }

    /// The angular basis function of one term evaluated on the grid.
    fn angular_factor(&self, triple: IndexTriple, parallel: bool) -> Array3<f64> {
        let family = triple.family();
        let (h, j, k) = (triple.h as f64, triple.j as f64, triple.k as f64);
        let basis = move |theta1: &f64, theta2: &f64, phi2: &f64| {
            family.basis(theta1 * h) * family.basis(theta2 * j) * (phi2 * k).cos()
        };

        let zip = Zip::from(&self.theta1)
            .and(&self.theta2)
            .and(&self.phi2);
        if parallel {
            zip.par_map_collect(basis)
        } else {
            zip.map_collect(basis)
        }
    }
}

fn into_axis(input: AngleInput, name: &str) -> Result<Array1<f64>, PairDistError> {
    match input {
        AngleInput::Scalar(value) => Ok(Array1::from_elem(1, value)),
        AngleInput::Sequence(values) => Ok(values),
        AngleInput::Grid(_) => Err(PairDistError::ShapeMismatch(format!(
            "'{name}' is a grid while other angles are scalars or sequences; \
             pass either only scalars and sequences or only grids"
        ))),
    }
}
