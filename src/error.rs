use crate::fit::FitVariant;
use crate::types::{Family, IndexTriple};
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `abp_pairdist` library.
///
/// Each variant names one failure mode of the reconstruction pipeline, from reading the
/// coefficient file to evaluating the series on invalid input. It implements
/// `std::error::Error`, so it composes with the error types of application code.
#[derive(Error, Debug)]
pub enum PairDistError {
    /// An I/O error that occurred while attempting to read a coefficient file.
    ///
    /// The path to the file and the underlying I/O error are provided for context.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A data cell of a coefficient row could not be parsed as a floating-point number.
    #[error("Invalid coefficient value '{value}' on line {line}")]
    InvalidValue {
        /// One-based line number in the coefficient source.
        line: usize,
        /// The offending cell, trimmed.
        value: String,
    },

    /// The coefficient table has no entry for a term of the angular series.
    #[error("No {family} coefficients found for index triple {triple}")]
    MissingCoefficients {
        /// The table that was searched.
        family: Family,
        /// The term whose coefficients are missing.
        triple: IndexTriple,
    },

    /// The number of parameter rows stored for a triple does not match the number of
    /// arguments of the fit function assigned to it.
    #[error(
        "Index triple {triple} requires {expected} parameter rows for its fit function, found {found}"
    )]
    ArityMismatch {
        /// The term whose rows are misaligned.
        triple: IndexTriple,
        /// The arity of the term's fit function.
        expected: usize,
        /// The number of rows present in the table.
        found: usize,
    },

    /// A parameter row does not contain exactly the twenty density/Péclet coefficients.
    #[error("Parameter row {row} of index triple {triple} has {found} coefficients, expected 20")]
    RowLength {
        /// The term the row belongs to.
        triple: IndexTriple,
        /// Zero-based position of the row among the term's rows.
        row: usize,
        /// The number of coefficients in the row.
        found: usize,
    },

    /// A fit function was bound to the wrong number of arguments.
    #[error("Fit function {variant:?} takes {expected} arguments, got {found}")]
    ArgumentCount {
        /// The fit function being bound.
        variant: FitVariant,
        /// The arity of the fit function.
        expected: usize,
        /// The number of arguments supplied.
        found: usize,
    },

    /// The coefficient source is not well-formed CSV.
    #[error("Malformed coefficient record: {0}")]
    CsvError(#[from] csv::Error),

    /// The three angle inputs cannot be combined into one angular grid.
    #[error("Angle input shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The Péclet number must be strictly positive and finite.
    #[error("Péclet number must be positive, got {0}")]
    NonPositivePeclet(f64),

    /// The potential derivative is singular at zero separation.
    #[error("Potential derivative is undefined at zero particle distance")]
    ZeroDistance,

    /// An orientation vector has zero length and cannot be normalized.
    #[error("Cannot normalize zero-length vector '{0}'")]
    DegenerateVector(&'static str),
}
