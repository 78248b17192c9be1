//! This module provides the fitted coefficient tables and utilities for loading them from CSV files.
//!
//! A coefficient file holds one row per fit argument of every series term. The label in the first
//! cell names the family (`alph...` or `beta...`) and ends in the three digits of the index
//! triple; the second cell is a free-form name and the remaining cells are the twenty
//! density/Péclet coefficients of that argument. Rows sharing a triple are kept in file order,
//! which is the order of the fit function's arguments.

use crate::error::PairDistError;
use crate::types::{Family, IndexTriple};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the location of the default coefficient file.
pub const PARAMS_PATH_ENV: &str = "ABP_PAIRDIST_PARAMS";

/// File name of the coefficient table bundled in the crate's `resources` directory.
pub const DEFAULT_PARAMS_FILE: &str = "fitparams.csv";

/// Mapping from an index triple to its parameter rows, in file order.
pub type CoefficientMap = HashMap<IndexTriple, Vec<Vec<f64>>>;

/// The alpha and beta coefficient tables of one fit.
///
/// Tables are built once by one of the loaders and are not mutated by the library afterwards.
/// Loading performs no arity checks; those happen when a `Reconstructor` is built from the
/// table, so a partial table can still be inspected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientTable {
    /// Coefficients of the cosine terms (`k` in `{0, 2}`).
    pub alpha: CoefficientMap,
    /// Coefficients of the sine terms (`k = 1`).
    pub beta: CoefficientMap,
}

impl CoefficientTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a coefficient table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::IoError` if the file cannot be read, and the errors of
    /// [`CoefficientTable::load_from_str`] for its contents. Rows with malformed labels are
    /// skipped with a warning and do not cause an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abp_pairdist::CoefficientTable;
    /// use std::path::Path;
    ///
    /// let table = CoefficientTable::load_from_file(Path::new("fitparams.csv")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, PairDistError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| PairDistError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        let table = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            alpha = table.alpha.len(),
            beta = table.beta.len(),
            "loaded coefficient file"
        );
        Ok(table)
    }

    /// Parses a coefficient table from CSV text.
    ///
    /// Records are read without a header and may differ in length. Blank lines and rows with an
    /// empty label are ignored. The label and name cells are set aside first and blank cells are
    /// dropped only among the coefficients, so an empty name does not shift the coefficients of
    /// its row.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::InvalidValue` with the one-based line number if a coefficient cell
    /// is not a number, or `PairDistError::CsvError` if the text is not well-formed CSV.
    ///
    /// # Examples
    ///
    /// ```
    /// use abp_pairdist::{CoefficientTable, IndexTriple};
    ///
    /// let csv = "alpha001,a,1.0,2.0\nbeta_111,a,3.0\n";
    /// let table = CoefficientTable::load_from_str(csv).unwrap();
    ///
    /// let triple = IndexTriple::new(0, 0, 1).unwrap();
    /// assert_eq!(table.alpha[&triple], vec![vec![1.0, 2.0]]);
    /// assert!(!table.beta.contains_key(&triple));
    /// ```
    pub fn load_from_str(content: &str) -> Result<Self, PairDistError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut table = Self::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let line = record
                .position()
                .map_or(0, |position| position.line() as usize);

            let label = record.get(0).unwrap_or_default();
            if label.is_empty() {
                continue;
            }

            let Some((family, triple)) = parse_label(label) else {
                warn!(line, "Invalid fourier coefficient label: {}", label);
                continue;
            };

            let row = record
                .iter()
                .skip(2)
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<f64>().map_err(|_| PairDistError::InvalidValue {
                        line,
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;

            table.family_mut(family).entry(triple).or_default().push(row);
        }

        Ok(table)
    }

    /// Returns the table of the given family.
    pub fn family(&self, family: Family) -> &CoefficientMap {
        match family {
            Family::Alpha => &self.alpha,
            Family::Beta => &self.beta,
        }
    }

    fn family_mut(&mut self, family: Family) -> &mut CoefficientMap {
        match family {
            Family::Alpha => &mut self.alpha,
            Family::Beta => &mut self.beta,
        }
    }

    /// Resolves the path of the default coefficient file.
    ///
    /// `$ABP_PAIRDIST_PARAMS` takes precedence; otherwise the file bundled under the crate's
    /// `resources` directory is used.
    pub fn default_path() -> PathBuf {
        match std::env::var_os(PARAMS_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("resources")
                .join(DEFAULT_PARAMS_FILE),
        }
    }
}

/// Splits a row label into its family and index triple.
///
/// Labels are 8 or 9 characters long; the first four select the family and the last three are
/// the digits `h`, `j`, `k`.
fn parse_label(label: &str) -> Option<(Family, IndexTriple)> {
    let chars: Vec<char> = label.chars().collect();
    if !matches!(chars.len(), 8 | 9) {
        return None;
    }

    let family = if chars[..4].iter().collect::<String>() == "alph" {
        Family::Alpha
    } else {
        Family::Beta
    };

    let mut digits = chars[chars.len() - 3..].iter().map(|c| c.to_digit(10));
    let (h, j, k) = (digits.next()??, digits.next()??, digits.next()??);
    let triple = IndexTriple::new(h as u8, j as u8, k as u8)?;

    Some((family, triple))
}
