#![allow(dead_code)]

use abp_pairdist::fit::PARAMETER_ROW_LEN;
use abp_pairdist::reconstruct::SERIES_TERMS;
use abp_pairdist::{CoefficientMap, CoefficientTable, Family, IndexTriple};

/// Arguments of every fit before the density/Péclet corrections are applied.
const BASE_ARGUMENTS: [f64; 7] = [0.8, 1.0, 0.08, 6.0, 1.4, 1.3, 1.5];

pub fn label(triple: IndexTriple) -> String {
    match triple.family() {
        Family::Alpha => format!("alpha_{}{}{}", triple.h, triple.j, triple.k),
        Family::Beta => format!("beta_{}{}{}", triple.h, triple.j, triple.k),
    }
}

/// One parameter row whose fit is `base + 0.01 / Pe + 0.05 * density`.
///
/// `scale` varies the amplitude between terms so that no two terms coincide.
pub fn parameter_row(argument: usize, scale: f64) -> Vec<f64> {
    let mut row = vec![0.0; PARAMETER_ROW_LEN];
    row[0] = 0.01;
    row[2] = if argument == 0 {
        BASE_ARGUMENTS[0] * scale
    } else {
        BASE_ARGUMENTS[argument]
    };
    row[7] = 0.05;
    row
}

/// A complete coefficient file for every series term, as it would be stored on disk.
pub fn fixture_csv() -> String {
    let mut csv = String::new();
    for (index, &(triple, variant)) in SERIES_TERMS.iter().enumerate() {
        let scale = 1.0 / (index as f64 + 1.0);
        for argument in 0..variant.arity() {
            let cells: Vec<String> = parameter_row(argument, scale)
                .iter()
                .map(|value| value.to_string())
                .collect();
            csv.push_str(&format!(
                "{},{}_{},{}\n",
                label(triple),
                argument_name(argument),
                argument,
                cells.join(",")
            ));
        }
    }
    csv
}

pub fn fixture_table() -> CoefficientTable {
    CoefficientTable::load_from_str(&fixture_csv()).expect("fixture table should parse")
}

/// Copy of `map` with every amplitude row doubled, which doubles every term of the series.
pub fn double_amplitude(map: &CoefficientMap) -> CoefficientMap {
    map.iter()
        .map(|(triple, rows)| {
            let mut rows = rows.clone();
            rows[0].iter_mut().for_each(|value| *value *= 2.0);
            (*triple, rows)
        })
        .collect()
}

fn argument_name(argument: usize) -> &'static str {
    const NAMES: [&str; 7] = ["a", "mu", "sigma", "lambda", "b", "c", "d"];
    NAMES[argument]
}
