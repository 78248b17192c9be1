mod common;

use abp_pairdist::fit::PARAMETER_ROW_LEN;
use abp_pairdist::reconstruct::SERIES_TERMS;
use abp_pairdist::{
    CoefficientTable, IndexTriple, PairDistError, Reconstructor, load_parameter_file,
};
use common::{fixture_csv, fixture_table, label, parameter_row};
use std::fs;

fn row_cells(row: &[f64]) -> String {
    row.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn test_fixture_file_covers_every_term() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitparams.csv");
    fs::write(&path, fixture_csv()).unwrap();

    let table = load_parameter_file(&path).unwrap();
    assert_eq!(table.alpha.len(), 18);
    assert_eq!(table.beta.len(), 4);
    for &(triple, variant) in &SERIES_TERMS {
        let rows = &table.family(triple.family())[&triple];
        assert_eq!(rows.len(), variant.arity(), "rows of {}", triple);
        assert!(rows.iter().all(|row| row.len() == PARAMETER_ROW_LEN));
    }

    let reconstructor = Reconstructor::new(&table).unwrap();
    assert_eq!(reconstructor.terms().len(), SERIES_TERMS.len());
}

#[test]
fn test_loading_twice_gives_equal_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitparams.csv");
    fs::write(&path, fixture_csv()).unwrap();

    let first = CoefficientTable::load_from_file(&path).unwrap();
    let second = CoefficientTable::load_from_file(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, fixture_table());
}

#[test]
fn test_rows_keep_file_order() {
    let triple = IndexTriple::new(1, 2, 0).unwrap();
    let csv = format!(
        "{label},first,{}\n{label},second,{}\n",
        row_cells(&parameter_row(0, 1.0)),
        row_cells(&parameter_row(1, 1.0)),
        label = label(triple),
    );

    let table = CoefficientTable::load_from_str(&csv).unwrap();
    assert_eq!(
        table.alpha[&triple],
        vec![parameter_row(0, 1.0), parameter_row(1, 1.0)]
    );
}

#[test]
fn test_malformed_labels_are_skipped() {
    let row = row_cells(&parameter_row(0, 1.0));
    let csv = format!(
        "alph001,short,{row}\n\
         alpha_0010,long,{row}\n\
         alpha_0x1,letters,{row}\n\
         alpha_003,out_of_range,{row}\n\
         ,unlabelled,{row}\n\
         alpha_001,valid,{row}\n"
    );

    let table = CoefficientTable::load_from_str(&csv).unwrap();
    assert!(table.beta.is_empty());
    assert_eq!(table.alpha.len(), 1);
    let triple = IndexTriple::new(0, 0, 1).unwrap();
    assert_eq!(table.alpha[&triple].len(), 1);
}

#[test]
fn test_blank_lines_and_trailing_cells_are_ignored() {
    let csv = "\nbeta_111,name, 1.5 ,2.5,,\n\n";
    let table = CoefficientTable::load_from_str(csv).unwrap();
    let triple = IndexTriple::new(1, 1, 1).unwrap();
    assert_eq!(table.beta[&triple], vec![vec![1.5, 2.5]]);
}

#[test]
fn test_non_numeric_cell_reports_line() {
    let csv = "alpha_000,a,1.0\nalpha_000,mu,1.0,abc\n";
    let result = CoefficientTable::load_from_str(csv);
    match result {
        Err(PairDistError::InvalidValue { line, value }) => {
            assert_eq!(line, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let result = load_parameter_file(&path);
    match result {
        Err(PairDistError::IoError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected IoError, got {:?}", other),
    }
}

#[test]
fn test_incomplete_table_is_rejected_by_reconstructor() {
    let mut table = fixture_table();
    let triple = IndexTriple::new(2, 2, 2).unwrap();
    table.alpha.get_mut(&triple).unwrap().push(parameter_row(0, 1.0));

    let result = Reconstructor::new(&table);
    assert!(matches!(
        result,
        Err(PairDistError::ArityMismatch {
            expected: 5,
            found: 6,
            ..
        })
    ));

    let mut table = fixture_table();
    table.alpha.get_mut(&triple).unwrap()[3].pop();
    let result = Reconstructor::new(&table);
    assert!(matches!(
        result,
        Err(PairDistError::RowLength {
            row: 3,
            found: 19,
            ..
        })
    ));
}
