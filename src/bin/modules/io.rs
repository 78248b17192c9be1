use super::cli::{FixedAngle, OutputFormat};
use super::error::CliError;
use ndarray::{Array1, Array2};
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// A two-dimensional slice of `g` at one distance with one angle held fixed.
pub struct Slice {
    pub fixed_angle: FixedAngle,
    /// Grid value of the fixed angle in radians.
    pub fixed_value: f64,
    pub distance: f64,
    pub density: f64,
    pub peclet: f64,
    /// Grid points shared by both free angles.
    pub axis: Array1<f64>,
    /// `g` indexed by (row angle, column angle).
    pub values: Array2<f64>,
    pub source_name: String,
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_slice(
    mut writer: Box<dyn Write>,
    slice: &Slice,
    format: &OutputFormat,
    precision: usize,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, slice, precision),
        OutputFormat::Csv => write_csv(&mut writer, slice, precision),
        OutputFormat::Json => write_json(&mut writer, slice, precision),
    }?;
    writer.flush()?;
    Ok(())
}

fn write_pretty_table(
    writer: &mut dyn Write,
    slice: &Slice,
    precision: usize,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"ABP Pair-Distribution Slice"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let (row_angle, column_angle) = slice.fixed_angle.free_axes();

    let mut summary_table = Table::new();
    summary_table.set_format(box_format);
    summary_table.add_row(row![b->"Coefficients:", slice.source_name]);
    summary_table.add_row(row![b->"Distance:", format!("{:.prec$}", slice.distance, prec = precision)]);
    summary_table.add_row(row![b->"Packing Density:", format!("{:.prec$}", slice.density, prec = precision)]);
    summary_table.add_row(row![b->"Péclet Number:", format!("{:.prec$}", slice.peclet, prec = precision)]);
    summary_table.add_row(row![b->"Fixed Angle:", format!("{} = {:.prec$} rad", slice.fixed_angle.symbol(), slice.fixed_value, prec = precision)]);
    summary_table.add_row(row![b->"Rows / Columns:", format!("{} / {}", row_angle, column_angle)]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);

    let mut titles = Row::empty();
    titles.add_cell(cell!(bc->format!("{} \\ {}", row_angle, column_angle)));
    for angle in slice.axis.iter() {
        titles.add_cell(cell!(bc->format!("{:.2}", angle)));
    }
    data_table.set_titles(titles);

    for (angle, values) in slice.axis.iter().zip(slice.values.rows()) {
        let mut row = Row::empty();
        row.add_cell(cell!(br->format!("{:.2}", angle)));
        for value in values.iter() {
            row.add_cell(cell!(r->format!("{:.prec$}", value, prec = precision)));
        }
        data_table.add_row(row);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_csv(writer: &mut dyn Write, slice: &Slice, precision: usize) -> Result<(), CliError> {
    let (row_angle, column_angle) = slice.fixed_angle.free_axes();
    writeln!(writer, "{},{},g", row_angle, column_angle)?;
    for (row_value, values) in slice.axis.iter().zip(slice.values.rows()) {
        for (column_value, g) in slice.axis.iter().zip(values.iter()) {
            writeln!(
                writer,
                "{:.*},{:.*},{:.*}",
                precision, row_value, precision, column_value, precision, g
            )?;
        }
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, slice: &Slice, precision: usize) -> Result<(), CliError> {
    let (row_angle, column_angle) = slice.fixed_angle.free_axes();
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"distance\": {},", json_number(slice.distance, precision))?;
    writeln!(writer, "  \"density\": {},", json_number(slice.density, precision))?;
    writeln!(writer, "  \"peclet\": {},", json_number(slice.peclet, precision))?;
    writeln!(writer, "  \"fixed_angle\": \"{}\",", slice.fixed_angle.symbol())?;
    writeln!(
        writer,
        "  \"fixed_value\": {},",
        json_number(slice.fixed_value, precision)
    )?;
    writeln!(writer, "  \"rows\": \"{}\",", row_angle)?;
    writeln!(writer, "  \"columns\": \"{}\",", column_angle)?;
    writeln!(writer, "  \"axis\": [{}],", json_array(slice.axis.iter(), precision))?;
    writeln!(writer, "  \"g\": [")?;
    let n_rows = slice.values.nrows();
    for (i, values) in slice.values.rows().into_iter().enumerate() {
        let comma = if i + 1 < n_rows { "," } else { "" };
        writeln!(writer, "    [{}]{}", json_array(values.iter(), precision), comma)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

fn json_array<'a>(values: impl Iterator<Item = &'a f64>, precision: usize) -> String {
    values
        .map(|value| json_number(*value, precision))
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON has no representation for non-finite numbers.
fn json_number(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        "null".to_string()
    }
}
