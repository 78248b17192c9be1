use super::cli::Cli;
use super::error::CliError;
use super::io::{self, Slice};
use abp_pairdist::{
    AngleInput, CoefficientTable, ReconstructOptions, Reconstructor, get_default_coefficients,
    pair_distribution,
};
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array1, Axis};
use std::f64::consts::TAU;

pub fn run(args: Cli) -> Result<(), CliError> {
    if args.slice.resolution == 0 {
        return Err(CliError::InvalidArgument(
            "resolution must be at least 1".to_string(),
        ));
    }

    let custom_table;
    let table = match &args.calculation.params {
        Some(path) => {
            custom_table = CoefficientTable::load_from_file(path)?;
            &custom_table
        }
        None => get_default_coefficients()?,
    };

    let reconstructor = Reconstructor::new(table)?.with_options(ReconstructOptions {
        parallel: !args.calculation.sequential,
        check_bounds: true,
    });

    let resolution = args.slice.resolution;
    let angles = Array1::from_shape_fn(resolution, |i| i as f64 * TAU / resolution as f64);

    let fixed_value = match (args.slice.degrees, args.slice.radians) {
        (Some(degrees), _) => degrees.to_radians(),
        (None, Some(radians)) => radians,
        (None, None) => 0.0,
    };
    let fixed_index = angle_index(fixed_value, resolution);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Reconstructing pair-distribution function...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let distance = [args.state.distance];
    let gu_prime = reconstructor.reconstruct(
        &distance,
        AngleInput::Sequence(angles.clone()),
        AngleInput::Sequence(angles.clone()),
        AngleInput::Sequence(angles.clone()),
        args.state.density,
        args.state.peclet,
    )?;
    let g = pair_distribution(gu_prime.view(), &distance)?;

    pb.finish_and_clear();

    let values = g
        .index_axis(Axis(0), 0)
        .index_axis(Axis(args.slice.fixed_angle.axis()), fixed_index)
        .to_owned();

    let source_name = args
        .calculation
        .params
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled coefficients".to_string());

    let slice = Slice {
        fixed_angle: args.slice.fixed_angle,
        fixed_value: angles[fixed_index],
        distance: args.state.distance,
        density: args.state.density,
        peclet: args.state.peclet,
        axis: angles,
        values,
        source_name,
    };

    let writer = io::get_writer(&args.output.output)?;
    io::write_slice(writer, &slice, &args.output.format, args.output.precision)?;

    Ok(())
}

/// Grid index closest to `angle` on a grid of `resolution` points over `[0, 2π)`.
///
/// Angles are wrapped into the period, so values just below `2π` select index 0.
fn angle_index(angle: f64, resolution: usize) -> usize {
    let step = TAU / resolution as f64;
    let wrapped = (angle + step / 2.0).rem_euclid(TAU) - step / 2.0;
    ((wrapped / step).round() as i64).rem_euclid(resolution as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_index_on_default_grid() {
        assert_eq!(angle_index(0.0, 180), 0);
        assert_eq!(angle_index(90f64.to_radians(), 180), 45);
        assert_eq!(angle_index(180f64.to_radians(), 180), 90);
        assert_eq!(angle_index(184.1f64.to_radians(), 180), 92);
        assert_eq!(angle_index(359.5f64.to_radians(), 180), 0);
        assert_eq!(angle_index(-2f64.to_radians(), 180), 179);
        assert_eq!(angle_index(TAU + 4f64.to_radians(), 180), 2);
    }

    #[test]
    fn test_angle_index_coarse_grid() {
        assert_eq!(angle_index(1.0, 4), 1);
        assert_eq!(angle_index(3.0, 4), 2);
        assert_eq!(angle_index(6.0, 4), 0);
    }
}
