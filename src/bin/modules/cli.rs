use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "Display the pair-distribution function of three-dimensional active Brownian \
particles for a given particle distance, Péclet number and packing density, with one angle fixed.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub state: StateOptions,

    #[command(flatten)]
    pub slice: SliceOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub calculation: CalculationOptions,
}

/// The state point and particle distance to evaluate.
#[derive(Args)]
#[command(next_help_heading = "State Options")]
pub struct StateOptions {
    /// Particle distance in multiples of sigma.
    ///
    /// The fit covers distances between 0.7775 and 2^(1/6).
    #[arg(short = 'r', long = "distance", value_name = "DIST", default_value_t = 1.0)]
    pub distance: f64,

    /// Packing density.
    #[arg(short = 'd', long, value_name = "PHI", default_value_t = 0.2)]
    pub density: f64,

    /// Péclet number.
    #[arg(short = 'p', long, value_name = "PECLET", default_value_t = 100.0)]
    pub peclet: f64,
}

/// Options selecting the two-dimensional slice of the angular grid.
#[derive(Args)]
#[command(next_help_heading = "Slice Options")]
pub struct SliceOptions {
    /// The angle to be fixed.
    #[arg(short = 'a', long, value_enum, default_value_t = FixedAngle::Theta1)]
    pub fixed_angle: FixedAngle,

    /// Value of the fixed angle in degrees.
    #[arg(long, value_name = "DEG", conflicts_with = "radians")]
    pub degrees: Option<f64>,

    /// Value of the fixed angle in radians.
    #[arg(long, value_name = "RAD")]
    pub radians: Option<f64>,

    /// Number of grid points per angle over [0, 2π).
    #[arg(long, default_value_t = 180)]
    pub resolution: usize,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for floating-point values.
    #[arg(long, default_value_t = 6)]
    pub precision: usize,
}

/// Options for controlling the calculation.
#[derive(Args)]
#[command(next_help_heading = "Calculation Options")]
pub struct CalculationOptions {
    /// Custom coefficient file in CSV format.
    ///
    /// If not specified, the bundled coefficient table is used.
    #[arg(short = 'P', long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Evaluate on a single thread.
    #[arg(long)]
    pub sequential: bool,
}

/// The angle held constant in the printed slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FixedAngle {
    #[value(name = "the1")]
    Theta1,
    #[value(name = "the2")]
    Theta2,
    #[value(name = "phi2")]
    Phi2,
}

impl FixedAngle {
    pub fn symbol(self) -> &'static str {
        match self {
            FixedAngle::Theta1 => "theta1",
            FixedAngle::Theta2 => "theta2",
            FixedAngle::Phi2 => "phi2",
        }
    }

    /// The two angles that vary across the slice, as (rows, columns).
    pub fn free_axes(self) -> (&'static str, &'static str) {
        match self {
            FixedAngle::Theta1 => ("theta2", "phi2"),
            FixedAngle::Theta2 => ("theta1", "phi2"),
            FixedAngle::Phi2 => ("theta1", "theta2"),
        }
    }

    pub fn axis(self) -> usize {
        match self {
            FixedAngle::Theta1 => 0,
            FixedAngle::Theta2 => 1,
            FixedAngle::Phi2 => 2,
        }
    }
}

/// Output format for the slice.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed summary followed by the g matrix.
    Pretty,
    /// Comma-separated values with columns: row angle, column angle, g.
    Csv,
    /// JSON object containing the state point, the angle axes and the g matrix.
    Json,
}
