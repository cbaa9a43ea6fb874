use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use projectile_calculator::calculator::calculate;
use projectile_calculator::config::Config;
use projectile_calculator::core::params::{
    ANGLE_RANGE, GRAVITY_RANGE, HEIGHT_RANGE, InputRange, LaunchParameters, SPEED_RANGE,
};
use projectile_calculator::plot::{PlotError, default_output_path, render_chart};
use projectile_calculator::report::{EQUATIONS, write_json, write_samples_csv, write_text};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "projectile_calculator")]
#[command(version, about = "Projectile motion calculator under constant gravity")]
struct Args {
    /// Initial speed (m/s), 1 to 100
    #[arg(short, long)]
    speed: Option<f64>,

    /// Launch angle (degrees), 0 to 90
    #[arg(short, long)]
    angle: Option<f64>,

    /// Launch height (m), 0 to 50
    #[arg(long)]
    height: Option<f64>,

    /// Gravitational acceleration (m/s^2), 0.1 to 20
    #[arg(short, long)]
    gravity: Option<f64>,

    /// Number of trajectory samples
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Projectile mass used for the energy summary (kg)
    #[arg(short, long)]
    mass: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write a trajectory chart (.png or .svg); defaults to a timestamped PNG name
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    plot: Option<Option<PathBuf>>,

    /// Print the equations used after the text report
    #[arg(long)]
    equations: bool,

    /// Ask for speed, angle, height and gravity on stdin
    #[arg(long)]
    prompt: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn read_f64<R: BufRead>(input: &mut R, range: InputRange, current: f64) -> Result<f64> {
    loop {
        print!(
            "{} ({}) [{}]: ",
            capitalize(range.name),
            range.unit,
            current
        );
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("could not read input")?;
        if bytes == 0 {
            bail!("input ended unexpectedly (EOF)");
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(current);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if range.contains(v) => return Ok(v),
            Ok(v) => eprintln!(
                "{v} is outside [{}, {}] {}, try again.",
                range.min, range.max, range.unit
            ),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn prompt_parameters(defaults: LaunchParameters) -> Result<LaunchParameters> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    Ok(LaunchParameters {
        speed_mps: read_f64(&mut input, SPEED_RANGE, defaults.speed_mps)?,
        angle_deg: read_f64(&mut input, ANGLE_RANGE, defaults.angle_deg)?,
        height_m: read_f64(&mut input, HEIGHT_RANGE, defaults.height_m)?,
        gravity_mps2: read_f64(&mut input, GRAVITY_RANGE, defaults.gravity_mps2)?,
    })
}

fn parameters_from_args(args: &Args, defaults: LaunchParameters) -> LaunchParameters {
    LaunchParameters {
        speed_mps: args.speed.unwrap_or(defaults.speed_mps),
        angle_deg: args.angle.unwrap_or(defaults.angle_deg),
        height_m: args.height.unwrap_or(defaults.height_m),
        gravity_mps2: args.gravity.unwrap_or(defaults.gravity_mps2),
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path(),
    };

    let params = if args.prompt {
        prompt_parameters(parameters_from_args(&args, config.launch))?
    } else {
        parameters_from_args(&args, config.launch)
    };
    params
        .check_input_ranges()
        .context("invalid launch parameters")?;

    let resolution = args.resolution.unwrap_or(config.sampling.resolution);
    ensure!(resolution > 0, "resolution must be at least 1");
    let mass_kg = args.mass.unwrap_or(config.energy.mass_kg);
    ensure!(
        mass_kg.is_finite() && mass_kg > 0.0,
        "mass must be a positive number, got {mass_kg}"
    );

    debug!(?params, resolution, mass_kg, "running calculation");
    let calc = calculate(params, resolution, mass_kg)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            write_text(&mut out, &calc)?;
            if args.equations {
                writeln!(out)?;
                writeln!(out, "Equations used")?;
                write!(out, "{EQUATIONS}")?;
            }
        }
        OutputFormat::Json => write_json(&mut out, &calc)?,
        OutputFormat::Csv => write_samples_csv(&mut out, &calc)?,
    }
    out.flush()?;

    if let Some(requested) = args.plot {
        let path = requested.unwrap_or_else(|| {
            default_output_path(config.plot.output_dir.as_deref(), chrono::Local::now())
        });
        let size = (config.plot.width, config.plot.height);
        match render_chart(&calc.trajectory, &path, size) {
            Ok(()) => eprintln!("Chart written to {}", path.display()),
            Err(PlotError::NoTrajectory) => {
                warn!("trajectory unavailable, no chart written");
            }
            Err(err) => return Err(err).context("could not write chart"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("projectile_calculator=warn")),
        )
        .init();

    run(Args::parse())
}
