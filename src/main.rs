use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use nerf_velocity::CalculatorConfig;
use nerf_velocity::core::chart::render_chart;
use nerf_velocity::core::export::export_csv;
use nerf_velocity::core::kinematics::{KinematicResult, LaunchInputs};
use nerf_velocity::core::trajectory::{TrajectorySample, peak_height_m, sample};
use nerf_velocity::core::window::axis_limits;

/// Nerf dart muzzle velocity and spring constant calculator.
///
/// Run without calculation arguments to be prompted for each value.
#[derive(Parser, Debug)]
#[command(name = "nerf_velocity", version, long_about = None)]
struct Cli {
    /// Horizontal range to the impact point (m)
    #[arg(short = 'r', long)]
    range: Option<f64>,

    /// Spring compression distance (m)
    #[arg(short = 'c', long, visible_alias = "muzzle-length")]
    compression: Option<f64>,

    /// Dart mass (kg) [default: from config, 0.02]
    #[arg(short = 'm', long)]
    mass: Option<f64>,

    /// Launch height above the ground, impact at ground level (m)
    #[arg(long, conflicts_with_all = ["height_difference", "start_height", "end_height"])]
    impact_height: Option<f64>,

    /// Launch height minus impact height, positive when impact is below launch (m)
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["start_height", "end_height"]
    )]
    height_difference: Option<f64>,

    /// Launch height above the ground (m)
    #[arg(long, allow_negative_numbers = true, requires = "end_height")]
    start_height: Option<f64>,

    /// Impact height above the ground (m)
    #[arg(long, allow_negative_numbers = true, requires = "start_height")]
    end_height: Option<f64>,

    /// Number of trajectory samples [default: from config, 100]
    #[arg(long)]
    samples: Option<usize>,

    /// Gravitational acceleration (m/s^2) [default: from config, 10]
    #[arg(short = 'g', long)]
    gravity: Option<f64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the trajectory table [default: nerf_dart_trajectory.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip writing the trajectory table
    #[arg(long, conflicts_with = "csv")]
    no_csv: bool,

    /// Also draw the trajectory to this .png or .svg file
    #[arg(long)]
    chart: Option<PathBuf>,
}

impl Cli {
    fn has_calculation_args(&self) -> bool {
        self.range.is_some()
            || self.compression.is_some()
            || self.mass.is_some()
            || self.impact_height.is_some()
            || self.height_difference.is_some()
            || self.start_height.is_some()
            || self.end_height.is_some()
    }

    fn launch_inputs(&self) -> LaunchInputs {
        LaunchInputs {
            range_m: self.range,
            spring_compression_m: self.compression,
            impact_height_m: self.impact_height,
            height_difference_m: self.height_difference,
            start_height_m: self.start_height,
            end_height_m: self.end_height,
            dart_mass_kg: self.mass,
        }
    }

    fn resolve_config(&self) -> Result<CalculatorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if let Some(gravity) = self.gravity {
            config.gravity_mps2 = gravity;
        }
        if let Some(samples) = self.samples {
            config.sample_count = samples;
        }
        config.validate()?;
        Ok(config)
    }

    fn csv_path(&self, config: &CalculatorConfig) -> Option<PathBuf> {
        if self.no_csv {
            return None;
        }
        Some(
            self.csv
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.csv_file_name)),
        )
    }
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Could not read input: {e}"))?;

    if bytes == 0 {
        return Err("Input ended unexpectedly (EOF).".to_string());
    }
    Ok(line.trim().to_string())
}

fn read_f64(prompt: &str, label: &str) -> Result<f64, String> {
    loop {
        match parse_f64(&read_line(prompt)?, label) {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 10 or 0.05)."),
        }
    }
}

/// Blank input keeps the default.
fn read_optional_f64(prompt: &str, label: &str) -> Result<Option<f64>, String> {
    loop {
        let line = read_line(prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match parse_f64(&line, label) {
            Ok(v) => return Ok(Some(v)),
            Err(_) => eprintln!("Please enter a valid number, or leave blank for the default."),
        }
    }
}

fn get_inputs_from_user(config: &CalculatorConfig) -> Result<LaunchInputs, String> {
    Ok(LaunchInputs {
        range_m: Some(read_f64("Horizontal range (m): ", "range")?),
        spring_compression_m: Some(read_f64("Spring compression (m): ", "compression")?),
        start_height_m: Some(read_f64("Starting height (m): ", "starting height")?),
        end_height_m: Some(read_f64("Ending height (m): ", "ending height")?),
        dart_mass_kg: read_optional_f64(
            &format!("Dart mass (kg) [{}]: ", config.default_dart_mass_kg),
            "dart mass",
        )?,
        ..Default::default()
    })
}

fn print_report(result: &KinematicResult, samples: &[TrajectorySample]) {
    println!("\nResults ({})", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{result}");
    if let (Some(last), Some(peak)) = (samples.last(), peak_height_m(samples)) {
        println!(
            "The dart falls from {:.2} m and lands {:.2} m downrange at {:.2} m after {:.2} s.",
            peak, last.x_m, last.y_m, last.time_s
        );
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let inputs = if cli.has_calculation_args() {
        cli.launch_inputs()
    } else {
        get_inputs_from_user(&config)?
    };

    let params = inputs.into_parameters()?;
    let result = config.solver().solve(&params)?;
    let samples = sample(&result, &params, config.sample_count);

    print_report(&result, &samples);

    if let Some(path) = cli.csv_path(&config) {
        export_csv(&path, &samples)?;
        println!("Trajectory table written to {}", path.display());
    }

    if let Some(path) = &cli.chart {
        let limits = axis_limits(
            &samples,
            params.heights.launch_height_m(),
            config.y_axis_headroom_m,
        );
        render_chart(path, &samples, limits)?;
        println!("Trajectory chart written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
