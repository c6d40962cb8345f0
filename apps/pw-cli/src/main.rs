mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::{AppError, AppResult};
use pw_config::DiagramSettings;
use pw_core::constants::atm_to_pa;
use pw_water::constants::{NORMAL_BOILING_PRESSURE_ATM, NORMAL_BOILING_TEMPERATURE_K};
use pw_water::{
    BoundaryCurve, Phase, PhaseSweep, Point, Quantity, SweepDefinition, SweepType, WATER,
    classify, execute_isobar, execute_isotherm, parse_entry, parse_quantity,
    sublimation_decision_atm, sublimation_pressure_atm, svg_path, vapor_pressure_atm,
    vaporization_decision_atm,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(about = "Phasewise CLI - Water phase diagram explorer", long_about = None)]
struct Cli {
    /// Diagram settings file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the phase of water at a temperature and pressure
    Classify {
        /// Temperature, kelvin unless tagged (e.g. 300, 25C)
        temperature: String,
        /// Pressure, atm unless tagged (e.g. 0.5, 101.325 kPa)
        pressure: String,
    },
    /// Sample a boundary curve as CSV or SVG path data
    Curve {
        /// sublimation, vaporization or fusion
        curve: BoundaryCurve,
        /// Start temperature (defaults to the curve's plotted range)
        #[arg(long)]
        from: Option<String>,
        /// End temperature
        #[arg(long)]
        to: Option<String>,
        /// Number of samples (defaults to the settings file)
        #[arg(long)]
        points: Option<usize>,
        /// Temperature spacing
        #[arg(long, value_enum)]
        spacing: Option<Spacing>,
        /// Emit SVG path data instead of CSV
        #[arg(long)]
        svg: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Walk a pressure range at fixed temperature and list phase changes
    Isotherm {
        /// Fixed temperature
        temperature: String,
        #[arg(long, default_value = "0.001")]
        from: String,
        #[arg(long, default_value = "300")]
        to: String,
        #[arg(long, default_value_t = 200)]
        points: usize,
    },
    /// Walk a temperature range at fixed pressure and list phase changes
    Isobar {
        /// Fixed pressure
        pressure: String,
        #[arg(long, default_value = "200")]
        from: String,
        #[arg(long, default_value = "700")]
        to: String,
        #[arg(long, default_value_t = 200)]
        points: usize,
    },
    /// Print the triple, critical and normal boiling points
    Points,
}

#[derive(Clone, Copy, ValueEnum)]
enum Spacing {
    Linear,
    Log,
}

impl From<Spacing> for SweepType {
    fn from(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Linear => SweepType::Linear,
            Spacing::Log => SweepType::Logarithmic,
        }
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries CSV and SVG output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify {
            temperature,
            pressure,
        } => cmd_classify(&settings, &temperature, &pressure),
        Commands::Curve {
            curve,
            from,
            to,
            points,
            spacing,
            svg,
            output,
        } => cmd_curve(
            &settings,
            CurveRequest {
                curve,
                from: from.as_deref(),
                to: to.as_deref(),
                points,
                spacing: spacing.map(SweepType::from),
                svg,
            },
            output.as_deref(),
        ),
        Commands::Isotherm {
            temperature,
            from,
            to,
            points,
        } => cmd_isotherm(&settings, &temperature, &from, &to, points),
        Commands::Isobar {
            pressure,
            from,
            to,
            points,
        } => cmd_isobar(&settings, &pressure, &from, &to, points),
        Commands::Points => {
            cmd_points();
            Ok(())
        }
    }
}

fn load_settings(path: Option<&Path>) -> AppResult<DiagramSettings> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading diagram settings");
            Ok(pw_config::load(path)?)
        }
        None => Ok(DiagramSettings::default()),
    }
}

fn cmd_classify(settings: &DiagramSettings, temperature: &str, pressure: &str) -> AppResult<()> {
    let t_k = parse_entry(temperature, &settings.temperature_limits())?;
    let p_atm = parse_entry(pressure, &settings.pressure_limits())?;
    let point = Point::new(t_k, p_atm);
    let phase = classify(point);
    debug!(%point, %phase, "classified");

    println!("Point: {}", point);
    println!("Phase: {}", phase);

    if t_k < WATER.triple_temperature_k {
        println!(
            "  Solid-gas decision pressure: {:.6e} atm",
            sublimation_decision_atm(t_k)
        );
        println!(
            "  Sublimation fit:             {:.6e} atm",
            sublimation_pressure_atm(t_k)
        );
    } else if t_k < WATER.critical_temperature_k {
        println!(
            "  Liquid-gas decision pressure: {:.5} atm",
            vaporization_decision_atm(t_k)
        );
        println!(
            "  Wagner vapor pressure:        {:.5} atm",
            vapor_pressure_atm(t_k)
        );
    } else {
        println!(
            "  Critical pressure: {:.2} atm",
            WATER.critical_pressure_atm
        );
    }

    Ok(())
}

struct CurveRequest<'a> {
    curve: BoundaryCurve,
    from: Option<&'a str>,
    to: Option<&'a str>,
    points: Option<usize>,
    spacing: Option<SweepType>,
    svg: bool,
}

fn cmd_curve(
    settings: &DiagramSettings,
    request: CurveRequest<'_>,
    output: Option<&Path>,
) -> AppResult<()> {
    let curve = request.curve;
    let (default_start, default_end) = curve.plot_range();
    let start = match request.from {
        Some(text) => parse_temperature(text)?,
        None => default_start,
    };
    let end = match request.to {
        Some(text) => parse_temperature(text)?,
        None => default_end,
    };
    let count = request.points.unwrap_or(settings.curves.samples);
    let spacing = request
        .spacing
        .unwrap_or_else(|| settings.curves.spacing.into());

    let samples = curve.samples(start, end, count, spacing);
    let sampled = samples.len();
    info!(
        curve = %curve,
        start = samples.range().0,
        end = samples.range().1,
        count = sampled,
        "sampling boundary curve"
    );

    let text = if request.svg {
        let frame = settings.plot_frame()?;
        let mut path = svg_path(samples, &frame);
        path.push('\n');
        path
    } else {
        let mut csv = String::from("temperature_k,pressure_atm\n");
        for point in samples {
            csv.push_str(&format!("{},{}\n", point.temperature_k, point.pressure_atm));
        }
        csv
    };

    write_output(&text, output, sampled)
}

fn cmd_isotherm(
    settings: &DiagramSettings,
    temperature: &str,
    from: &str,
    to: &str,
    points: usize,
) -> AppResult<()> {
    let t_k = parse_entry(temperature, &settings.temperature_limits())?;
    let sweep =
        SweepDefinition::from_text(from, to, Quantity::Pressure, points, SweepType::Logarithmic)?;
    println!("Isotherm at {:.2} K: {}", t_k, sweep);
    let result = execute_isotherm(t_k, &sweep)?;
    print_sweep(&result);
    Ok(())
}

fn cmd_isobar(
    settings: &DiagramSettings,
    pressure: &str,
    from: &str,
    to: &str,
    points: usize,
) -> AppResult<()> {
    let p_atm = parse_entry(pressure, &settings.pressure_limits())?;
    let sweep =
        SweepDefinition::from_text(from, to, Quantity::Temperature, points, SweepType::Linear)?;
    println!("Isobar at {:.3} atm: {}", p_atm, sweep);
    let result = execute_isobar(p_atm, &sweep)?;
    print_sweep(&result);
    Ok(())
}

fn print_sweep(result: &PhaseSweep) {
    let points = result.points();
    if let Some(first) = result.phases.first() {
        println!("  Starts as {}", first);
    }
    if result.transitions.is_empty() {
        println!("  No phase change along this path");
    }
    for transition in &result.transitions {
        let before = points[transition.index - 1];
        let after = points[transition.index];
        let name = transition
            .change
            .map(|c| c.display_name())
            .unwrap_or("Crossover");
        println!(
            "  {:<12} {} -> {} between {} and {}",
            name, transition.from, transition.to, before, after
        );
    }
    if result.num_unknown > 0 {
        println!(
            "  Warning: {} point(s) could not be classified",
            result.num_unknown
        );
    }
}

fn cmd_points() {
    let rows = [
        (
            "Triple point",
            Point::new(WATER.triple_temperature_k, WATER.triple_pressure_atm),
        ),
        (
            "Normal boiling point",
            Point::new(NORMAL_BOILING_TEMPERATURE_K, NORMAL_BOILING_PRESSURE_ATM),
        ),
        (
            "Critical point",
            Point::new(WATER.critical_temperature_k, WATER.critical_pressure_atm),
        ),
    ];

    for (label, point) in rows {
        let phase: Phase = classify(point);
        println!(
            "{:<22} {:>8.3} K  {:>10.5} atm  ({:.0} Pa)  -> {}",
            label,
            point.temperature_k,
            point.pressure_atm,
            atm_to_pa(point.pressure_atm),
            phase
        );
    }
}

fn parse_temperature(text: &str) -> AppResult<f64> {
    parse_quantity(text, Quantity::Temperature)
        .map_err(|e| AppError::Input(pw_water::InputError::Unit(e)))
}

fn write_output(text: &str, output: Option<&Path>, count: usize) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, text).map_err(|source| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        println!("✓ Exported {} samples to {}", count, path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}
