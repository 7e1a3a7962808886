use clap::{Parser, Subcommand};
use ff_app::{
    AppConfig, AppError, AppResult, DEFAULT_CONFIG_FILE, DiagramFormat, build_diagram,
    evaluate_file, evaluate_sample, load_or_default, overlay_from_input, save_config,
    write_diagram,
};
use ff_flow::FlowSample;
use ff_moody::SweepType;
use ff_solver::friction_factor;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_REPORT_FILE: &str = "pressure_loss.txt";
const DEFAULT_DIAGRAM_FILE: &str = "moody.json";

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(about = "frictionflow CLI - Darcy friction factors and Moody diagram data", long_about = None)]
struct Cli {
    /// Configuration file (defaults are used when it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Friction factor for a Reynolds number and relative roughness
    Solve {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Relative roughness eps/D
        #[arg(long)]
        eps_d: f64,
        /// Initial guess for the turbulent solve
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<f64>,
        #[arg(long)]
        max_iterations: Option<usize>,
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Evaluate a single flow sample
    Sample {
        /// Pipe diameter [m]
        diameter: f64,
        /// Mean velocity [m/s]
        velocity: f64,
        /// Density [kg/m³]
        density: f64,
        /// Dynamic viscosity [Pa·s]
        viscosity: f64,
        /// Absolute roughness [mm]
        roughness_mm: f64,
    },
    /// Evaluate every record in an input file and write a pressure-loss report
    Evaluate {
        /// Whitespace-separated records: D v rho mu roughness_mm
        input: PathBuf,
        /// Report file
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
    /// Generate Moody diagram data
    Moody {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_DIAGRAM_FILE)]
        output: PathBuf,
        /// json or csv (guessed from the output extension when omitted)
        #[arg(long)]
        format: Option<String>,
        /// Input file whose samples are overlaid on the diagram
        #[arg(long)]
        points: Option<PathBuf>,
        /// Reynolds points per roughness curve
        #[arg(long)]
        points_per_curve: Option<usize>,
        /// Space the turbulent sweep logarithmically
        #[arg(long)]
        log_spacing: bool,
    },
    /// Write the default configuration file
    InitConfig {
        /// Destination (defaults to the --config path)
        path: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    debug!(config = %cli.config.display(), "ff-cli starting");

    match cli.command {
        Commands::Solve {
            re,
            eps_d,
            seed,
            max_iterations,
            tolerance,
        } => cmd_solve(
            load_or_default(&cli.config)?,
            re,
            eps_d,
            seed,
            max_iterations,
            tolerance,
        ),
        Commands::Sample {
            diameter,
            velocity,
            density,
            viscosity,
            roughness_mm,
        } => cmd_sample(
            &load_or_default(&cli.config)?,
            diameter,
            velocity,
            density,
            viscosity,
            roughness_mm,
        ),
        Commands::Evaluate { input, output } => {
            cmd_evaluate(&load_or_default(&cli.config)?, &input, &output)
        }
        Commands::Moody {
            output,
            format,
            points,
            points_per_curve,
            log_spacing,
        } => cmd_moody(
            load_or_default(&cli.config)?,
            &output,
            format.as_deref(),
            points.as_deref(),
            points_per_curve,
            log_spacing,
        ),
        Commands::InitConfig { path } => cmd_init_config(path.as_deref().unwrap_or(&cli.config)),
    }
}

fn cmd_solve(
    mut config: AppConfig,
    re: f64,
    eps_d: f64,
    seed: Option<f64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
) -> AppResult<()> {
    if let Some(seed) = seed {
        config.regime.turbulent_seed = seed;
    }
    if let Some(n) = max_iterations {
        config.solver.max_iterations = n;
    }
    if let Some(tol) = tolerance {
        config.solver.tolerance = tol;
    }
    config.validate()?;

    let f = friction_factor(re, eps_d, &config.friction_settings())?;
    println!("✓ f = {}", f.value);
    println!("  Regime: {}", f.regime);
    println!("  Iterations: {}", f.iterations);
    Ok(())
}

fn cmd_sample(
    config: &AppConfig,
    diameter: f64,
    velocity: f64,
    density: f64,
    viscosity: f64,
    roughness_mm: f64,
) -> AppResult<()> {
    let sample = FlowSample::from_raw(diameter, velocity, density, viscosity, roughness_mm)?;
    let report = evaluate_sample(&sample, config)?;

    println!("Re = {:.1}, eps/D = {:.3e}", report.reynolds, report.relative_roughness);
    println!(
        "✓ f = {} ({}, {} iterations)",
        report.friction.value, report.friction.regime, report.friction.iterations
    );
    println!("  Pressure loss: {} Pa/m", report.pressure_loss_pa_per_m);
    Ok(())
}

fn cmd_evaluate(config: &AppConfig, input: &Path, output: &Path) -> AppResult<()> {
    println!("Evaluating records: {}", input.display());
    let summary = evaluate_file(input, output, config)?;

    println!("✓ Report written: {}", output.display());
    println!("  Evaluated: {}", summary.evaluated);
    if summary.failed > 0 {
        println!("  Failed: {}", summary.failed);
    }
    Ok(())
}

fn cmd_moody(
    mut config: AppConfig,
    output: &Path,
    format: Option<&str>,
    points: Option<&Path>,
    points_per_curve: Option<usize>,
    log_spacing: bool,
) -> AppResult<()> {
    if let Some(n) = points_per_curve {
        config.diagram.sweep.num_points = n;
    }
    if log_spacing {
        config.diagram.sweep.sweep_type = SweepType::Logarithmic;
    }
    config.validate()?;

    let format = match format {
        Some(s) => DiagramFormat::parse(s)?,
        None => DiagramFormat::from_path(output),
    };

    let overlay = match points {
        Some(path) => overlay_from_input(path, &config)?,
        None => Vec::new(),
    };

    println!(
        "Generating Moody diagram: {} curves, sweep {}",
        config.diagram.roughness.len(),
        config.diagram.sweep
    );
    let start = Instant::now();
    let diagram = build_diagram(&config, &overlay)?;
    write_diagram(output, format, &diagram)?;

    let iterations: usize = diagram.curves.iter().map(|c| c.total_iterations).sum();
    let skipped: usize = diagram.curves.iter().map(|c| c.skipped.len()).sum();
    println!("✓ Diagram written: {}", output.display());
    println!("  Newton iterations: {}", iterations);
    if skipped > 0 {
        println!("  Skipped points: {}", skipped);
    }
    if !diagram.overlay.is_empty() {
        println!("  Overlay points: {}", diagram.overlay.len());
    }
    println!("  Elapsed: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn cmd_init_config(path: &Path) -> AppResult<()> {
    if path.exists() {
        return Err(AppError::Config(format!(
            "{} already exists; remove it first",
            path.display()
        )));
    }
    save_config(path, &AppConfig::default())?;
    println!("✓ Wrote default config: {}", path.display());
    Ok(())
}
