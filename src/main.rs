//! Main CLI application for the topology Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_topology::{
    build_simulation,
    config::{CliOverrides, PatternSlot, Settings},
    pattern::{create_example_patterns, Offset},
    utils::{ColorOutput, GridFormatter, ProgressIndicator, RunSummary},
    Topology,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_topology")]
#[command(about = "Conway's Game of Life on flat, torus, and Klein-bottle grids")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid row count (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid column count (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Boundary topology: flat, hedge, torus, or klein (overrides config)
        #[arg(short = 'e', long)]
        topology: Option<Topology>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Pattern file to import; repeat for up to three slots
        #[arg(short = 'f', long = "pattern")]
        patterns: Vec<PathBuf>,

        /// Placement offset x,y for the matching --pattern (defaults to 0,0)
        #[arg(short, long = "offset")]
        offsets: Vec<Offset>,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Milliseconds to pause between displayed generations
        #[arg(long, default_value_t = 0)]
        delay: u64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Import patterns and show the starting grid without running
    Inspect {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid row count (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid column count (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Boundary topology (overrides config)
        #[arg(short = 'e', long)]
        topology: Option<Topology>,

        /// Pattern file to import; repeat for up to three slots
        #[arg(short = 'f', long = "pattern")]
        patterns: Vec<PathBuf>,

        /// Placement offset x,y for the matching --pattern
        #[arg(short, long = "offset")]
        offsets: Vec<Offset>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            topology,
            generations,
            patterns,
            offsets,
            output,
            delay,
            verbose,
        } => run_command(
            config,
            CliOverrides {
                rows,
                cols,
                topology,
                generations,
                patterns: pair_pattern_slots(patterns, offsets),
                output_dir: output,
            },
            delay,
            verbose,
        ),
        Commands::Inspect {
            config,
            rows,
            cols,
            topology,
            patterns,
            offsets,
        } => inspect_command(
            config,
            CliOverrides {
                rows,
                cols,
                topology,
                generations: None,
                patterns: pair_pattern_slots(patterns, offsets),
                output_dir: None,
            },
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Pair each `--pattern` with its positional `--offset`, defaulting to (0,0)
fn pair_pattern_slots(patterns: Vec<PathBuf>, offsets: Vec<Offset>) -> Vec<PatternSlot> {
    patterns
        .into_iter()
        .enumerate()
        .map(|(i, file)| PatternSlot {
            file,
            offset: offsets.get(i).copied().unwrap_or_default(),
        })
        .collect()
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    delay: u64,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.rows, settings.grid.cols);
        println!("  Topology: {}", settings.simulation.topology);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Pattern slots: {}", settings.patterns.len());
        println!("  Output dir: {}", settings.output.directory.display());
        println!();
    }

    let mut sim = build_simulation(&settings).context("Failed to build simulation")?;
    let generations = settings.simulation.generations;
    let print_every = settings.output.print_every;

    let mut history = Vec::with_capacity(generations as usize + 1);
    history.push(sim.population());

    if print_every > 0 {
        println!(
            "{}",
            GridFormatter::format_generation_header(0, sim.population())
        );
        print!("{}", GridFormatter::format_compact(sim.grid()));
    }
    let mut progress = (print_every == 0).then(|| ProgressIndicator::new(generations));

    for generation in 1..=generations {
        sim.step()?;
        history.push(sim.population());

        if print_every > 0 && generation % print_every == 0 {
            println!(
                "{}",
                GridFormatter::format_generation_header(generation, sim.population())
            );
            print!("{}", GridFormatter::format_compact(sim.grid()));
            if delay > 0 {
                std::thread::sleep(Duration::from_millis(delay));
            }
        }
        if let Some(progress) = progress.as_mut() {
            progress.update(generation);
        }
    }
    if let Some(progress) = progress {
        progress.finish();
    }

    let summary = RunSummary::from_simulation(&sim, history);
    print!("{}", summary.format_text());

    let path = summary
        .save(&settings.output.directory, &settings.output.format)
        .context("Failed to save run summary")?;
    println!(
        "{}",
        ColorOutput::success(&format!("Summary saved to {}", path.display()))
    );

    Ok(())
}

fn inspect_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let sim = build_simulation(&settings).context("Failed to build simulation")?;

    println!(
        "Starting grid ({}x{}, {} topology):",
        sim.grid().rows(),
        sim.grid().cols(),
        sim.topology()
    );
    println!("{}", GridFormatter::format_with_coords(sim.grid()));

    let population = sim.population();
    let cells = sim.grid().rows() * sim.grid().cols();
    println!("Living cells: {}", population);
    println!(
        "Density: {:.1}%",
        (population as f64 / cells as f64) * 100.0
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &pattern_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut torus_config = Settings::default();
    torus_config.simulation.topology = Topology::Torus;
    torus_config.patterns = vec![PatternSlot {
        file: pattern_dir.join("glider_106.lif"),
        offset: Offset::new(10, 10),
    }];
    torus_config.to_file(&examples_dir.join("torus_glider.yaml"))?;

    let mut klein_config = Settings::default();
    klein_config.simulation.topology = Topology::Klein;
    klein_config.patterns = vec![PatternSlot {
        file: pattern_dir.join("glider_105.lif"),
        offset: Offset::new(10, 10),
    }];
    klein_config.to_file(&examples_dir.join("klein_glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your pattern files to {}", pattern_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
