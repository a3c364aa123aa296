//! sparknet - CLI entry point
//!
//! Headless runner for the stochastic network simulation.

use clap::{Parser, Subcommand};
use sparknet::{benchmark, Config, Simulation};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sparknet")]
#[command(version)]
#[command(about = "Stochastic spiking-network simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation headless
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10000")]
        ticks: u64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write the stats history (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Network size
        #[arg(short, long, default_value = "25")]
        size: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            output,
            quiet,
        } => run_simulation(config, ticks, seed, output, quiet),

        Commands::Benchmark { ticks, size } => run_benchmark(ticks, size),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    seed: Option<u64>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    let mut sim = match seed {
        Some(s) => {
            println!("Using seed: {}", s);
            Simulation::new_with_seed(config, s)
        }
        None => Simulation::new(config),
    };

    println!("Starting simulation");
    println!("  Network size: {}", sim.network.size());
    println!("  Seed: {}", sim.seed());
    println!("  Ticks: {}", ticks);
    println!();

    let stats_interval = sim.config.logging.stats_interval.max(1);
    let start = Instant::now();

    for _ in 0..ticks {
        sim.tick();

        if !quiet && sim.time % stats_interval == 0 {
            println!("{}", sim.stats.summary());
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", sim.time);
    println!("Speed: {:.1} ticks/s", sim.time as f64 / elapsed.as_secs_f64());
    println!("Active neurons: {}", sim.network.active_count());
    println!("Mean probability: {:.3}", sim.stats.probability_mean);

    if let Some(path) = output {
        sim.stats_history.save(path.to_str().unwrap())?;
        println!("Stats history: {:?}", path);
    }

    Ok(())
}

fn run_benchmark(ticks: u64, size: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== sparknet Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Network size: {}", size);
    println!();

    let result = benchmark(ticks, size);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
