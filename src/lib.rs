//! # sparknet
//!
//! Stochastic simulation of a small, fully-connected network of
//! scalar-valued neurons. Every tick, a spike-propagation pass and a
//! fixed pipeline of eleven rules (drift, feedback, inhibition, windowed
//! plasticity, Hebbian reinforcement, modulation, homeostasis, refractory
//! decay, noise) perturb per-neuron activation probabilities and the
//! directed connection matrix. Renderers consume the resulting state and
//! events read-only; they are external to this crate.
//!
//! ## Quick start
//!
//! ```rust
//! use sparknet::{Config, Simulation};
//!
//! let mut config = Config::default();
//! config.network.size = 25;
//!
//! let mut sim = Simulation::new_with_seed(config, 42);
//! for _ in 0..100 {
//!     let events = sim.tick().len();
//!     println!("tick {}: {} events", sim.time, events);
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use sparknet::Config;
//!
//! let mut config = Config::default();
//! config.hebbian.learning_rate = 0.05;
//! config.noise.strength = 0.02;
//! assert!(config.validate().is_ok());
//! ```
//!
//! All randomness flows through an injectable [`source::RandomSource`];
//! the same seed and configuration always reproduce the same run.

pub mod config;
pub mod engine;
pub mod network;
pub mod rules;
pub mod snapshot;
pub mod source;
pub mod spike;
pub mod stats;

// Re-export main types
pub use config::Config;
pub use engine::Simulation;
pub use network::Network;
pub use spike::{SpikeEvent, SpikeKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(ticks: u64, size: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.network.size = size;

    let mut sim = Simulation::new(config);

    let start = Instant::now();
    sim.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks,
        size,
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: ticks as f64 / elapsed.as_secs_f64(),
        active: sim.network.active_count(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub size: usize,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
    pub active: usize,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Network size: {}", self.size)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        writeln!(f, "Active neurons at end: {}", self.active)?;
        Ok(())
    }
}
