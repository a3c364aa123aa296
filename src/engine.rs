//! Simulation engine: the tick driver and its fixed pipeline.

use crate::config::Config;
use crate::network::Network;
use crate::rules;
use crate::snapshot::NetworkSnapshot;
use crate::source::{ChaChaSource, RandomSource};
use crate::spike::{self, SpikeEvent};
use crate::stats::{Stats, StatsHistory};

/// Advance the network by one tick.
///
/// Stage order is fixed and not configurable: spike propagation first,
/// then the eleven rules. Each stage reads exactly the state its
/// predecessor left behind; the stages do not commute.
pub fn tick(net: &mut Network, config: &Config, source: &mut dyn RandomSource) -> Vec<SpikeEvent> {
    let events = spike::propagate(net, &config.spike, source);

    rules::update_probabilities(net, &config.activation);
    rules::mutate_weights(net, &config.mutation, source);
    rules::apply_external_input(net, &config.external, source);
    rules::apply_feedback(net, &config.feedback);
    rules::apply_inhibition(net, &config.inhibition, source);
    rules::apply_plasticity(net, &config.plasticity);
    rules::apply_hebbian(net, &config.hebbian);
    rules::apply_modulation(net, &config.modulation, source);
    rules::apply_homeostasis(net, &config.homeostasis);
    rules::apply_refractory(net, &config.refractory);
    rules::apply_noise(net, &config.noise, source);

    events
}

/// The simulation driver
pub struct Simulation {
    // State
    pub network: Network,
    pub time: u64,

    // Configuration
    pub config: Config,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    // Events emitted by the last tick
    events: Vec<SpikeEvent>,

    // Random source (seeded for reproducibility)
    source: ChaChaSource,
}

impl Simulation {
    /// Create a new simulation with the given configuration
    pub fn new(config: Config) -> Self {
        Self::with_source(config, ChaChaSource::from_entropy())
    }

    /// Create a new simulation with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        Self::with_source(config, ChaChaSource::new(seed))
    }

    fn with_source(config: Config, mut source: ChaChaSource) -> Self {
        let network = Network::new(&config.network, &mut source);
        let stats_history = StatsHistory::new(config.logging.stats_interval);

        log::info!(
            "Network created: size={} seed={}",
            network.size(),
            source.seed()
        );

        Self {
            network,
            time: 0,
            config,
            stats: Stats::new(),
            stats_history,
            events: Vec::new(),
            source,
        }
    }

    /// Run one tick and return the events it emitted
    pub fn tick(&mut self) -> &[SpikeEvent] {
        self.events = tick(&mut self.network, &self.config, &mut self.source);
        self.time += 1;
        self.update_stats();
        &self.events
    }

    /// Events emitted by the most recent tick
    pub fn events(&self) -> &[SpikeEvent] {
        &self.events
    }

    /// Run the simulation for the specified number of ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Run with a callback for progress updates
    pub fn run_with_callback<F>(&mut self, ticks: u64, mut callback: F)
    where
        F: FnMut(&Simulation, u64),
    {
        for i in 0..ticks {
            self.tick();
            callback(self, i);
        }
    }

    /// Build a read-only snapshot for a renderer
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::from_simulation(self)
    }

    /// Seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    fn update_stats(&mut self) {
        self.stats.time = self.time;
        self.stats.update(&self.network, &self.events);

        let interval = self.stats_history.interval;
        if interval > 0 && self.time % interval == 0 {
            log::debug!("{}", self.stats.summary());
            self.stats_history.record(self.stats.clone());
        }
    }
}
