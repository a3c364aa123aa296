//! Statistics tracking for the simulation.

use crate::network::Network;
use crate::spike::{SpikeEvent, SpikeKind};
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation tick
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation tick
    pub time: u64,
    /// Network size
    pub size: usize,
    /// Neurons above the 0.5 activation threshold
    pub active: usize,
    /// Neurons with a running refractory countdown
    pub refractory: usize,
    /// Mean activation probability
    pub probability_mean: f32,
    /// Maximum activation probability
    pub probability_max: f32,
    /// Mean connection weight
    pub weight_mean: f32,
    /// Excite events this tick
    pub excites: usize,
    /// Inhibit events this tick
    pub inhibits: usize,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from the current network state and tick events
    pub fn update(&mut self, net: &Network, events: &[SpikeEvent]) {
        let n = net.size();
        self.size = n;
        self.active = net.active_count();
        self.refractory = net.refractory_count();

        if n == 0 {
            self.probability_mean = 0.0;
            self.probability_max = 0.0;
            self.weight_mean = 0.0;
        } else {
            let probs = net.probabilities();
            self.probability_mean = probs.iter().sum::<f32>() / n as f32;
            self.probability_max = probs.iter().fold(0.0f32, |max, &p| max.max(p));
            self.weight_mean = net.weights.sum() / (n * n) as f32;
        }

        self.excites = events
            .iter()
            .filter(|e| e.kind == SpikeKind::Excite)
            .count();
        self.inhibits = events.len() - self.excites;
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "T:{:6} | Active:{:3}/{:<3} | Refr:{:3} | P:{:.3} (max {:.3}) | W:{:.3} | +{} -{}",
            self.time,
            self.active,
            self.size,
            self.refractory,
            self.probability_mean,
            self.probability_max,
            self.weight_mean,
            self.excites,
            self.inhibits,
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Mean probability over time
    pub fn probability_series(&self) -> Vec<(u64, f32)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.probability_mean))
            .collect()
    }

    /// Active neuron count over time
    pub fn active_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.time, s.active)).collect()
    }

    /// Mean weight over time
    pub fn weight_series(&self) -> Vec<(u64, f32)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.weight_mean))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }
}
