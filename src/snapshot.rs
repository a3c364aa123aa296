//! Snapshot structures for renderer communication.
//!
//! These are lightweight copies of simulation state. External renderers
//! read them once per tick and never write back into the network.

use crate::engine::Simulation;
use crate::spike::SpikeEvent;
use crate::stats::Stats;

/// Lightweight view of a neuron for rendering
#[derive(Clone, Debug)]
pub struct NeuronView {
    pub x: i32,
    pub y: i32,
    pub probability: f32,
    pub refractory: u32,
}

/// Complete network snapshot for rendering
#[derive(Clone, Debug)]
pub struct NetworkSnapshot {
    /// Current simulation tick
    pub time: u64,
    /// Statistics
    pub stats: Stats,
    /// All neurons (lightweight view)
    pub neurons: Vec<NeuronView>,
    /// Flattened weight matrix (row-major, size x size)
    pub weights: Vec<f32>,
    /// Network dimension
    pub size: usize,
    /// Events emitted by the last tick
    pub events: Vec<SpikeEvent>,
}

impl NetworkSnapshot {
    /// Create a snapshot from the current simulation state
    pub fn from_simulation(sim: &Simulation) -> Self {
        let neurons = sim
            .network
            .neurons
            .iter()
            .map(|n| NeuronView {
                x: n.x,
                y: n.y,
                probability: n.probability,
                refractory: n.refractory,
            })
            .collect();

        Self {
            time: sim.time,
            stats: sim.stats.clone(),
            neurons,
            weights: sim.network.weights.iter().copied().collect(),
            size: sim.network.size(),
            events: sim.events().to_vec(),
        }
    }

    /// Weight of the directed edge from -> to
    pub fn weight(&self, from: usize, to: usize) -> f32 {
        self.weights[from * self.size + to]
    }
}
