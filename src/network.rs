//! Network state: the neuron set and its directed connection matrix.

use crate::config::NetworkConfig;
use crate::source::RandomSource;
use ndarray::Array2;

/// A single scalar-valued unit
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    /// Horizontal position (renderer-facing only)
    pub x: i32,
    /// Vertical position (renderer-facing only)
    pub y: i32,
    /// Activation probability, kept in [0, 1]
    pub probability: f32,
    /// Refractory countdown; 0 means not refractory
    pub refractory: u32,
}

/// The full simulation state: N neurons plus an N×N weight matrix.
///
/// `weights[[i, j]]` is the directed influence of neuron i on neuron j.
/// Self-weights are permitted and count in activity sums. A neuron's
/// identity is its index; the dimension never changes during a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    pub neurons: Vec<Neuron>,
    pub weights: Array2<f32>,
}

impl Network {
    /// Build an initial network from configuration.
    ///
    /// Neurons start at the configured probability with no refractory
    /// countdown and random positions inside the bounds; weights are
    /// i.i.d. uniform in [0, 1]. `size == 0` yields a valid empty network.
    pub fn new(config: &NetworkConfig, source: &mut dyn RandomSource) -> Self {
        let n = config.size;

        let neurons = (0..n)
            .map(|_| Neuron {
                x: source.range(0.0, config.width as f32) as i32,
                y: source.range(0.0, config.height as f32) as i32,
                probability: config.initial_probability,
                refractory: 0,
            })
            .collect();

        let weights = Array2::from_shape_fn((n, n), |_| source.uniform());

        Self { neurons, weights }
    }

    /// Number of neurons
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Current probabilities as a flat vector, in index order
    pub fn probabilities(&self) -> Vec<f32> {
        self.neurons.iter().map(|n| n.probability).collect()
    }

    /// Neurons currently above the activation threshold of 0.5
    pub fn active_count(&self) -> usize {
        self.neurons.iter().filter(|n| n.probability > 0.5).count()
    }

    /// Neurons with a running refractory countdown
    pub fn refractory_count(&self) -> usize {
        self.neurons.iter().filter(|n| n.refractory > 0).count()
    }

    /// Check the state invariants: probabilities and weights in [0, 1],
    /// matrix dimension matching the neuron count.
    pub fn is_valid(&self) -> bool {
        let n = self.neurons.len();
        self.weights.dim() == (n, n)
            && self
                .neurons
                .iter()
                .all(|u| (0.0..=1.0).contains(&u.probability))
            && self.weights.iter().all(|&w| (0.0..=1.0).contains(&w))
    }
}
