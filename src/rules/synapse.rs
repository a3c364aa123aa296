//! Rules that drive the connection weights.

use crate::config::{
    FeedbackConfig, HebbianConfig, ModulationConfig, MutationConfig, PlasticityConfig,
};
use crate::network::Network;
use crate::source::RandomSource;

use super::sampled_count;

/// Random multiplicative drift on every weight, Bernoulli per entry
pub fn mutate_weights(net: &mut Network, config: &MutationConfig, source: &mut dyn RandomSource) {
    net.weights.mapv_inplace(|w| {
        if source.uniform() < config.rate {
            let factor = source.range(1.0 - config.size, 1.0 + config.size);
            (w * factor).clamp(0.0, 1.0)
        } else {
            w
        }
    });
}

/// Reinforce each neuron's incoming column by its pre-stage incoming sum.
///
/// All feedback weights come from a snapshot of the matrix taken before
/// any mutation, so later columns never observe earlier updates.
pub fn apply_feedback(net: &mut Network, config: &FeedbackConfig) {
    let n = net.size();
    if n == 0 {
        return;
    }

    let old = net.weights.clone();
    for i in 0..n {
        let incoming = old.column(i).sum() - old[[i, i]];
        let feedback_weight = config.strength * incoming;
        net.weights
            .column_mut(i)
            .mapv_inplace(|w| (w + feedback_weight).clamp(0.0, 1.0));
    }
}

/// Scale each outgoing row by the activity inside an index window.
///
/// The window `[i-window, i+window]` slides over neuron indices, not
/// time. The positive branch is checked first and wins when both
/// fractions clear the threshold.
pub fn apply_plasticity(net: &mut Network, config: &PlasticityConfig) {
    let n = net.size();
    let probs = net.probabilities();

    for i in 0..n {
        let start = i.saturating_sub(config.window);
        let end = (i + config.window + 1).min(n);
        let active = probs[start..end].iter().filter(|&&p| p > 0.5).count();
        let positive_fraction = active as f32 / (end - start) as f32;
        let negative_fraction = 1.0 - positive_fraction;

        let factor = if positive_fraction > config.threshold {
            1.0 + config.factor
        } else if negative_fraction > config.threshold {
            1.0 - config.factor
        } else {
            continue;
        };

        net.weights
            .row_mut(i)
            .mapv_inplace(|w| (w * factor).clamp(0.0, 1.0));
    }
}

/// Strengthen the edge between every ordered pair of co-active neurons
pub fn apply_hebbian(net: &mut Network, config: &HebbianConfig) {
    let n = net.size();
    let probs = net.probabilities();

    for i in 0..n {
        if probs[i] <= 0.5 {
            continue;
        }
        for j in 0..n {
            if i == j || probs[j] <= 0.5 {
                continue;
            }
            net.weights[[i, j]] =
                (net.weights[[i, j]] + config.learning_rate).clamp(0.0, 1.0);
        }
    }
}

/// Add independent uniform perturbations to a random subset of rows
pub fn apply_modulation(
    net: &mut Network,
    config: &ModulationConfig,
    source: &mut dyn RandomSource,
) {
    let n = net.size();
    let count = sampled_count(n, config.rate);
    for row in source.sample_indices(n, count) {
        for j in 0..n {
            let delta = source.range(-config.strength, config.strength);
            net.weights[[row, j]] = (net.weights[[row, j]] + delta).clamp(0.0, 1.0);
        }
    }
}
