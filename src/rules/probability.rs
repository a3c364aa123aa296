//! Rules that drive per-neuron activation probabilities.

use crate::config::{
    ActivationConfig, ExternalInputConfig, HomeostasisConfig, InhibitionConfig, NoiseConfig,
    RefractoryConfig,
};
use crate::network::Network;
use crate::source::RandomSource;
use ndarray::Array1;

use super::sampled_count;

/// Raise or lower each probability based on neighbor activity.
///
/// Activity is `W · p`; a neuron's neighbor activity is its outgoing
/// weights dotted with everyone else's activity, averaged over the N-1
/// others. The whole stage works from the pre-stage probability snapshot.
/// Networks of size 0 or 1 have no neighbors and are left unchanged.
pub fn update_probabilities(net: &mut Network, config: &ActivationConfig) {
    let n = net.size();
    if n <= 1 {
        return;
    }

    let probs = Array1::from(net.probabilities());
    let activity = net.weights.dot(&probs);
    let weighted = net.weights.dot(&activity);

    for i in 0..n {
        let neighbor = (weighted[i] - net.weights[[i, i]] * activity[i]) / (n as f32 - 1.0);
        let p = &mut net.neurons[i].probability;
        if neighbor > config.threshold {
            *p += config.increase;
        } else {
            *p -= config.decrease;
        }
        *p = p.clamp(0.0, 1.0);
    }
}

/// Stimulate a random subset of neurons
pub fn apply_external_input(
    net: &mut Network,
    config: &ExternalInputConfig,
    source: &mut dyn RandomSource,
) {
    let count = sampled_count(net.size(), config.rate);
    for idx in source.sample_indices(net.size(), count) {
        let p = &mut net.neurons[idx].probability;
        *p = (*p + config.strength).clamp(0.0, 1.0);
    }
}

/// Suppress a random subset of neurons and halve their outgoing weights
pub fn apply_inhibition(
    net: &mut Network,
    config: &InhibitionConfig,
    source: &mut dyn RandomSource,
) {
    let count = sampled_count(net.size(), config.rate);
    for idx in source.sample_indices(net.size(), count) {
        let p = &mut net.neurons[idx].probability;
        *p = (*p - config.strength).max(0.0);
        net.weights
            .row_mut(idx)
            .mapv_inplace(|w| (w * 0.5).clamp(0.0, 1.0));
    }
}

/// Relax every probability toward the target, first-order
pub fn apply_homeostasis(net: &mut Network, config: &HomeostasisConfig) {
    for neuron in &mut net.neurons {
        let delta = (config.target - neuron.probability) * config.rate;
        neuron.probability = (neuron.probability + delta).clamp(0.0, 1.0);
    }
}

/// Reset strongly activated neurons and count refractory periods down.
///
/// The counter is advisory: no other stage reads it.
pub fn apply_refractory(net: &mut Network, config: &RefractoryConfig) {
    for neuron in &mut net.neurons {
        if neuron.probability > 0.5 {
            neuron.probability = 0.0;
            neuron.refractory = config.period;
        } else if neuron.refractory > 0 {
            neuron.refractory -= 1;
        }
    }
}

/// Perturb a random subset of probabilities
pub fn apply_noise(net: &mut Network, config: &NoiseConfig, source: &mut dyn RandomSource) {
    let count = sampled_count(net.size(), config.rate);
    for idx in source.sample_indices(net.size(), count) {
        let delta = source.range(-config.strength, config.strength);
        let p = &mut net.neurons[idx].probability;
        *p = (*p + delta).clamp(0.0, 1.0);
    }
}
