//! Spike propagation: one stochastic pairwise interaction per neuron per
//! tick, run before the rule pipeline. Emits the events renderers draw.

use crate::config::SpikeConfig;
use crate::network::Network;
use crate::source::RandomSource;

/// What a propagation event did to its target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeKind {
    Excite,
    Inhibit,
}

/// A single propagation event, addressed by neuron indices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpikeEvent {
    pub kind: SpikeKind,
    pub from: usize,
    pub to: usize,
}

/// Run one propagation pass over all neurons in index order.
///
/// Each source neuron i picks a target j weighted by its outgoing row,
/// then either excites (`weights[[i,j]] * p[i]` chance) or inhibits
/// (`weights[[j,i]] * p[i]` chance). Both branches mutate the forward
/// edge `[i, j]`; only the inhibition test reads the reverse edge.
pub fn propagate(
    net: &mut Network,
    config: &SpikeConfig,
    source: &mut dyn RandomSource,
) -> Vec<SpikeEvent> {
    let n = net.size();
    let mut events = Vec::new();

    for i in 0..n {
        let row = net.weights.row(i).to_vec();
        let j = match source.weighted_choice(&row) {
            Some(j) => j,
            None => continue,
        };

        let p = net.neurons[i].probability;
        let excite_chance = net.weights[[i, j]] * p;

        if source.uniform() < excite_chance {
            net.weights[[i, j]] = (net.weights[[i, j]] + config.delta).clamp(0.0, 1.0);
            events.push(SpikeEvent {
                kind: SpikeKind::Excite,
                from: i,
                to: j,
            });
        } else {
            let inhibit_chance = net.weights[[j, i]] * p;
            if source.uniform() < inhibit_chance {
                net.weights[[i, j]] = (net.weights[[i, j]] - config.delta).clamp(0.0, 1.0);
                events.push(SpikeEvent {
                    kind: SpikeKind::Inhibit,
                    from: i,
                    to: j,
                });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::source::ChaChaSource;
    use ndarray::array;
    use std::collections::VecDeque;

    /// Test source replaying queued draws and target choices
    struct Scripted {
        uniforms: VecDeque<f32>,
        choices: VecDeque<usize>,
    }

    impl Scripted {
        fn new(uniforms: &[f32], choices: &[usize]) -> Self {
            Self {
                uniforms: uniforms.iter().copied().collect(),
                choices: choices.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn uniform(&mut self) -> f32 {
            self.uniforms.pop_front().unwrap_or(0.99)
        }

        fn weighted_choice(&mut self, weights: &[f32]) -> Option<usize> {
            if weights.is_empty() {
                return None;
            }
            let pick = self.choices.pop_front().unwrap_or(0);
            Some(pick.min(weights.len() - 1))
        }

        fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
            (0..amount.min(len)).collect()
        }
    }

    fn two_neuron_net(p0: f32, p1: f32) -> Network {
        let config = NetworkConfig {
            size: 2,
            ..NetworkConfig::default()
        };
        let mut source = ChaChaSource::new(0);
        let mut net = Network::new(&config, &mut source);
        net.neurons[0].probability = p0;
        net.neurons[1].probability = p1;
        net.weights = array![[0.0, 0.3], [0.9, 0.0]];
        net
    }

    #[test]
    fn test_excite_strengthens_forward_edge() {
        let mut net = two_neuron_net(1.0, 0.0);
        // Neuron 0 targets 1, draw 0.1 < 0.3 * 1.0 excites.
        // Neuron 1 targets 0 but its probability is zero: no event.
        let mut source = Scripted::new(&[0.1, 0.5, 0.5], &[1, 0]);

        let events = propagate(&mut net, &SpikeConfig::default(), &mut source);

        assert_eq!(
            events,
            vec![SpikeEvent {
                kind: SpikeKind::Excite,
                from: 0,
                to: 1
            }]
        );
        assert!((net.weights[[0, 1]] - 0.4).abs() < 1e-6);
        assert!((net.weights[[1, 0]] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_inhibit_reads_reverse_edge_mutates_forward() {
        let mut net = two_neuron_net(1.0, 0.0);
        // Excite draw 0.9 fails (chance 0.3); inhibit draw 0.5 succeeds
        // against the reverse edge chance 0.9 * 1.0.
        let mut source = Scripted::new(&[0.9, 0.5, 0.5, 0.5], &[1, 0]);

        let events = propagate(&mut net, &SpikeConfig::default(), &mut source);

        assert_eq!(
            events,
            vec![SpikeEvent {
                kind: SpikeKind::Inhibit,
                from: 0,
                to: 1
            }]
        );
        // The forward edge shrinks; the reverse edge only gets read.
        assert!((net.weights[[0, 1]] - 0.2).abs() < 1e-6);
        assert!((net.weights[[1, 0]] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_no_event_leaves_weights_untouched() {
        let mut net = two_neuron_net(1.0, 0.0);
        net.weights = array![[0.0, 0.3], [0.0, 0.0]];
        // Both draws fail for neuron 0; neuron 1 has zero probability.
        let mut source = Scripted::new(&[0.9, 0.9, 0.5, 0.5], &[1, 0]);

        let events = propagate(&mut net, &SpikeConfig::default(), &mut source);

        assert!(events.is_empty());
        assert_eq!(net.weights, array![[0.0, 0.3], [0.0, 0.0]]);
    }

    #[test]
    fn test_updates_are_clamped() {
        let mut net = two_neuron_net(1.0, 0.0);
        net.weights = array![[0.0, 0.95], [1.0, 0.0]];
        let mut source = Scripted::new(&[0.1, 0.5, 0.5], &[1, 0]);

        propagate(&mut net, &SpikeConfig::default(), &mut source);
        assert_eq!(net.weights[[0, 1]], 1.0);

        // Same setup, but the excite draw fails and the inhibit hits a
        // weight smaller than the delta.
        let mut net = two_neuron_net(1.0, 0.0);
        net.weights = array![[0.0, 0.05], [1.0, 0.0]];
        let mut source = Scripted::new(&[0.9, 0.1, 0.5, 0.5], &[1, 0]);

        propagate(&mut net, &SpikeConfig::default(), &mut source);
        assert_eq!(net.weights[[0, 1]], 0.0);
    }

    #[test]
    fn test_empty_network() {
        let config = NetworkConfig {
            size: 0,
            ..NetworkConfig::default()
        };
        let mut source = ChaChaSource::new(1);
        let mut net = Network::new(&config, &mut source);

        let events = propagate(&mut net, &SpikeConfig::default(), &mut source);
        assert!(events.is_empty());
    }

    #[test]
    fn test_propagation_preserves_invariants() {
        let config = NetworkConfig::default();
        let mut source = ChaChaSource::new(99);
        let mut net = Network::new(&config, &mut source);
        for neuron in &mut net.neurons {
            neuron.probability = 0.8;
        }

        for _ in 0..100 {
            let events = propagate(&mut net, &SpikeConfig::default(), &mut source);
            assert!(net.is_valid());
            for event in events {
                assert!(event.from < net.size());
                assert!(event.to < net.size());
            }
        }
    }
}
