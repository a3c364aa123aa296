//! The per-tick rule pipeline.
//!
//! Eleven independent stages, each mutating the network state in place:
//! - probability rules: neighbor-activity updates, external input,
//!   inhibition, homeostasis, refractory countdown, noise
//! - synapse rules: random drift, feedback, windowed plasticity,
//!   Hebbian reinforcement, modulation
//!
//! Stage order is fixed by the tick driver; see [`crate::engine::tick`].

mod probability;
mod synapse;

pub use probability::{
    apply_external_input, apply_homeostasis, apply_inhibition, apply_noise, apply_refractory,
    update_probabilities,
};
pub use synapse::{apply_feedback, apply_hebbian, apply_modulation, apply_plasticity, mutate_weights};

/// How many neurons a sampled stage touches: floor(n * rate)
pub(crate) fn sampled_count(n: usize, rate: f32) -> usize {
    (n as f32 * rate).floor() as usize
}
