//! Configuration for the sparknet simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub spike: SpikeConfig,
    pub activation: ActivationConfig,
    pub mutation: MutationConfig,
    pub external: ExternalInputConfig,
    pub feedback: FeedbackConfig,
    pub inhibition: InhibitionConfig,
    pub plasticity: PlasticityConfig,
    pub hebbian: HebbianConfig,
    pub modulation: ModulationConfig,
    pub homeostasis: HomeostasisConfig,
    pub refractory: RefractoryConfig,
    pub noise: NoiseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network size and initial state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of neurons
    pub size: usize,
    /// Activation probability every neuron starts with
    pub initial_probability: f32,
    /// Horizontal position bound (renderer-facing)
    pub width: i32,
    /// Vertical position bound (renderer-facing)
    pub height: i32,
}

/// Spike propagation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpikeConfig {
    /// Weight delta applied on an excite or inhibit event
    pub delta: f32,
}

/// Neighbor-activity driven probability updates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Neighbor activity level above which probability rises
    pub threshold: f32,
    /// Probability gain when neighbors are active
    pub increase: f32,
    /// Probability loss when neighbors are quiet
    pub decrease: f32,
}

/// Random weight drift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Probability of mutating each weight
    pub rate: f32,
    /// Half-width of the multiplicative mutation factor
    pub size: f32,
}

/// External stimulation of random neurons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalInputConfig {
    /// Probability boost per stimulated neuron
    pub strength: f32,
    /// Fraction of the network stimulated per tick
    pub rate: f32,
}

/// Incoming-weight feedback reinforcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Scale applied to each neuron's summed incoming weight
    pub strength: f32,
}

/// Global inhibition of random neurons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InhibitionConfig {
    /// Probability reduction per inhibited neuron
    pub strength: f32,
    /// Fraction of the network inhibited per tick
    pub rate: f32,
}

/// Index-windowed synaptic plasticity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlasticityConfig {
    /// Half-width of the index window around each neuron
    pub window: usize,
    /// Active fraction above which a row is scaled
    pub threshold: f32,
    /// Multiplicative scaling factor
    pub factor: f32,
}

/// Hebbian reinforcement of co-active pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HebbianConfig {
    /// Weight gain for each co-active ordered pair
    pub learning_rate: f32,
}

/// Modulatory perturbation of random rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulationConfig {
    /// Half-width of the additive perturbation
    pub strength: f32,
    /// Fraction of rows modulated per tick
    pub rate: f32,
}

/// First-order relaxation toward a target probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeostasisConfig {
    /// Probability every neuron relaxes toward
    pub target: f32,
    /// Relaxation rate per tick
    pub rate: f32,
}

/// Post-activation refractory countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefractoryConfig {
    /// Ticks the counter is set to after an activation
    pub period: u32,
}

/// Probability noise on random neurons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Half-width of the additive noise
    pub strength: f32,
    /// Fraction of the network perturbed per tick
    pub rate: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Ticks between stats history records
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            spike: SpikeConfig::default(),
            activation: ActivationConfig::default(),
            mutation: MutationConfig::default(),
            external: ExternalInputConfig::default(),
            feedback: FeedbackConfig::default(),
            inhibition: InhibitionConfig::default(),
            plasticity: PlasticityConfig::default(),
            hebbian: HebbianConfig::default(),
            modulation: ModulationConfig::default(),
            homeostasis: HomeostasisConfig::default(),
            refractory: RefractoryConfig::default(),
            noise: NoiseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            size: 25,
            initial_probability: 0.1,
            width: 800,
            height: 600,
        }
    }
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self { delta: 0.1 }
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            increase: 0.1,
            decrease: 0.05,
        }
    }
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self { rate: 0.1, size: 0.1 }
    }
}

impl Default for ExternalInputConfig {
    fn default() -> Self {
        Self { strength: 0.1, rate: 0.1 }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { strength: 0.1 }
    }
}

impl Default for InhibitionConfig {
    fn default() -> Self {
        Self { strength: 0.1, rate: 0.1 }
    }
}

impl Default for PlasticityConfig {
    fn default() -> Self {
        Self {
            window: 10,
            threshold: 0.1,
            factor: 0.1,
        }
    }
}

impl Default for HebbianConfig {
    fn default() -> Self {
        Self { learning_rate: 0.1 }
    }
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self { strength: 0.1, rate: 0.1 }
    }
}

impl Default for HomeostasisConfig {
    fn default() -> Self {
        Self { target: 0.1, rate: 0.1 }
    }
}

impl Default for RefractoryConfig {
    fn default() -> Self {
        Self { period: 10 }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { strength: 0.05, rate: 0.1 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        fn unit(name: &str, value: f32) -> Result<(), String> {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be between 0.0 and 1.0", name));
            }
            Ok(())
        }

        unit("network.initial_probability", self.network.initial_probability)?;
        if self.network.width <= 0 || self.network.height <= 0 {
            return Err("network bounds must be positive".to_string());
        }
        unit("spike.delta", self.spike.delta)?;
        unit("activation.threshold", self.activation.threshold)?;
        unit("activation.increase", self.activation.increase)?;
        unit("activation.decrease", self.activation.decrease)?;
        unit("mutation.rate", self.mutation.rate)?;
        unit("mutation.size", self.mutation.size)?;
        unit("external.rate", self.external.rate)?;
        unit("external.strength", self.external.strength)?;
        unit("inhibition.rate", self.inhibition.rate)?;
        unit("inhibition.strength", self.inhibition.strength)?;
        unit("plasticity.threshold", self.plasticity.threshold)?;
        unit("plasticity.factor", self.plasticity.factor)?;
        unit("hebbian.learning_rate", self.hebbian.learning_rate)?;
        unit("modulation.rate", self.modulation.rate)?;
        unit("homeostasis.target", self.homeostasis.target)?;
        unit("homeostasis.rate", self.homeostasis.rate)?;
        unit("noise.rate", self.noise.rate)?;
        if self.feedback.strength < 0.0 {
            return Err("feedback.strength must be non-negative".to_string());
        }
        if self.modulation.strength < 0.0 {
            return Err("modulation.strength must be non-negative".to_string());
        }
        if self.noise.strength < 0.0 {
            return Err("noise.strength must be non-negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.network.size, loaded.network.size);
        assert_eq!(config.plasticity.window, loaded.plasticity.window);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut config = Config::default();
        config.mutation.rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_section_optional() {
        let config = Config::default();
        let mut yaml = serde_yaml::to_string(&config).unwrap();
        let cut = yaml.find("logging:").unwrap();
        yaml.truncate(cut);
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded.logging.stats_interval, 50);
    }
}
