//! Configuration for the engine and its driver.
//!
//! Every section has a `Default` that reproduces the stock model, so an empty
//! `config.toml` is valid.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [adex]
//! fire_threshold = 30.0
//!
//! [muscles]
//! left = ["MDL21"]
//!
//! [sensory]
//! reset_after_ms = 2000
//!
//! [bootstrap]
//! count = 40
//! seed = 42
//!
//! [simulation]
//! execution = "parallel"
//! ```

use crate::adex::AdExParams;
use crate::error::{EngineError, Result};
use crate::muscle::MuscleConfig;
use serde::{Deserialize, Serialize};
use wormbrain_data::SensoryGroup;

/// How the per-neuron phases of a tick are scheduled.
///
/// `Sequential` is bit-for-bit reproducible. `Parallel` may differ from it in
/// the last bits of accumulated signal because floating-point addition is not
/// associative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

/// Identities pulsed by each sensory group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SensoryConfig {
    pub hunger: Vec<String>,
    pub nose_touch: Vec<String>,
    pub food_sense: Vec<String>,
    /// How long a touch or food stimulus stays latched in the driver.
    pub reset_after_ms: u64,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for SensoryConfig {
    fn default() -> Self {
        Self {
            hunger: owned(SensoryGroup::Hunger.default_neurons()),
            nose_touch: owned(SensoryGroup::NoseTouch.default_neurons()),
            food_sense: owned(SensoryGroup::FoodSense.default_neurons()),
            reset_after_ms: 2000,
        }
    }
}

impl SensoryConfig {
    pub fn neurons(&self, group: SensoryGroup) -> &[String] {
        match group {
            SensoryGroup::Hunger => &self.hunger,
            SensoryGroup::NoseTouch => &self.nose_touch,
            SensoryGroup::FoodSense => &self.food_sense,
        }
    }
}

/// Initial random excitation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of source neurons stimulated, drawn with replacement.
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            count: 40,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub execution: ExecutionMode,
    /// Wall-clock period of one sensory update in the driver.
    pub brain_update_interval_ms: u64,
    /// Ticks between periodic metric log lines.
    pub log_interval: u64,
    /// Divisor turning accumulator totals into a steering command.
    pub steering_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::Sequential,
            brain_update_interval_ms: 500,
            log_interval: 1000,
            steering_scale: 20.0,
        }
    }
}

/// Root configuration, one field per `config.toml` section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub adex: AdExParams,
    pub muscles: MuscleConfig,
    pub sensory: SensoryConfig,
    pub bootstrap: BootstrapConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.adex.validate()?;
        self.muscles.validate()?;

        for group in SensoryGroup::ALL {
            anyhow::ensure!(
                !self.sensory.neurons(group).iter().any(String::is_empty),
                "Sensory group {group:?} contains an empty identity"
            );
        }

        anyhow::ensure!(
            self.simulation.brain_update_interval_ms > 0,
            "Brain update interval must be positive"
        );
        anyhow::ensure!(self.simulation.log_interval > 0, "Log interval must be positive");
        anyhow::ensure!(
            self.simulation.steering_scale > 0.0,
            "Steering scale must be positive"
        );

        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    ///
    /// # Errors
    /// - [`EngineError::Toml`] if the document does not parse
    /// - [`EngineError::Validation`] if a parameter is out of range
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config
            .validate()
            .map_err(|e| EngineError::validation(format!("{e:#}")))?;
        Ok(config)
    }

    /// Hash of the settings that change simulated dynamics.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.adex).as_bytes());
        hasher.update(format!("{:?}", self.muscles).as_bytes());
        hasher.update(format!("{:?}", self.sensory).as_bytes());
        hasher.update(format!("{:?}", self.bootstrap).as_bytes());
        hex::encode(hasher.finalize())
    }
}
