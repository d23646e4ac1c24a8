//! Headless driver standing in for the game loop around the engine.
//!
//! Owns the simulated clock, the sensory latches and the steering read-back.
//! Each [`Simulation::step`] advances the clock by one brain update interval
//! and feeds the resulting request to [`Engine::update`].

pub mod steering;
pub mod stimulus;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use wormbrain_core::loader;
use wormbrain_core::{AppConfig, Connectome, Engine, MuscleOutput};
use wormbrain_data::{NeuronId, SensoryRequest};

pub use steering::Steering;
pub use stimulus::StimulusLatches;

/// One brain update as seen by the outside world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub time_ms: u64,
    pub request: SensoryRequest,
    pub output: MuscleOutput,
    pub steering: Steering,
    /// Voltages of the watched neurons, in watch order.
    pub watched: Vec<(String, f64)>,
}

pub struct Simulation {
    engine: Engine,
    config: AppConfig,
    latches: StimulusLatches,
    watch: Vec<(String, NeuronId)>,
    clock_ms: u64,
}

impl Simulation {
    pub fn new(engine: Engine, config: AppConfig) -> Self {
        Self {
            latches: StimulusLatches::new(config.sensory.reset_after_ms),
            engine,
            config,
            watch: Vec::new(),
            clock_ms: 0,
        }
    }

    /// Builds the catalogue connectome from a JSON weight table on disk.
    pub fn from_weights(path: impl AsRef<Path>, config: AppConfig) -> Result<Self> {
        let table = loader::read_weight_table(path.as_ref())?;
        let connectome = Connectome::from_catalogue(&table, &config.muscles)
            .context("building connectome")?;
        tracing::info!(
            digest = %connectome.digest(),
            config = %config.fingerprint(),
            "Engine ready"
        );
        let engine = Engine::with_config(Arc::new(connectome), &config);
        Ok(Self::new(engine, config))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Adds `name` to the per-frame voltage read-back. Unknown names are
    /// rejected.
    pub fn watch(&mut self, name: &str) -> Result<()> {
        let id = self
            .engine
            .connectome()
            .id(name)
            .with_context(|| format!("cannot watch unknown neuron {name}"))?;
        self.watch.push((name.to_string(), id));
        Ok(())
    }

    /// Initial random excitation using the configured count.
    pub fn bootstrap<R: Rng>(&mut self, rng: &mut R) -> Vec<NeuronId> {
        self.engine.bootstrap(rng, self.config.bootstrap.count)
    }

    /// The worm's nose hit something.
    pub fn touch(&mut self) {
        self.latches.trigger_touch(self.clock_ms);
    }

    /// Food is within sensing range.
    pub fn sense_food(&mut self) {
        self.latches.trigger_food(self.clock_ms);
    }

    /// Runs one brain update and advances the clock.
    pub fn step(&mut self) -> Frame {
        let request = self.latches.request(self.clock_ms);
        let output = self.engine.update(&request);
        let frame = Frame {
            time_ms: self.clock_ms,
            request,
            output,
            steering: Steering::from_output(output, self.config.simulation.steering_scale),
            watched: self
                .watch
                .iter()
                .map(|(name, id)| (name.clone(), self.engine.voltage(*id)))
                .collect(),
        };
        self.clock_ms += self.config.simulation.brain_update_interval_ms;
        frame
    }
}
