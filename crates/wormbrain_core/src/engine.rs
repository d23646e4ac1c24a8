//! Tick driver and the external stimulation API.
//!
//! One tick runs five phases in a fixed order, each finishing for every neuron
//! before the next starts:
//!
//! 1. membrane integration
//! 2. adaptation integration
//! 3. firing and propagation
//! 4. muscle aggregation
//! 5. buffer swap
//!
//! Stimulation and bootstrap only add to incoming signal and are meant to be
//! called between ticks.

use crate::adaptation::AdaptationState;
use crate::adex::{self, AdExParams};
use crate::buffer::SignalBuffer;
use crate::config::{AppConfig, ExecutionMode, SensoryConfig};
use crate::connectome::Connectome;
use crate::firing;
use crate::metrics::Metrics;
use crate::muscle::{self, MuscleOutput};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use wormbrain_data::{ActivityLevel, NeuronId, SensoryGroup, SensoryRequest};

/// Result of one [`Engine::run_tick`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Ticks completed, including this one.
    pub tick: u64,
    /// Neurons that fired, in id order.
    pub fired: Vec<NeuronId>,
    pub output: MuscleOutput,
}

/// Simulation state over a shared, immutable [`Connectome`].
#[derive(Debug)]
pub struct Engine {
    connectome: Arc<Connectome>,
    params: AdExParams,
    execution: ExecutionMode,
    buffer: SignalBuffer,
    adaptation: AdaptationState,
    sensory: [Vec<NeuronId>; 3],
    output: MuscleOutput,
    tick: u64,
    metrics: Metrics,
}

fn group_slot(group: SensoryGroup) -> usize {
    match group {
        SensoryGroup::Hunger => 0,
        SensoryGroup::NoseTouch => 1,
        SensoryGroup::FoodSense => 2,
    }
}

fn resolve_group(connectome: &Connectome, sensory: &SensoryConfig, group: SensoryGroup) -> Vec<NeuronId> {
    sensory
        .neurons(group)
        .iter()
        .filter_map(|name| {
            let id = connectome.id(name);
            if id.is_none() {
                tracing::warn!(neuron = %name, group = ?group, "Sensory neuron not in connectome");
            }
            id
        })
        .collect()
}

impl Engine {
    /// Creates an engine with default parameters and all state at zero.
    pub fn new(connectome: Arc<Connectome>) -> Self {
        Self::with_config(connectome, &AppConfig::default())
    }

    /// Creates an engine from an already validated configuration.
    pub fn with_config(connectome: Arc<Connectome>, config: &AppConfig) -> Self {
        let n = connectome.len();
        let sensory = SensoryGroup::ALL.map(|g| resolve_group(&connectome, &config.sensory, g));
        Self {
            params: config.adex,
            execution: config.simulation.execution,
            buffer: SignalBuffer::new(n),
            adaptation: AdaptationState::new(n),
            sensory,
            output: MuscleOutput::default(),
            tick: 0,
            metrics: Metrics::new(config.simulation.log_interval),
            connectome,
        }
    }

    pub fn connectome(&self) -> &Arc<Connectome> {
        &self.connectome
    }

    pub fn params(&self) -> &AdExParams {
        &self.params
    }

    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Injects the static fan-out of `name` as if it had just fired.
    ///
    /// The injected signal is the synapse weights alone; `_amount` is accepted
    /// and ignored. The stimulated neuron's own potential is untouched.
    /// Unknown identities, non-sources and sinks are ignored; returns whether
    /// any signal moved.
    pub fn stimulate(&self, name: &str, _amount: f64) -> bool {
        match self.connectome.id(name) {
            Some(id) => self.stimulate_id(id),
            None => {
                tracing::trace!(neuron = name, "Ignoring stimulation of unknown neuron");
                false
            }
        }
    }

    pub fn stimulate_id(&self, id: NeuronId) -> bool {
        let moved = firing::propagate(&self.connectome, &self.buffer, id);
        if moved {
            self.metrics.record_stimulation();
        }
        moved
    }

    /// Stimulates every resolved neuron of `group`; returns how many moved signal.
    pub fn stimulate_group(&self, group: SensoryGroup) -> usize {
        let ids = &self.sensory[group_slot(group)];
        let moved = ids.iter().filter(|&&id| self.stimulate_id(id)).count();
        tracing::debug!(group = ?group, neurons = ids.len(), moved, "Sensory pulse");
        moved
    }

    /// Resolved ids of a sensory group.
    pub fn sensory_neurons(&self, group: SensoryGroup) -> &[NeuronId] {
        &self.sensory[group_slot(group)]
    }

    /// Runs all five phases exactly once.
    pub fn run_tick(&mut self) -> TickReport {
        let start = Instant::now();
        let roles = self.connectome.roles();

        adex::integrate_membrane(
            &self.params,
            roles,
            &mut self.buffer,
            &self.adaptation,
            self.execution,
        );
        adex::integrate_adaptation(
            &self.params,
            roles,
            &self.buffer,
            &mut self.adaptation,
            self.execution,
        );
        let fired = firing::fire(
            &self.params,
            &self.connectome,
            &mut self.buffer,
            &mut self.adaptation,
            self.execution,
        );
        self.output = muscle::aggregate(self.connectome.muscles(), &self.buffer);
        self.buffer.swap();

        self.tick += 1;
        self.metrics
            .record_tick(start.elapsed(), fired.len(), self.output);

        TickReport {
            tick: self.tick,
            fired,
            output: self.output,
        }
    }

    /// Pulses each requested group then ticks once per pulse, in
    /// hunger, nose touch, food order.
    ///
    /// Returns the accumulators of the last tick, or the previous output when
    /// no group is requested.
    pub fn update(&mut self, request: &SensoryRequest) -> MuscleOutput {
        for group in request.enabled() {
            self.stimulate_group(group);
            self.run_tick();
        }
        self.output
    }

    /// Stimulates `count` source neurons drawn uniformly with replacement.
    ///
    /// Returns the picks in draw order. Draws nothing when the connectome has
    /// no sources.
    pub fn bootstrap<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<NeuronId> {
        let sources = self.connectome.sources();
        if sources.is_empty() {
            return Vec::new();
        }
        let picks: Vec<NeuronId> = (0..count)
            .map(|_| sources[rng.gen_range(0..sources.len())])
            .collect();
        for &id in &picks {
            self.stimulate_id(id);
        }
        tracing::debug!(count, sources = sources.len(), "Bootstrap stimulation");
        picks
    }

    /// Working potential of `name`, or `None` for an unknown identity.
    pub fn read_voltage(&self, name: &str) -> Option<f64> {
        self.connectome.id(name).map(|id| self.voltage(id))
    }

    /// Working potential of `id`; zero for an id outside the connectome.
    pub fn voltage(&self, id: NeuronId) -> f64 {
        self.buffer.working().get(id.index()).copied().unwrap_or(0.0)
    }

    pub fn voltages(&self) -> &[f64] {
        self.buffer.working()
    }

    pub fn incoming_signal(&self, id: NeuronId) -> f64 {
        if id.index() < self.buffer.len() {
            self.buffer.read_incoming(id)
        } else {
            0.0
        }
    }

    pub fn adaptation_current(&self, id: NeuronId) -> f64 {
        self.adaptation.values().get(id.index()).copied().unwrap_or(0.0)
    }

    /// `(left, right)` of the most recent tick.
    pub fn read_accumulators(&self) -> (f64, f64) {
        self.output.as_tuple()
    }

    pub fn output(&self) -> MuscleOutput {
        self.output
    }

    pub fn activity(&self, id: NeuronId) -> ActivityLevel {
        ActivityLevel::classify(self.voltage(id), self.params.fire_threshold)
    }
}
