use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense index of a registered identity.
///
/// Indices are assigned once, in registration order, when a connectome is
/// built and stay valid for the lifetime of that connectome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NeuronId(pub u32);

impl NeuronId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NeuronId {
    fn from(idx: usize) -> Self {
        Self(idx as u32)
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a registered identity is allowed to do during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NeuronRole {
    /// Integrates, fires and propagates.
    #[default]
    Regular,
    /// Receives signal only. Never integrates or fires; drained by the aggregator.
    Muscle,
    /// Integrates like a regular neuron but is a terminal: never fires,
    /// resets or propagates, whatever its potential.
    Sink,
}

impl NeuronRole {
    pub fn integrates(self) -> bool {
        !matches!(self, NeuronRole::Muscle)
    }

    /// Only regular neurons are reset and adapted on crossing the threshold.
    pub fn fires(self) -> bool {
        matches!(self, NeuronRole::Regular)
    }

    pub fn propagates(self) -> bool {
        matches!(self, NeuronRole::Regular)
    }
}

/// Steering side a muscle contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleSide {
    Left,
    Right,
}

/// Coarse activity bucket used by visual read-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Silent,
    Weak,
    Strong,
    Firing,
}

impl ActivityLevel {
    /// Buckets a membrane potential against the firing threshold.
    pub fn classify(voltage: f64, fire_threshold: f64) -> Self {
        if voltage > fire_threshold {
            ActivityLevel::Firing
        } else if voltage > fire_threshold * 0.5 {
            ActivityLevel::Strong
        } else if voltage > 0.0 {
            ActivityLevel::Weak
        } else {
            ActivityLevel::Silent
        }
    }
}
