//! Muscle classification and the per-tick steering aggregator.
//!
//! Roles and sides are resolved once when the connectome is built. The
//! aggregator then walks the precomputed `(muscle, side)` list and never looks
//! at names.

use crate::buffer::SignalBuffer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wormbrain_data::{MuscleSide, NeuronId, NeuronRole, SINK_NAMES};

/// Name-based classification tables.
///
/// A muscle's side is the first match in this order: explicit `left`,
/// explicit `right`, `left_prefixes`, `right_prefixes`. An identity listed in
/// both explicit tables therefore counts as left only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MuscleConfig {
    /// Name prefixes that mark an identity as a muscle.
    pub muscle_prefixes: Vec<String>,
    /// Identities that integrate but never propagate.
    pub sinks: Vec<String>,
    pub left_prefixes: Vec<String>,
    pub right_prefixes: Vec<String>,
    /// Explicit left-side identities, checked before any prefix rule.
    pub left: Vec<String>,
    /// Explicit right-side identities, checked after `left`.
    pub right: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for MuscleConfig {
    fn default() -> Self {
        Self {
            muscle_prefixes: strings(&["MDL", "MDR", "MVL", "MVR"]),
            sinks: strings(&SINK_NAMES),
            // Left steering is driven by the right dorsal and left ventral rows.
            left_prefixes: strings(&["MDR", "MVL"]),
            right_prefixes: strings(&["MDL", "MVR"]),
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl MuscleConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.muscle_prefixes.iter().any(String::is_empty),
            "Muscle prefixes must be non-empty"
        );
        anyhow::ensure!(
            !self
                .left_prefixes
                .iter()
                .chain(self.right_prefixes.iter())
                .any(String::is_empty),
            "Side prefixes must be non-empty"
        );
        Ok(())
    }

    pub fn role_of(&self, name: &str) -> NeuronRole {
        if self.sinks.iter().any(|s| s == name) {
            NeuronRole::Sink
        } else if self.muscle_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            NeuronRole::Muscle
        } else {
            NeuronRole::Regular
        }
    }

    pub fn side_of(&self, name: &str) -> Option<MuscleSide> {
        if self.left.iter().any(|m| m == name) {
            Some(MuscleSide::Left)
        } else if self.right.iter().any(|m| m == name) {
            Some(MuscleSide::Right)
        } else if self.left_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            Some(MuscleSide::Left)
        } else if self.right_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            Some(MuscleSide::Right)
        } else {
            None
        }
    }

    /// Identities present in both explicit side tables.
    pub fn conflicts(&self) -> Vec<&str> {
        let right: HashSet<&str> = self.right.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        self.left
            .iter()
            .map(String::as_str)
            .filter(|m| right.contains(m) && seen.insert(*m))
            .collect()
    }
}

/// Steering accumulators produced by one aggregation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MuscleOutput {
    pub left: f64,
    pub right: f64,
}

impl MuscleOutput {
    pub fn as_tuple(self) -> (f64, f64) {
        (self.left, self.right)
    }

    pub fn magnitude(self) -> f64 {
        self.left.abs() + self.right.abs()
    }
}

/// Phase 4: drains every muscle's incoming signal into its side accumulator.
///
/// The returned totals replace, never add to, the previous tick's output.
pub fn aggregate(muscles: &[(NeuronId, MuscleSide)], buffer: &SignalBuffer) -> MuscleOutput {
    let mut out = MuscleOutput::default();
    for &(id, side) in muscles {
        let signal = buffer.take_incoming(id);
        match side {
            MuscleSide::Left => out.left += signal,
            MuscleSide::Right => out.right += signal,
        }
    }
    out
}
