//! Immutable connectome store.
//!
//! Built once from a registered identity list and a [`WeightTable`], then only
//! read. Identities are mapped to dense [`NeuronId`]s and outgoing synapses are
//! stored as compressed rows: `offsets[i]..offsets[i + 1]` indexes the targets
//! and weights of neuron `i`. Sharing a `Connectome` across threads needs no
//! locking.

use crate::error::{EngineError, Result};
use crate::muscle::MuscleConfig;
use std::collections::HashMap;
use wormbrain_data::{MuscleSide, NeuronId, NeuronRole, WeightTable, NEURON_NAMES};

#[derive(Debug, Clone)]
pub struct Connectome {
    names: Vec<String>,
    index: HashMap<String, NeuronId>,
    roles: Vec<NeuronRole>,
    is_source: Vec<bool>,
    sources: Vec<NeuronId>,
    muscles: Vec<(NeuronId, MuscleSide)>,
    offsets: Vec<usize>,
    targets: Vec<NeuronId>,
    weights: Vec<f64>,
}

/// Collects identities before the weight table is attached.
#[derive(Debug, Clone, Default)]
pub struct ConnectomeBuilder {
    names: Vec<String>,
    muscles: MuscleConfig,
}

impl ConnectomeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_muscles(mut self, muscles: MuscleConfig) -> Self {
        self.muscles = muscles;
        self
    }

    pub fn neuron(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn neurons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Validates the table against the registered identities and freezes the graph.
    ///
    /// # Errors
    /// - [`EngineError::EmptyCatalogue`] if nothing was registered
    /// - [`EngineError::DuplicateNeuron`] for a repeated identity
    /// - [`EngineError::UnclassifiedMuscle`] for a muscle with no side
    /// - [`EngineError::UnregisteredNeuron`] for a synapse endpoint never registered
    /// - [`EngineError::NonFiniteWeight`] for a NaN or infinite weight
    pub fn build(self, table: &WeightTable) -> Result<Connectome> {
        if self.names.is_empty() {
            return Err(EngineError::EmptyCatalogue);
        }

        let mut index = HashMap::with_capacity(self.names.len());
        for (idx, name) in self.names.iter().enumerate() {
            if index.insert(name.clone(), NeuronId::from(idx)).is_some() {
                return Err(EngineError::DuplicateNeuron(name.clone()));
            }
        }

        for conflict in self.muscles.conflicts() {
            tracing::warn!(
                muscle = conflict,
                "Muscle listed on both sides, counting it as left"
            );
        }

        let roles: Vec<NeuronRole> = self.names.iter().map(|n| self.muscles.role_of(n)).collect();
        let mut muscles = Vec::new();
        for (idx, name) in self.names.iter().enumerate() {
            if roles[idx] == NeuronRole::Muscle {
                let side = self
                    .muscles
                    .side_of(name)
                    .ok_or_else(|| EngineError::UnclassifiedMuscle(name.clone()))?;
                muscles.push((NeuronId::from(idx), side));
            }
        }

        let n = self.names.len();
        let mut is_source = vec![false; n];
        let mut sources = Vec::with_capacity(table.source_count());
        let mut rows: Vec<Vec<(NeuronId, f64)>> = vec![Vec::new(); n];

        for (src, targets) in &table.sources {
            let Some(&src_id) = index.get(src) else {
                let first = targets.keys().next().map(String::as_str).unwrap_or("");
                return Err(EngineError::unregistered(src, first, src));
            };
            is_source[src_id.index()] = true;
            sources.push(src_id);

            for (dst, &weight) in targets {
                let Some(&dst_id) = index.get(dst) else {
                    return Err(EngineError::unregistered(src, dst, dst));
                };
                if !weight.is_finite() {
                    return Err(EngineError::NonFiniteWeight {
                        pre: src.clone(),
                        post: dst.clone(),
                        weight,
                    });
                }
                rows[src_id.index()].push((dst_id, weight));
            }
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::with_capacity(table.synapse_count());
        let mut weights = Vec::with_capacity(table.synapse_count());
        offsets.push(0);
        for row in rows {
            for (dst, w) in row {
                targets.push(dst);
                weights.push(w);
            }
            offsets.push(targets.len());
        }

        tracing::info!(
            neurons = n,
            sources = sources.len(),
            synapses = targets.len(),
            muscles = muscles.len(),
            "Connectome loaded"
        );

        Ok(Connectome {
            names: self.names,
            index,
            roles,
            is_source,
            sources,
            muscles,
            offsets,
            targets,
            weights,
        })
    }
}

impl Connectome {
    pub fn builder() -> ConnectomeBuilder {
        ConnectomeBuilder::new()
    }

    /// Registers the built-in catalogue and attaches `table`.
    pub fn from_catalogue(table: &WeightTable, muscles: &MuscleConfig) -> Result<Self> {
        ConnectomeBuilder::new()
            .with_muscles(muscles.clone())
            .neurons(NEURON_NAMES)
            .build(table)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<NeuronId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: NeuronId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn role(&self, id: NeuronId) -> Option<NeuronRole> {
        self.roles.get(id.index()).copied()
    }

    pub fn roles(&self) -> &[NeuronRole] {
        &self.roles
    }

    /// Whether `id` is a source key of the weight table.
    pub fn has_outgoing(&self, id: NeuronId) -> bool {
        self.is_source.get(id.index()).copied().unwrap_or(false)
    }

    /// Outgoing `(target, weight)` pairs of `id`; empty for unknown ids.
    pub fn outgoing_edges(&self, id: NeuronId) -> impl Iterator<Item = (NeuronId, f64)> + '_ {
        let range = match (self.offsets.get(id.index()), self.offsets.get(id.index() + 1)) {
            (Some(&start), Some(&end)) => start..end,
            _ => 0..0,
        };
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    pub fn out_degree(&self, id: NeuronId) -> usize {
        self.outgoing_edges(id).count()
    }

    /// Source keys of the weight table, in table order.
    pub fn sources(&self) -> &[NeuronId] {
        &self.sources
    }

    /// Every muscle with its resolved steering side, in index order.
    pub fn muscles(&self) -> &[(NeuronId, MuscleSide)] {
        &self.muscles
    }

    pub fn synapse_count(&self) -> usize {
        self.targets.len()
    }

    /// SHA-256 over identities, roles and synapses, hex encoded.
    #[must_use]
    pub fn digest(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for (idx, name) in self.names.iter().enumerate() {
            hasher.update(name.as_bytes());
            hasher.update(format!("{:?}", self.roles[idx]).as_bytes());
            hasher.update([u8::from(self.is_source[idx])]);
            for (dst, w) in self.outgoing_edges(NeuronId::from(idx)) {
                hasher.update(dst.0.to_le_bytes());
                hasher.update(w.to_le_bytes());
            }
        }
        hex::encode(hasher.finalize())
    }
}
