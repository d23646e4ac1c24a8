use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static synapse weight table keyed by source identity, then target identity.
///
/// Serialized as the nested object `{"SRC": {"DST": weight}}`. Keys are kept
/// sorted so iteration order (and anything derived from it) is reproducible.
/// A source key with no targets is still a connectome member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    pub sources: BTreeMap<String, BTreeMap<String, f64>>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of `source -> target`, replacing an earlier entry.
    pub fn insert(&mut self, source: &str, target: &str, weight: f64) -> &mut Self {
        self.sources
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string(), weight);
        self
    }

    /// Registers `source` as a member without outgoing edges.
    pub fn add_source(&mut self, source: &str) -> &mut Self {
        self.sources.entry(source.to_string()).or_default();
        self
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.sources.contains_key(source)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn synapse_count(&self) -> usize {
        self.sources.values().map(BTreeMap::len).sum()
    }

    /// All `(source, target, weight)` triples in key order.
    pub fn synapses(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.sources.iter().flat_map(|(src, targets)| {
            targets
                .iter()
                .map(move |(dst, w)| (src.as_str(), dst.as_str(), *w))
        })
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<'a> FromIterator<(&'a str, &'a str, f64)> for WeightTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str, f64)>>(iter: T) -> Self {
        let mut table = WeightTable::new();
        for (src, dst, w) in iter {
            table.insert(src, dst, w);
        }
        table
    }
}
