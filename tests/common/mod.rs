pub mod macros;

use std::sync::Arc;
use wormbrain_core::{AppConfig, Connectome, Engine};
use wormbrain_data::WeightTable;

/// Builds small hand-wired networks for engine tests.
#[allow(dead_code)]
pub struct NetworkBuilder {
    config: AppConfig,
    names: Vec<String>,
    table: WeightTable,
}

#[allow(dead_code)]
impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            names: Vec::new(),
            table: WeightTable::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn neuron(mut self, name: &str) -> Self {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        self
    }

    /// Registers both endpoints and adds the synapse.
    pub fn synapse(self, pre: &str, post: &str, weight: f64) -> Self {
        let mut this = self.neuron(pre).neuron(post);
        this.table.insert(pre, post, weight);
        this
    }

    pub fn connectome(&self) -> Connectome {
        Connectome::builder()
            .with_muscles(self.config.muscles.clone())
            .neurons(&self.names)
            .build(&self.table)
            .expect("Test network should be valid")
    }

    pub fn build(self) -> Engine {
        let connectome = self.connectome();
        Engine::with_config(Arc::new(connectome), &self.config)
    }
}

/// `A -> B (5.0)`, `B -> C (3.0)`.
#[allow(dead_code)]
pub fn chain() -> Engine {
    NetworkBuilder::new()
        .synapse("A", "B", 5.0)
        .synapse("B", "C", 3.0)
        .build()
}

/// Random table over `size` regular neurons plus four muscles.
#[allow(dead_code)]
pub fn random_network(seed: u64, size: usize, fan_out: usize) -> NetworkBuilder {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let mut names: Vec<String> = (0..size).map(|i| format!("N{i:03}")).collect();
    names.extend(["MDL01", "MDR01", "MVL01", "MVR01"].map(String::from));

    let mut builder = NetworkBuilder::new();
    for name in &names {
        builder = builder.neuron(name);
    }
    for src in names.iter().take(size) {
        for _ in 0..fan_out {
            let dst = &names[rng.gen_range(0..names.len())];
            builder = builder.synapse(src, dst, rng.gen_range(-5.0..25.0));
        }
    }
    builder
}
