pub mod data;

pub use data::catalogue::{NEURON_NAMES, SINK_NAMES};
pub use data::neuron::{ActivityLevel, MuscleSide, NeuronId, NeuronRole};
pub use data::sensory::{SensoryGroup, SensoryRequest};
pub use data::weights::WeightTable;
