//! Core data structures for the wormbrain simulation.

pub mod catalogue;
pub mod neuron;
pub mod sensory;
pub mod weights;
