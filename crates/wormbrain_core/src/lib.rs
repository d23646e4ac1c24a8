//! # Wormbrain Core
//!
//! Tick-based spiking simulation of the C. elegans connectome.
//!
//! This crate contains the deterministic engine, including:
//! - An immutable connectome store with dense integer ids
//! - A double-buffered signal buffer with atomic fan-in accumulation
//! - Adaptive Exponential Integrate-and-Fire (AdEx) integration
//! - Firing, propagation and the left/right muscle aggregator
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wormbrain_core::{Connectome, Engine};
//! use wormbrain_data::WeightTable;
//!
//! let mut table = WeightTable::new();
//! table.insert("A", "B", 5.0).insert("B", "C", 3.0);
//! let connectome = Connectome::builder()
//!     .neurons(["A", "B", "C"])
//!     .build(&table)
//!     .unwrap();
//!
//! let mut engine = Engine::new(Arc::new(connectome));
//! engine.stimulate("A", 1.0);
//! engine.run_tick();
//! assert_eq!(engine.read_voltage("B"), Some(5.0));
//! assert_eq!(engine.read_accumulators(), (0.0, 0.0));
//! ```

/// Per-neuron adaptation current storage
pub mod adaptation;
/// AdEx parameters and the two integration phases
pub mod adex;
/// Double-buffered working potential and incoming signal
pub mod buffer;
/// Configuration management for engine and driver parameters
pub mod config;
/// Immutable identity table and synapse adjacency
pub mod connectome;
/// Tick driver, stimulation and read-back
pub mod engine;
/// Load-time error taxonomy
pub mod error;
/// Spike detection, reset and propagation
pub mod firing;
/// Weight table and config file loading
pub mod loader;
/// Performance metrics collection and logging
pub mod metrics;
/// Muscle classification and steering aggregation
pub mod muscle;

pub use adex::AdExParams;
pub use config::{AppConfig, ExecutionMode};
pub use connectome::{Connectome, ConnectomeBuilder};
pub use engine::{Engine, TickReport};
pub use error::{EngineError, Result};
pub use metrics::{init_logging, Metrics};
pub use muscle::{MuscleConfig, MuscleOutput};
