//! Error types for wormbrain_core.
//!
//! Every variant is a load-time failure. Once an [`crate::Engine`] exists,
//! ticking, stimulation and bootstrap cannot fail.

use thiserror::Error;

/// Main error type for building and configuring the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The same identity was registered twice
    #[error("Duplicate neuron: {0}")]
    DuplicateNeuron(String),

    /// The weight table names an identity that was never registered
    #[error("Synapse {pre} -> {post} references unregistered neuron {missing}")]
    UnregisteredNeuron {
        pre: String,
        post: String,
        missing: String,
    },

    /// A weight is NaN or infinite
    #[error("Synapse {pre} -> {post} has non-finite weight {weight}")]
    NonFiniteWeight {
        pre: String,
        post: String,
        weight: f64,
    },

    /// A muscle identity matched neither steering side
    #[error("Muscle {0} maps to neither the left nor the right side")]
    UnclassifiedMuscle(String),

    /// No identities were registered
    #[error("Connectome has no neurons")]
    EmptyCatalogue,

    /// Configuration rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<EngineError>,
    },
}

/// Result type alias for wormbrain_core operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a new unregistered-neuron error.
    #[must_use]
    pub fn unregistered(pre: &str, post: &str, missing: &str) -> Self {
        Self::UnregisteredNeuron {
            pre: pre.to_string(),
            post: post.to_string(),
            missing: missing.to_string(),
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
