//! Weight table and config file loading.

use crate::config::AppConfig;
use crate::error::{EngineError, Result};
use std::path::Path;
use wormbrain_data::WeightTable;

/// Parses a JSON weight table of the form `{"SRC": {"DST": weight}}`.
pub fn parse_weight_table(json: &str) -> Result<WeightTable> {
    Ok(WeightTable::from_json_str(json)?)
}

/// Reads and parses a JSON weight table from disk.
pub fn read_weight_table(path: impl AsRef<Path>) -> Result<WeightTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| EngineError::from(e).with_context(format!("reading {}", path.display())))?;
    let table = parse_weight_table(&content)
        .map_err(|e| e.with_context(format!("parsing {}", path.display())))?;
    tracing::debug!(
        path = %path.display(),
        sources = table.source_count(),
        synapses = table.synapse_count(),
        "Weight table read"
    );
    Ok(table)
}

/// Reads and validates a `config.toml`.
pub fn read_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| EngineError::from(e).with_context(format!("reading {}", path.display())))?;
    AppConfig::from_toml(&content).map_err(|e| e.with_context(format!("loading {}", path.display())))
}
