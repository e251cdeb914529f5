//! Fingerprint - Deterministic Run Hashing
//!
//! SHA-256 digests over canonical JSON, used to compare runs without
//! comparing every field.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + config produces the same trajectory fingerprint
//! - **Key Order Independence**: Object keys are sorted before hashing

use crate::models::snapshot::YearlySnapshot;
use crate::orchestrator::SimulationError;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Compute deterministic SHA256 hash of any serializable value
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on map iteration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Hash of a complete trajectory (every snapshot, events included)
pub fn trajectory_fingerprint(trajectory: &[YearlySnapshot]) -> Result<String, SimulationError> {
    compute_config_hash(&trajectory)
}

/// Recursively sort all object keys
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
