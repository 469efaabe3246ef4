//! Dataset fingerprints
//!
//! SHA-256 over a canonical JSON rendering (object keys sorted). Two builds
//! from the same configuration must produce the same ledger fingerprint; this
//! is the cheapest end-to-end check of generator determinism.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::config::{EngineConfig, EngineError};
use crate::ledger::CostLedger;

/// Fingerprint of every store, vendor and entry in `ledger`.
pub fn ledger_fingerprint(ledger: &CostLedger) -> Result<String, EngineError> {
    canonical_hash(ledger)
}

/// Fingerprint of a configuration.
pub fn config_hash(config: &EngineConfig) -> Result<String, EngineError> {
    canonical_hash(config)
}

fn canonical_hash<T: Serialize>(value: &T) -> Result<String, EngineError> {
    let value = serde_json::to_value(value)?;

    // Recursively sort all object keys for canonical representation
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

    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
