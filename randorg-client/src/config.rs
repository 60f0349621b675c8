//! Client configuration and per-method parameter defaults
//!
//! The library treats configuration as already-resolved input: the CLI (or
//! any other embedder) is responsible for reading files, environment, and
//! flags, and hands the finished [`ClientConfig`] over. Every field has a
//! serde default so a partial TOML file deserializes cleanly.
//!
//! Defaults merge at the individual parameter level: built-in values are
//! overlaid by the configured per-method sections, which in turn are
//! overlaid by whatever the caller supplies explicitly at call time.

use crate::method::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Endpoint for the random.org JSON-RPC API, release 4
pub const DEFAULT_URL: &str = "https://api.random.org/json-rpc/4/invoke";

/// Resolved configuration for a [`crate::RandomClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// random.org API key, injected into every request except verify
    pub api_key: String,
    /// Endpoint URL for the JSON-RPC service
    pub url: String,
    /// Whether to request signed variants and verify their signatures
    pub signed: bool,
    /// Configured per-method parameter defaults, overlaid on the built-ins
    pub defaults: MethodDefaults,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            url: DEFAULT_URL.to_string(),
            signed: false,
            defaults: MethodDefaults::default(),
        }
    }
}

/// Configured default parameter values per generation method
///
/// Each section holds only what the user chose to pin; [`Self::for_method`]
/// overlays it on the built-in defaults key by key, so pinning `max` does
/// not drop the default for `replacement`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDefaults {
    pub integers: Map<String, Value>,
    pub decimals: Map<String, Value>,
    pub gaussians: Map<String, Value>,
    pub strings: Map<String, Value>,
    pub uuids: Map<String, Value>,
    pub blobs: Map<String, Value>,
}

impl MethodDefaults {
    /// Effective defaults for a logical method: built-ins overlaid with the
    /// configured section
    ///
    /// Verify and usage take no defaulted parameters and yield an empty map.
    pub fn for_method(&self, method: Method) -> Map<String, Value> {
        let mut merged = builtin(method);
        let configured = match method {
            Method::Integers => &self.integers,
            Method::Decimals => &self.decimals,
            Method::Gaussians => &self.gaussians,
            Method::Strings => &self.strings,
            Method::Uuids => &self.uuids,
            Method::Blobs => &self.blobs,
            Method::Verify | Method::Usage => return Map::new(),
        };
        merged.extend(configured.clone());
        merged
    }
}

/// Built-in defaults, chosen to pass validation for every method
fn builtin(method: Method) -> Map<String, Value> {
    let value = match method {
        Method::Integers => serde_json::json!({
            "min": 1, "max": 100, "replacement": true, "base": 10
        }),
        Method::Decimals => serde_json::json!({
            "decimalPlaces": 2, "replacement": true
        }),
        Method::Gaussians => serde_json::json!({
            "mean": 0.0, "standardDeviation": 1.0, "significantDigits": 6
        }),
        Method::Strings => serde_json::json!({
            "length": 8, "characters": "lower", "replacement": true
        }),
        Method::Uuids => serde_json::json!({}),
        Method::Blobs => serde_json::json!({
            "size": 128, "format": "base64"
        }),
        Method::Verify | Method::Usage => serde_json::json!({}),
    };
    match value {
        Value::Object(map) => map,
        // json! object literals above are always objects
        _ => unreachable!("built-in defaults are object literals"),
    }
}
