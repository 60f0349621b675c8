//! Request builder: from logical parameters to a wire request
//!
//! The builder turns a logical (method, params) pair into a JSON-RPC
//! envelope ready for transmission:
//!
//! 1. Draw a fresh correlation id, uniform over 0..=999_999. The same id is
//!    embedded in the envelope and returned to the caller for matching the
//!    response later. The id space is small and collisions between
//!    concurrent callers are possible; the client is single-exchange
//!    synchronous, so this is accepted rather than handled.
//! 2. Inject the API key (every method except `verifySignature`) and the
//!    count `n` (generation methods only).
//! 3. For `strings`, expand `characters` tags through the alphabet table.
//! 4. Coerce each parameter declared by the method's spec to its target
//!    JSON type, in declaration order.
//!
//! The builder performs **no** domain validation; that is owned by the
//! transport call boundary so a request constructed by other means is
//! checked all the same. Missing or uncoercible values fail here with
//! [`Error::InvalidParams`] since no sensible envelope can be produced.

use crate::alphabet::AlphabetTable;
use crate::method::{Method, ParamKind};
use rand::Rng;
use randorg_core::{Error, Id, JsonRpcRequest, Result};
use serde_json::{Map, Value};

/// Builds wire requests for one API key and signed/unsigned mode
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api_key: String,
    signed: bool,
    alphabets: AlphabetTable,
}

impl RequestBuilder {
    /// Create a builder for the given API key
    ///
    /// `signed` selects the signed wire variant of every generation method
    /// built by this builder; it is carried by the caller's configuration,
    /// not toggled per request.
    pub fn new(api_key: impl Into<String>, signed: bool) -> Self {
        Self {
            api_key: api_key.into(),
            signed,
            alphabets: AlphabetTable::builtin(),
        }
    }

    /// Whether this builder produces signed wire variants
    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Build a wire request from logical parameters
    ///
    /// Returns the correlation id alongside the envelope; the caller holds
    /// on to it and compares it against the response id.
    pub fn build(
        &self,
        method: Method,
        params: &Map<String, Value>,
    ) -> Result<(i64, JsonRpcRequest)> {
        let rid: i64 = rand::thread_rng().gen_range(0..=999_999);

        let mut wire = Map::new();
        if method.takes_api_key() {
            wire.insert("apiKey".to_string(), Value::String(self.api_key.clone()));
        }
        if method.takes_count() {
            let n = params
                .get("n")
                .ok_or_else(|| missing("n", method))?;
            wire.insert("n".to_string(), coerce("n", n, ParamKind::Int)?);
        }

        for (name, kind) in method.param_spec() {
            let value = params.get(*name).ok_or_else(|| missing(name, method))?;
            let coerced = if method == Method::Strings && *name == "characters" {
                Value::String(self.alphabets.expand(value)?)
            } else {
                coerce(name, value, *kind)?
            };
            wire.insert((*name).to_string(), coerced);
        }

        let request = JsonRpcRequest::new(method.wire_name(self.signed), wire, Id::Number(rid));
        Ok((rid, request))
    }
}

fn missing(name: &str, method: Method) -> Error {
    Error::InvalidParams(format!("missing parameter `{}` for method {}", name, method))
}

/// Coerce a value to its declared target type
fn coerce(name: &str, value: &Value, kind: ParamKind) -> Result<Value> {
    let coerced = match kind {
        ParamKind::Int => value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
            .map(|i| Value::from(i)),
        ParamKind::Float => value.as_f64().map(Value::from),
        ParamKind::Bool => value.as_bool().map(Value::from),
        ParamKind::Text => value.as_str().map(|s| Value::String(s.to_string())),
        ParamKind::Raw => Some(value.clone()),
    };
    coerced.ok_or_else(|| {
        Error::InvalidParams(format!(
            "parameter `{}` cannot be coerced to {:?}: {}",
            name, kind, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_correlation_id_in_range_and_embedded() {
        let builder = RequestBuilder::new("key", false);
        for _ in 0..50 {
            let (rid, req) = builder
                .build(Method::Uuids, &obj(json!({"n": 1})))
                .unwrap();
            assert!((0..=999_999).contains(&rid));
            assert_eq!(req.id, Id::Number(rid));
        }
    }

    #[test]
    fn test_integers_request_shape() {
        let builder = RequestBuilder::new("key", false);
        let (_, req) = builder
            .build(
                Method::Integers,
                &obj(json!({"n": 1, "min": 3, "max": 6, "replacement": true, "base": 2})),
            )
            .unwrap();

        assert_eq!(req.method, "generateIntegers");
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.params["apiKey"], json!("key"));
        assert_eq!(req.params["n"], json!(1));
        assert_eq!(req.params["min"], json!(3));
        assert_eq!(req.params["max"], json!(6));
        assert_eq!(req.params["base"], json!(2));
    }

    #[test]
    fn test_coercion_round_trip_types() {
        // Building then re-decoding the serialized params must reproduce
        // correctly typed fields: replacement boolean, base integer.
        let builder = RequestBuilder::new("key", false);
        let (_, req) = builder
            .build(
                Method::Integers,
                &obj(json!({"n": 2, "min": 0, "max": 10, "replacement": false, "base": 10.0})),
            )
            .unwrap();

        let encoded = serde_json::to_string(&req).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert!(decoded["params"]["replacement"].is_boolean());
        assert_eq!(decoded["params"]["replacement"], json!(false));
        assert!(decoded["params"]["base"].is_i64());
        assert_eq!(decoded["params"]["base"], json!(10));
    }

    #[test]
    fn test_signed_strings_with_alphabet_tag() {
        let builder = RequestBuilder::new("key", true);
        let (_, req) = builder
            .build(
                Method::Strings,
                &obj(json!({"n": 1, "length": 5, "characters": "lower", "replacement": true})),
            )
            .unwrap();

        assert_eq!(req.method, "generateSignedStrings");
        assert_eq!(req.params["characters"], json!("abcdefghijklmnopqrstuvwxyz"));
    }

    #[test]
    fn test_gaussian_floats() {
        let builder = RequestBuilder::new("key", false);
        let (_, req) = builder
            .build(
                Method::Gaussians,
                &obj(json!({
                    "n": 4,
                    "mean": 0,
                    "standardDeviation": 1,
                    "significantDigits": 6
                })),
            )
            .unwrap();

        // integer inputs for float params come out as JSON numbers
        assert_eq!(req.params["mean"].as_f64(), Some(0.0));
        assert_eq!(req.params["standardDeviation"].as_f64(), Some(1.0));
        assert_eq!(req.params["significantDigits"], json!(6));
    }

    #[test]
    fn test_verify_request_has_no_api_key_or_count() {
        let builder = RequestBuilder::new("key", true);
        let (_, req) = builder
            .build(
                Method::Verify,
                &obj(json!({"random": {"data": [1, 2]}, "signature": "c2ln"})),
            )
            .unwrap();

        assert_eq!(req.method, "verifySignature");
        assert!(!req.params.contains_key("apiKey"));
        assert!(!req.params.contains_key("n"));
        assert_eq!(req.params["random"], json!({"data": [1, 2]}));
        assert_eq!(req.params["signature"], json!("c2ln"));
    }

    #[test]
    fn test_usage_request_carries_only_api_key() {
        let builder = RequestBuilder::new("key", false);
        let (_, req) = builder.build(Method::Usage, &Map::new()).unwrap();
        assert_eq!(req.method, "getUsage");
        assert_eq!(req.params.len(), 1);
        assert_eq!(req.params["apiKey"], json!("key"));
    }

    #[test]
    fn test_missing_parameter() {
        let builder = RequestBuilder::new("key", false);
        let result = builder.build(Method::Blobs, &obj(json!({"n": 1, "size": 256})));
        match result {
            Err(Error::InvalidParams(msg)) => assert!(msg.contains("format")),
            other => panic!("expected InvalidParams, got {:?}", other),
        }
    }

    #[test]
    fn test_uncoercible_parameter() {
        let builder = RequestBuilder::new("key", false);
        let result = builder.build(
            Method::Integers,
            &obj(json!({"n": 1, "min": "three", "max": 6, "replacement": true, "base": 10})),
        );
        match result {
            Err(Error::InvalidParams(msg)) => assert!(msg.contains("min")),
            other => panic!("expected InvalidParams, got {:?}", other),
        }
    }
}
