//! Codec for JSON-RPC message serialization and deserialization
//!
//! Thin wrappers over serde_json that map failures into the randorg error
//! taxonomy. Encoding failures become [`Error::Serialization`]; decoding
//! failures likewise, since a reply that cannot be decoded is a transport-leg
//! failure as far as the caller is concerned.
//!
//! random.org never sends notifications or batches, so unlike a general
//! JSON-RPC codec there is nothing to discriminate: a reply either decodes
//! as a [`JsonRpcResponse`] or the exchange failed.
//!
//! # Examples
//!
//! ```rust
//! use randorg_core::{codec, Id, JsonRpcRequest};
//!
//! let request = JsonRpcRequest::new("getUsage", serde_json::Map::new(), Id::Number(1));
//! let json = codec::encode(&request).unwrap();
//! assert!(json.contains("\"method\":\"getUsage\""));
//! ```

use crate::error::{Error, Result};
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use serde::Serialize;

/// Encode any serializable message to a JSON string
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a JSON string into a request envelope
///
/// Used by tests and tooling that want to inspect what would go over the
/// wire; the client itself only encodes requests.
pub fn decode_request(data: &str) -> Result<JsonRpcRequest> {
    serde_json::from_str(data).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a JSON string into a response envelope
///
/// This is the decoding half of every exchange. A payload that is not a
/// well-formed response envelope is reported as a serialization failure.
pub fn decode_response(data: &str) -> Result<JsonRpcResponse> {
    serde_json::from_str(data).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode response payload");
        Error::Serialization(e.to_string())
    })
}
