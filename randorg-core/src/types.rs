//! JSON-RPC 2.0 envelope types for the random.org API
//!
//! These types model exactly the subset of the JSON-RPC 2.0 specification
//! (https://www.jsonrpc.org/specification) that random.org speaks: single
//! requests with object params, and responses carrying exactly one of
//! `result` or `error`. There are no notifications and no batches.
//!
//! # Correlation IDs
//!
//! Every request carries an `id` that the provider echoes back in the
//! response. The client draws a fresh numeric id per request and compares it
//! against the response before anything else is done with the payload; a
//! mismatch signals request/response desynchronization (not tampering).
//!
//! # Result vs Error
//!
//! A well-formed response contains exactly one of `result` or `error`. The
//! `error` object is *provider data*, not a client failure: quota
//! exhaustion, parameters our validator accepted but random.org rejected,
//! and similar conditions all arrive this way and are surfaced to callers
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request ID
///
/// random.org echoes whatever id the request carried. This client always
/// sends `Id::Number`, but responses are decoded permissively: the spec
/// allows string, number, or null ids, and a null id is what a provider
/// returns when it could not parse the request at all.
///
/// `#[serde(untagged)]` makes the enum serialize directly as the inner
/// value, matching the wire format exactly.
///
/// # Examples
///
/// ```rust
/// use randorg_core::Id;
///
/// let id: Id = 42i64.into();
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier - accepted when decoding, never sent
    String(String),
    /// Numeric identifier - what this client generates
    Number(i64),
    /// Null identifier - returned by providers that could not read the request
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

/// JSON-RPC 2.0 request envelope
///
/// # Spec Compliance
///
/// A request MUST contain:
/// - `jsonrpc`: exactly "2.0"
/// - `method`: the provider method name (e.g. "generateIntegers")
/// - `id`: an identifier to correlate with the response
/// - `params`: random.org methods all take an object of named parameters,
///   so `params` here is a JSON object rather than an optional value
///
/// # Examples
///
/// ```rust
/// use randorg_core::{Id, JsonRpcRequest};
///
/// let request = JsonRpcRequest::new("getUsage", serde_json::Map::new(), Id::Number(1));
/// assert_eq!(request.jsonrpc, "2.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Name of the provider method to invoke
    pub method: String,
    /// Named parameters for the method
    pub params: serde_json::Map<String, serde_json::Value>,
    /// Correlation identifier echoed back in the response
    pub id: Id,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request
    ///
    /// The `jsonrpc` field is automatically set to "2.0" per the
    /// specification.
    pub fn new(
        method: impl Into<String>,
        params: serde_json::Map<String, serde_json::Value>,
        id: Id,
    ) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope
///
/// Contains either a result (success) or an error (failure), never both.
/// For generation methods the result holds a `random` object (the echoed
/// parameters plus a `data` array) and, for signed variants, a `signature`
/// string; for `verifySignature` it holds an `authenticity` boolean.
///
/// # Examples
///
/// ```rust
/// use randorg_core::{Id, JsonRpcResponse};
/// use serde_json::json;
///
/// let ok = JsonRpcResponse::success(json!({"random": {"data": [4]}}), Id::Number(1));
/// assert!(ok.is_success());
///
/// let err = JsonRpcResponse::error(
///     randorg_core::JsonRpcErrorData::new(402, "quota exceeded"),
///     Id::Number(2),
/// );
/// assert!(err.is_error());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// The result of the method invocation (present only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Provider-reported error (present only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorData>,
    /// Correlation id from the original request
    /// Will be `Id::Null` if the provider could not determine it
    pub id: Id,
}

impl JsonRpcResponse {
    /// Create a successful response
    pub fn success(result: serde_json::Value, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: JsonRpcErrorData, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Check whether the response carries a result
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Check whether the response carries a provider error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC 2.0 error object as returned by the provider
///
/// This is the exact wire format of the `error` field in a response.
///
/// random.org uses the standard JSON-RPC codes (-32700 parse error, -32600
/// invalid request, -32601 method not found, -32602 invalid params, -32603
/// internal error) plus its own positive application codes (e.g. 402 "not
/// enough randomness", 420-426 API-key errors). The `data` field, when
/// present, is an array naming the offending parameters.
///
/// # Examples
///
/// ```rust
/// use randorg_core::JsonRpcErrorData;
/// use serde_json::json;
///
/// let error = JsonRpcErrorData::with_data(200, "parameter out of range", json!(["n"]));
/// assert_eq!(error.code, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorData {
    /// Numeric error code indicating the error type
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Optional additional error information; random.org sends an array
    /// of offending parameter values or null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcErrorData {
    /// Create a new error object with code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new error object with additional data
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl fmt::Display for JsonRpcErrorData {
    /// Formats as "[code] message" for easy readability in logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for JsonRpcErrorData {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(Id::String("test".to_string()).to_string(), "\"test\"");
        assert_eq!(Id::Number(42).to_string(), "42");
        assert_eq!(Id::Null.to_string(), "null");
    }

    #[test]
    fn test_id_untagged_serialization() {
        assert_eq!(serde_json::to_string(&Id::Number(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Id::Null).unwrap(), "null");
    }

    #[test]
    fn test_request_serialization() {
        let mut params = serde_json::Map::new();
        params.insert("apiKey".into(), serde_json::json!("key"));
        let req = JsonRpcRequest::new("getUsage", params, Id::Number(1));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"method\":\"getUsage\""));
        assert!(json.contains("\"id\":1"));
    }

    #[test]
    fn test_response_success() {
        let resp = JsonRpcResponse::success(serde_json::json!({"random": {}}), Id::Number(1));
        assert!(resp.is_success());
        assert!(!resp.is_error());
    }

    #[test]
    fn test_response_error() {
        let resp = JsonRpcResponse::error(JsonRpcErrorData::new(402, "quota"), Id::Number(1));
        assert!(!resp.is_success());
        assert!(resp.is_error());
    }

    #[test]
    fn test_response_deserialize_provider_error() {
        let json = r#"{"jsonrpc":"2.0","error":{"code":420,"message":"API key does not exist","data":null},"id":9}"#;
        let resp: JsonRpcResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_error());
        let error = resp.error.unwrap();
        assert_eq!(error.code, 420);
        assert_eq!(error.data, Some(serde_json::Value::Null));
    }

    #[test]
    fn test_error_data_display() {
        let error = JsonRpcErrorData::new(402, "quota exceeded");
        assert_eq!(error.to_string(), "[402] quota exceeded");
    }
}
