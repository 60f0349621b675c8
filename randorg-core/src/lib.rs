//! JSON-RPC 2.0 wire types and error taxonomy for randorg
//!
//! This crate provides the foundational types for talking to the random.org
//! JSON-RPC API:
//!
//! - **Types**: the request/response envelopes and the wire error object
//! - **Codec**: serialization and deserialization helpers
//! - **Error handling**: the client-side error taxonomy
//!
//! # Overview
//!
//! random.org exposes its true-random generators through plain JSON-RPC 2.0
//! over HTTPS POST. This crate only models the protocol envelope; it knows
//! nothing about individual generation methods or their parameters, which
//! live in `randorg-client`.
//!
//! Note the split between the two error representations: [`Error`] is what
//! this client raises locally (validation failures, transport failures,
//! correlation-id mismatches), while [`JsonRpcErrorData`] is the `error`
//! object the provider returns *inside* a decoded response. Provider errors
//! are data, not failures - they flow back to the caller through the
//! response dispatcher.
//!
//! # Example
//!
//! ```rust
//! use randorg_core::{codec, Id, JsonRpcRequest};
//!
//! let mut params = serde_json::Map::new();
//! params.insert("apiKey".into(), serde_json::json!("key"));
//! params.insert("n".into(), serde_json::json!(5));
//!
//! let request = JsonRpcRequest::new("generateIntegers", params, Id::Number(42));
//! let json = codec::encode(&request).unwrap();
//! let decoded = codec::decode_request(&json).unwrap();
//! assert_eq!(decoded.method, "generateIntegers");
//! ```

pub mod codec;
pub mod error;
pub mod types;

// Re-export the most commonly used types for convenience
pub use error::{Error, Result};
pub use types::{Id, JsonRpcErrorData, JsonRpcRequest, JsonRpcResponse};
