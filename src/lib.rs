//! randorg - random.org JSON-RPC client
//!
//! This is the convenience crate that re-exports the randorg sub-crates.
//! Use this crate if you want a single dependency that provides the wire
//! types and the client in one place.
//!
//! # Architecture
//!
//! randorg is organized into modular crates:
//!
//! - **randorg-core**: JSON-RPC 2.0 envelope types, codec, error taxonomy
//! - **randorg-client**: parameter validation, request building, HTTPS
//!   transport, signature verification and the `RandomClient` orchestration
//! - **randorg-cli**: the `randorg` command-line binary (not re-exported)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use randorg::{ClientConfig, RandomClient};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         api_key: "00000000-0000-0000-0000-000000000000".into(),
//!         ..ClientConfig::default()
//!     };
//!     let client = RandomClient::new(config);
//!
//!     let result = client.integers(5, json!({"min": 1, "max": 6}))?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

// Re-export all public APIs from sub-crates
// This allows users to access everything through the `randorg::` prefix
pub use randorg_client as client;
pub use randorg_core as core;

// Convenience re-exports of the most commonly used types
pub use randorg_client::{ClientConfig, HttpTransport, Method, RandomClient, Transport};
pub use randorg_core::{Error, Id, JsonRpcErrorData, JsonRpcRequest, JsonRpcResponse, Result};
