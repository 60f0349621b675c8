//! random.org JSON-RPC client
//!
//! This crate implements the request-construction / validation /
//! response-verification pipeline for the random.org true-random API:
//!
//! - **Method catalog**: logical methods, wire names (signed and unsigned),
//!   per-method parameter coercion specs
//! - **Constraint table**: documented parameter domains as data, enforced
//!   before anything is transmitted
//! - **Request builder**: correlation ids, API-key/count injection,
//!   alphabet-tag expansion, type coercion
//! - **Transport**: one blocking HTTPS POST per call behind a trait seam
//! - **Verification**: the optional signature round-trip for signed mode
//! - **Dispatcher**: provider errors routed to handlers as data
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use randorg_client::{ClientConfig, RandomClient};
//! use serde_json::json;
//!
//! # fn main() -> randorg_core::Result<()> {
//! let config = ClientConfig {
//!     api_key: "00000000-0000-0000-0000-000000000000".into(),
//!     signed: true,
//!     ..ClientConfig::default()
//! };
//! let client = RandomClient::new(config);
//!
//! let result = client.strings(2, json!({"length": 10, "characters": ["lower", "digits"]}))?;
//! println!("{}", result["random"]["data"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency model
//!
//! Fully synchronous, single-threaded, blocking I/O. A signed call makes
//! two sequential round-trips (generate, then verify). The client keeps no
//! mutable state across invocations; static configuration (API key, URL,
//! constraint and alphabet tables) is read-only after construction.

pub mod alphabet;
pub mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod constraints;
pub mod dispatch;
pub mod method;
pub mod transport;

// Re-export the most commonly used types for convenience
pub use alphabet::AlphabetTable;
pub use api::RandomApi;
pub use builder::RequestBuilder;
pub use client::RandomClient;
pub use config::{ClientConfig, MethodDefaults, DEFAULT_URL};
pub use constraints::{Check, ConstraintSet};
pub use dispatch::{dispatch, handlers};
pub use method::{Method, ParamKind};
pub use transport::{HttpTransport, Transport};
