//! Error taxonomy for randorg
//!
//! Four conditions make a call fail locally, and they are raised
//! immediately to the caller - none is retried internally:
//!
//! - [`Error::Validation`]: a parameter violated its documented domain;
//!   the request was **never sent** over the wire
//! - [`Error::Transport`] / [`Error::Serialization`]: the HTTPS exchange
//!   failed, or the reply could not be decoded
//! - [`Error::IdentityMismatch`]: the response id differs from the request's
//!   correlation id (request/response desync, not corruption)
//! - [`Error::Unverified`]: the signature verification round-trip reported
//!   the response as inauthentic
//!
//! Provider-reported errors (`error` objects inside a decoded response) are
//! deliberately **not** part of this taxonomy. They are ordinary data routed
//! through the response dispatcher so callers can render code, message and
//! remaining data themselves.

use crate::types::Id;
use thiserror::Error;

/// Result type for randorg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Client-side error type for randorg operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// One or more parameters violated their documented API constraints.
    ///
    /// Raised by the transport client before any network activity; `failed`
    /// names every parameter whose predicate evaluated false.
    #[error("argument constraints violated: {}", failed.join(", "))]
    Validation {
        /// Names of the parameters that failed validation
        failed: Vec<String>,
    },

    /// HTTPS exchange with the provider failed
    #[error("transport error: {0}")]
    Transport(String),

    /// A payload could not be encoded, or a reply could not be decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Response id did not match the request's correlation id
    ///
    /// Signals that this response belongs to some other exchange. Detected
    /// before verification and dispatch, so no payload from a desynchronized
    /// response is ever released to the caller.
    #[error("response id {got} did not match request id {expected}")]
    IdentityMismatch {
        /// Correlation id the request was sent with
        expected: i64,
        /// Id the response actually carried
        got: Id,
    },

    /// Signature verification reported the response as inauthentic
    #[error("response could not be verified")]
    Unverified,

    /// A parameter was missing or could not be coerced to its declared type
    ///
    /// Raised by the request builder, i.e. before domain validation. This is
    /// a local programming/configuration error, distinct from `Validation`
    /// which covers well-typed values outside their documented domain.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A request named a wire method this client does not know
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_parameters() {
        let error = Error::Validation {
            failed: vec!["base".to_string(), "n".to_string()],
        };
        let display = error.to_string();
        assert!(display.contains("base"));
        assert!(display.contains("n"));
    }

    #[test]
    fn test_identity_mismatch_display() {
        let error = Error::IdentityMismatch {
            expected: 42,
            got: Id::Number(7),
        };
        let display = error.to_string();
        assert!(display.contains("42"));
        assert!(display.contains("7"));
    }

    #[test]
    fn test_unverified_display() {
        assert_eq!(Error::Unverified.to_string(), "response could not be verified");
    }

    #[test]
    fn test_transport_error_display() {
        let error = Error::Transport("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }
}
