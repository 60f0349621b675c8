//! Validated call boundary over the transport
//!
//! [`RandomApi`] owns the invariant that matters most in this client: a
//! request whose parameters violate their documented domains is **never**
//! transmitted. Every outgoing envelope is mapped back to its logical
//! method, run through the constraint table, and refused with the names of
//! the failing parameters before any network activity happens.
//!
//! On the way back, a decoded provider `error` payload is a perfectly good
//! return value - quota exhaustion and provider-side rejections are data
//! for the response dispatcher, not Rust errors. Only failures to exchange
//! or decode surface as errors here.

use crate::constraints::ConstraintSet;
use crate::method::Method;
use crate::transport::Transport;
use randorg_core::{codec, Error, JsonRpcRequest, JsonRpcResponse, Result};

/// Transport client: validate, then exchange one request for one response
pub struct RandomApi<T: Transport> {
    transport: T,
    constraints: ConstraintSet,
}

impl<T: Transport> RandomApi<T> {
    /// Wrap a transport with the documented constraint table
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            constraints: ConstraintSet::api_defaults(),
        }
    }

    /// Validate `request`, send it, and decode the reply
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownMethod`] if the wire method name is not in the catalog
    /// - [`Error::Validation`] naming every parameter outside its domain;
    ///   nothing is sent in this case
    /// - [`Error::Transport`] / [`Error::Serialization`] if the exchange or
    ///   the decode fails
    pub fn call(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let method = Method::from_wire_name(&request.method)
            .ok_or_else(|| Error::UnknownMethod(request.method.clone()))?;

        let (results, all_valid) = self.constraints.validate(method, &request.params);
        if !all_valid {
            let failed: Vec<String> = results
                .into_iter()
                .filter(|(_, ok)| !ok)
                .map(|(name, _)| name)
                .collect();
            tracing::warn!(%method, failed = ?failed, "refusing to send request");
            return Err(Error::Validation { failed });
        }

        let body = codec::encode(request)?;
        tracing::debug!(method = %request.method, id = %request.id, "calling provider");
        let reply = self.transport.exchange(&body)?;
        codec::decode_response(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randorg_core::Id;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Records bodies and answers with a canned reply
    struct RecordingTransport {
        bodies: RefCell<Vec<String>>,
        reply: String,
    }

    impl RecordingTransport {
        fn new(reply: &str) -> Self {
            Self {
                bodies: RefCell::new(Vec::new()),
                reply: reply.to_string(),
            }
        }
    }

    impl Transport for RecordingTransport {
        fn exchange(&self, body: &str) -> Result<String> {
            self.bodies.borrow_mut().push(body.to_string());
            Ok(self.reply.clone())
        }
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        let params = match params {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        };
        JsonRpcRequest::new(method, params, Id::Number(7))
    }

    #[test]
    fn test_valid_request_is_sent_and_decoded() {
        let api = RandomApi::new(RecordingTransport::new(
            r#"{"jsonrpc":"2.0","result":{"random":{"data":[5]}},"id":7}"#,
        ));
        let req = request(
            "generateIntegers",
            json!({"apiKey": "k", "n": 1, "min": 1, "max": 6, "replacement": true, "base": 10}),
        );

        let resp = api.call(&req).unwrap();
        assert!(resp.is_success());
        assert_eq!(api.transport.bodies.borrow().len(), 1);
        assert!(api.transport.bodies.borrow()[0].contains("generateIntegers"));
    }

    #[test]
    fn test_invalid_request_never_reaches_the_transport() {
        let api = RandomApi::new(RecordingTransport::new(r#"{"jsonrpc":"2.0","result":{},"id":7}"#));
        let req = request(
            "generateIntegers",
            json!({"apiKey": "k", "n": 1, "min": 1, "max": 6, "base": 7}),
        );

        let result = api.call(&req);
        match result {
            Err(Error::Validation { failed }) => assert_eq!(failed, vec!["base".to_string()]),
            other => panic!("expected Validation, got {:?}", other),
        }
        assert!(api.transport.bodies.borrow().is_empty());
    }

    #[test]
    fn test_multiple_failures_all_named() {
        let api = RandomApi::new(RecordingTransport::new("{}"));
        let req = request(
            "generateBlobs",
            json!({"apiKey": "k", "n": 500, "size": 68, "format": "binary"}),
        );

        match api.call(&req) {
            Err(Error::Validation { mut failed }) => {
                failed.sort();
                assert_eq!(failed, vec!["format", "n", "size"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_signed_wire_name_validates_against_same_domain() {
        let api = RandomApi::new(RecordingTransport::new("{}"));
        let req = request(
            "generateSignedIntegers",
            json!({"apiKey": "k", "n": 20000, "min": 1, "max": 6}),
        );
        assert!(matches!(api.call(&req), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_unknown_method_is_refused() {
        let api = RandomApi::new(RecordingTransport::new("{}"));
        let req = request("generateChaos", json!({}));
        assert!(matches!(api.call(&req), Err(Error::UnknownMethod(_))));
        assert!(api.transport.bodies.borrow().is_empty());
    }

    #[test]
    fn test_provider_error_payload_is_a_value_not_an_error() {
        let api = RandomApi::new(RecordingTransport::new(
            r#"{"jsonrpc":"2.0","error":{"code":402,"message":"quota exceeded","data":null},"id":7}"#,
        ));
        let req = request("getUsage", json!({"apiKey": "k"}));

        let resp = api.call(&req).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error.unwrap().code, 402);
    }

    #[test]
    fn test_undecodable_reply_is_a_serialization_error() {
        let api = RandomApi::new(RecordingTransport::new("<html>gateway timeout</html>"));
        let req = request("getUsage", json!({"apiKey": "k"}));
        assert!(matches!(api.call(&req), Err(Error::Serialization(_))));
    }
}
