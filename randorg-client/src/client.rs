//! Top-level client orchestration
//!
//! [`RandomClient`] ties the pipeline together. One `generate` call is a
//! linear state machine with no retries and no partial states:
//!
//! 1. Merge caller parameters over the configured per-method defaults
//! 2. Build the wire request (fresh correlation id, key/count injection,
//!    alphabet expansion, type coercion)
//! 3. Send it through the validated call boundary (constraints enforced
//!    there; a violation means nothing was transmitted)
//! 4. Compare the response id against the correlation id - a mismatch
//!    aborts before verification and dispatch
//! 5. In signed mode, verify the signature via a second round-trip and
//!    abort if the provider says the payload is not authentic
//! 6. Dispatch to the error/success handler and return its value
//!
//! The whole exchange is synchronous and blocking; a signed call costs two
//! sequential round-trips. The client holds no mutable state across calls -
//! every invocation constructs and discards its own request and response.

use crate::api::RandomApi;
use crate::builder::RequestBuilder;
use crate::config::ClientConfig;
use crate::dispatch::{dispatch, handlers};
use crate::method::Method;
use crate::transport::{HttpTransport, Transport};
use randorg_core::{Error, Id, JsonRpcResponse, Result};
use serde_json::{Map, Value};

/// Synchronous client for the random.org JSON-RPC API
///
/// # Examples
///
/// ```rust,no_run
/// use randorg_client::{ClientConfig, RandomClient};
///
/// # fn main() -> randorg_core::Result<()> {
/// let config = ClientConfig {
///     api_key: "00000000-0000-0000-0000-000000000000".into(),
///     ..ClientConfig::default()
/// };
/// let client = RandomClient::new(config);
///
/// // roll five dice
/// let result = client.integers(5, serde_json::json!({"min": 1, "max": 6}))?;
/// println!("{}", result["random"]["data"]);
/// # Ok(())
/// # }
/// ```
pub struct RandomClient<T: Transport> {
    config: ClientConfig,
    builder: RequestBuilder,
    api: RandomApi<T>,
}

impl RandomClient<HttpTransport> {
    /// Create a client talking HTTPS to the configured endpoint
    pub fn new(config: ClientConfig) -> Self {
        let transport = HttpTransport::new(config.url.clone());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> RandomClient<T> {
    /// Create a client over a custom transport
    ///
    /// This is the seam tests use to substitute stub transports; it is also
    /// the place to wrap the production transport with timeouts or retries
    /// if an embedder wants them.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let builder = RequestBuilder::new(config.api_key.clone(), config.signed);
        Self {
            config,
            builder,
            api: RandomApi::new(transport),
        }
    }

    /// The resolved configuration this client runs with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate `n` random integers
    pub fn integers(&self, n: u32, params: Value) -> Result<Value> {
        self.generate(Method::Integers, n, params)
    }

    /// Generate `n` decimal fractions in [0, 1)
    pub fn decimals(&self, n: u32, params: Value) -> Result<Value> {
        self.generate(Method::Decimals, n, params)
    }

    /// Generate `n` numbers from a gaussian distribution
    pub fn gaussians(&self, n: u32, params: Value) -> Result<Value> {
        self.generate(Method::Gaussians, n, params)
    }

    /// Generate `n` random strings
    pub fn strings(&self, n: u32, params: Value) -> Result<Value> {
        self.generate(Method::Strings, n, params)
    }

    /// Generate `n` version-4 UUIDs
    pub fn uuids(&self, n: u32) -> Result<Value> {
        self.generate(Method::Uuids, n, Value::Null)
    }

    /// Generate `n` binary blobs
    pub fn blobs(&self, n: u32, params: Value) -> Result<Value> {
        self.generate(Method::Blobs, n, params)
    }

    /// Fetch usage statistics for the configured API key
    pub fn usage(&self) -> Result<Value> {
        self.generate(Method::Usage, 0, Value::Null)
    }

    /// Run one generation exchange with the default handlers
    ///
    /// On a provider error the returned value is the raw `error` object; on
    /// success it is the raw `result` object. Use [`Self::generate_with`]
    /// to supply your own handlers.
    pub fn generate(&self, method: Method, n: u32, params: Value) -> Result<Value> {
        self.generate_with(method, n, params, handlers::error_all, handlers::result_all)
    }

    /// Run one generation exchange, dispatching to the supplied handlers
    ///
    /// `params` is a JSON object of method parameters and wins over the
    /// configured defaults key by key; pass `Value::Null` for "defaults
    /// only". Exactly one handler runs, exactly once, and its value is
    /// returned.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`], [`Error::Transport`],
    /// [`Error::Serialization`], [`Error::IdentityMismatch`] or
    /// [`Error::Unverified`], per the pipeline stage that failed. Provider
    /// error payloads are *not* errors; they go to `on_error`.
    pub fn generate_with<R>(
        &self,
        method: Method,
        n: u32,
        params: Value,
        on_error: impl FnOnce(&JsonRpcResponse) -> R,
        on_success: impl FnOnce(&JsonRpcResponse) -> R,
    ) -> Result<R> {
        let overrides = match params {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidParams(format!(
                    "params must be a JSON object or null, got {}",
                    other
                )))
            }
        };

        let mut merged = self.config.defaults.for_method(method);
        merged.extend(overrides);
        if method.takes_count() {
            merged.insert("n".to_string(), Value::from(n));
        }

        let (rid, request) = self.builder.build(method, &merged)?;
        tracing::debug!(%method, id = rid, signed = self.config.signed, "generate");
        let response = self.api.call(&request)?;

        if response.id != Id::Number(rid) {
            return Err(Error::IdentityMismatch {
                expected: rid,
                got: response.id,
            });
        }

        if self.config.signed {
            if let Some((random, signature)) = signed_payload(&response) {
                if !self.verify_signature(&random, &signature)? {
                    return Err(Error::Unverified);
                }
                tracing::debug!(id = rid, "signature verified");
            }
            // Error payloads and unsigned-shaped results carry nothing to
            // verify; they flow to the dispatcher untouched.
        }

        Ok(dispatch(&response, on_error, on_success))
    }

    /// Confirm the authenticity of a signed response payload
    ///
    /// Sends a `verifySignature` request carrying the echoed `random`
    /// object and its signature. Returns the provider's `authenticity`
    /// verdict; a provider error payload during verification also comes
    /// back as `false` rather than an error, matching the long-standing
    /// behavior of this API's clients. Transport failures still propagate.
    pub fn verify_signature(&self, random: &Value, signature: &Value) -> Result<bool> {
        let mut params = Map::new();
        params.insert("random".to_string(), random.clone());
        params.insert("signature".to_string(), signature.clone());

        let (_, request) = self.builder.build(Method::Verify, &params)?;
        let response = self.api.call(&request)?;

        Ok(dispatch(
            &response,
            |_| false,
            |resp| {
                resp.result
                    .as_ref()
                    .and_then(|result| result.get("authenticity"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            },
        ))
    }
}

/// Extract the (random, signature) pair from a signed generation result
fn signed_payload(response: &JsonRpcResponse) -> Option<(Value, Value)> {
    let result = response.result.as_ref()?;
    let random = result.get("random")?.clone();
    let signature = result.get("signature")?.clone();
    Some((random, signature))
}
