//! Response dispatcher and default payload accessors
//!
//! Interpretation of a decoded response is decoupled from transport: the
//! dispatcher inspects a response for a provider `error` and routes it to
//! exactly one of two caller-supplied handlers, exactly once. This is how
//! provider-reported failures (quota exhaustion, rejected parameters) reach
//! the caller as ordinary data rather than Rust errors.
//!
//! The [`handlers`] module provides the default accessors: small total
//! functions over the payload shapes random.org returns, usable directly as
//! dispatch handlers or for picking fields out of a result.

use randorg_core::JsonRpcResponse;

/// Route a response to `on_error` or `on_success`, keyed on the presence
/// of a provider `error` object
///
/// Exactly one of the two handlers runs, exactly once, and its value is
/// returned.
pub fn dispatch<R>(
    response: &JsonRpcResponse,
    on_error: impl FnOnce(&JsonRpcResponse) -> R,
    on_success: impl FnOnce(&JsonRpcResponse) -> R,
) -> R {
    if response.error.is_some() {
        on_error(response)
    } else {
        on_success(response)
    }
}

/// Default accessors over response payloads
///
/// All accessors are total: a missing field yields `Value::Null` instead of
/// panicking, so they can run against any decoded response.
pub mod handlers {
    use randorg_core::JsonRpcResponse;
    use serde_json::Value;

    /// The whole `result` object
    pub fn result_all(response: &JsonRpcResponse) -> Value {
        response.result.clone().unwrap_or(Value::Null)
    }

    /// The `random` object: echoed parameters plus the `data` array
    pub fn result_obj(response: &JsonRpcResponse) -> Value {
        field(&response.result, &["random"])
    }

    /// Just the generated `data` array
    pub fn result_data(response: &JsonRpcResponse) -> Value {
        field(&response.result, &["random", "data"])
    }

    /// The signature over the random object (signed methods only)
    pub fn result_signature(response: &JsonRpcResponse) -> Value {
        field(&response.result, &["signature"])
    }

    /// Provider's advisory delay before the next request
    pub fn result_advisory_delay(response: &JsonRpcResponse) -> Value {
        field(&response.result, &["advisoryDelay"])
    }

    /// Requests remaining on the API key
    pub fn result_requests_left(response: &JsonRpcResponse) -> Value {
        field(&response.result, &["requestsLeft"])
    }

    /// The whole provider `error` object as a JSON value
    pub fn error_all(response: &JsonRpcResponse) -> Value {
        match &response.error {
            Some(error) => serde_json::to_value(error).unwrap_or(Value::Null),
            None => Value::Null,
        }
    }

    /// The provider error message
    pub fn error_message(response: &JsonRpcResponse) -> Value {
        match &response.error {
            Some(error) => Value::String(error.message.clone()),
            None => Value::Null,
        }
    }

    /// The provider error code
    pub fn error_code(response: &JsonRpcResponse) -> Value {
        match &response.error {
            Some(error) => Value::from(error.code),
            None => Value::Null,
        }
    }

    /// The provider error data array (or null)
    pub fn error_data(response: &JsonRpcResponse) -> Value {
        match &response.error {
            Some(error) => error.data.clone().unwrap_or(Value::Null),
            None => Value::Null,
        }
    }

    fn field(result: &Option<Value>, path: &[&str]) -> Value {
        let mut current = match result {
            Some(value) => value,
            None => return Value::Null,
        };
        for key in path {
            match current.get(key) {
                Some(next) => current = next,
                None => return Value::Null,
            }
        }
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randorg_core::{Id, JsonRpcErrorData};
    use serde_json::json;

    fn success() -> JsonRpcResponse {
        JsonRpcResponse::success(
            json!({
                "random": {"data": [1, 2, 3], "completionTime": "2024-01-01 00:00:00Z"},
                "signature": "c2ln",
                "requestsLeft": 198,
                "advisoryDelay": 0
            }),
            Id::Number(1),
        )
    }

    fn failure() -> JsonRpcResponse {
        JsonRpcResponse::error(
            JsonRpcErrorData::with_data(402, "quota exceeded", json!([64])),
            Id::Number(1),
        )
    }

    #[test]
    fn test_error_response_runs_only_error_handler() {
        let mut error_calls = 0;
        let mut success_calls = 0;
        dispatch(
            &failure(),
            |_| error_calls += 1,
            |_| success_calls += 1,
        );
        assert_eq!(error_calls, 1);
        assert_eq!(success_calls, 0);
    }

    #[test]
    fn test_success_response_runs_only_success_handler() {
        let mut error_calls = 0;
        let mut success_calls = 0;
        dispatch(
            &success(),
            |_| error_calls += 1,
            |_| success_calls += 1,
        );
        assert_eq!(error_calls, 0);
        assert_eq!(success_calls, 1);
    }

    #[test]
    fn test_dispatch_returns_handler_value() {
        let value = dispatch(&success(), handlers::error_all, handlers::result_data);
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_result_accessors() {
        let resp = success();
        assert_eq!(handlers::result_data(&resp), json!([1, 2, 3]));
        assert_eq!(handlers::result_signature(&resp), json!("c2ln"));
        assert_eq!(handlers::result_requests_left(&resp), json!(198));
        assert_eq!(handlers::result_advisory_delay(&resp), json!(0));
        assert_eq!(
            handlers::result_obj(&resp)["data"],
            json!([1, 2, 3])
        );
    }

    #[test]
    fn test_error_accessors() {
        let resp = failure();
        assert_eq!(handlers::error_code(&resp), json!(402));
        assert_eq!(handlers::error_message(&resp), json!("quota exceeded"));
        assert_eq!(handlers::error_data(&resp), json!([64]));
        assert_eq!(handlers::error_all(&resp)["code"], json!(402));
    }

    #[test]
    fn test_accessors_are_total_on_mismatched_shapes() {
        let resp = success();
        assert_eq!(handlers::error_code(&resp), serde_json::Value::Null);
        let resp = failure();
        assert_eq!(handlers::result_data(&resp), serde_json::Value::Null);
    }
}
