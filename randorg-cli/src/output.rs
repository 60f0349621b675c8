//! Console rendering for provider responses
//!
//! These are the dispatch handlers the CLI plugs into the client: one for
//! provider error payloads, one for generation data, one for usage
//! statistics. Generated values print one per line with strings unquoted,
//! so output pipes cleanly into other tools.

use randorg_core::JsonRpcResponse;
use serde_json::Value;

/// Render a provider error payload: code, message, remaining data
pub fn error_text(response: &JsonRpcResponse) -> String {
    let Some(error) = &response.error else {
        return String::from("unknown provider error");
    };
    let mut out = String::new();
    out.push_str(&format!("Error code: {}\n", error.code));
    out.push_str(&format!("Message: {}\n", error.message));
    match &error.data {
        None | Some(Value::Null) => out.push_str("No remaining data."),
        Some(Value::Array(items)) => {
            out.push_str("Remaining data:\n");
            let lines: Vec<String> = items.iter().map(render).collect();
            out.push_str(&lines.join("\n"));
        }
        Some(other) => {
            out.push_str("Remaining data:\n");
            out.push_str(&render(other));
        }
    }
    out
}

/// Render generated data, one value per line
pub fn data_lines(response: &JsonRpcResponse) -> String {
    let data = response
        .result
        .as_ref()
        .and_then(|result| result.get("random"))
        .and_then(|random| random.get("data"))
        .and_then(Value::as_array);
    match data {
        Some(items) => {
            let lines: Vec<String> = items.iter().map(render).collect();
            lines.join("\n")
        }
        None => String::new(),
    }
}

/// Render usage statistics: status, requests left, bits left
pub fn usage_text(response: &JsonRpcResponse) -> String {
    let result = response.result.as_ref();
    let get = |key: &str| -> String {
        result
            .and_then(|r| r.get(key))
            .map(render)
            .unwrap_or_else(|| "?".to_string())
    };
    format!(
        "Status: {}\nRequests left: {}\nBits left: {}",
        get("status"),
        get("requestsLeft"),
        get("bitsLeft"),
    )
}

/// Strings print raw, everything else as compact JSON
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
