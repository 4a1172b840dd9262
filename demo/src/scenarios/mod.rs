use serde_json::Value;

pub mod full_demo;
pub mod smoke;
pub mod timestamps;

/// Render a JSON-RPC `error` payload for the console. Bare strings print
/// without quotes; anything structured prints as compact JSON.
pub(crate) fn render_rpc_error(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
