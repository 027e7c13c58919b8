use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("{}", render_payload(.0))]
    Tokenization(Value),
    #[error("{}", render_payload(.body))]
    Backend { status: u16, body: Value },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Renders an opaque vendor or server payload for the error slot.
///
/// Bare strings are shown as-is, anything else as compact JSON.
pub fn render_payload(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
