//! Wompi card tokenization.
//!
//! The vendor exposes a constructor taking a public key and a callback-based
//! `tokenize_card` call. Both are modelled as traits so the checkout can be
//! handed the real HTTP vendor or a test double. [`WompiTokenizer`] adapts the
//! callback into a single awaitable result.

pub mod http;
pub mod tokenizer;

use crate::domain::card::CardInput;
use serde::Deserialize;
use serde_json::Value;

pub use http::{HttpWompi, SANDBOX_API_URL};
pub use tokenizer::WompiTokenizer;

/// Successful tokenization payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenizeResponse {
    pub id: String,
}

/// Outcome handed to the callback: a token, or the vendor's raw error payload.
pub type TokenizeOutcome = std::result::Result<TokenizeResponse, Value>;

/// Invoked by the vendor at most once per `tokenize_card` call.
pub type TokenizeCallback = Box<dyn FnOnce(TokenizeOutcome) + Send + 'static>;

/// A vendor instance bound to one public key.
pub trait WompiInstance: Send + Sync {
    fn tokenize_card(&self, card: CardInput, callback: TokenizeCallback);
}

/// Builds vendor instances, one per public key.
pub trait WompiConstructor: Send + Sync {
    fn construct(&self, public_key: &str) -> Box<dyn WompiInstance>;
}
