use super::{TokenizeCallback, WompiConstructor};
use crate::domain::card::{CardInput, CardToken};
use crate::domain::ports::CardTokenizer;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Adapts the vendor's callback-based tokenizer into a [`CardTokenizer`].
///
/// A fresh vendor instance is constructed for every call. The first callback
/// invocation settles the future; a callback that never fires leaves it
/// pending, as there is no internal timeout.
pub struct WompiTokenizer {
    vendor: Option<Arc<dyn WompiConstructor>>,
    public_key: Option<String>,
}

impl WompiTokenizer {
    /// Creates an adapter.
    ///
    /// # Arguments
    ///
    /// * `vendor` - The vendor constructor, or `None` when it is not available.
    /// * `public_key` - The merchant public key used to construct instances.
    pub fn new(vendor: Option<Arc<dyn WompiConstructor>>, public_key: Option<String>) -> Self {
        Self { vendor, public_key }
    }

    /// Whether tokenization can be attempted at all.
    pub fn is_available(&self) -> bool {
        self.ready().is_ok()
    }

    fn ready(&self) -> Result<(&Arc<dyn WompiConstructor>, &str)> {
        let vendor = self.vendor.as_ref().ok_or_else(|| {
            CheckoutError::Configuration("Wompi tokenizer unavailable".to_string())
        })?;
        let public_key = self
            .public_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CheckoutError::Configuration("Missing Wompi public key".to_string()))?;
        Ok((vendor, public_key))
    }
}

#[async_trait]
impl CardTokenizer for WompiTokenizer {
    fn ensure_ready(&self) -> Result<()> {
        self.ready().map(|_| ())
    }

    async fn tokenize(&self, card: &CardInput) -> Result<CardToken> {
        let (vendor, public_key) = self.ready()?;
        let instance = vendor.construct(public_key);

        let (tx, rx) = oneshot::channel();
        let callback: TokenizeCallback = Box::new(move |outcome| {
            // The receiver may be gone if the caller stopped waiting.
            let _ = tx.send(outcome);
        });

        debug!("Tokenizing card");
        instance.tokenize_card(card.clone(), callback);

        match rx.await {
            Ok(Ok(response)) => {
                debug!("Card tokenized");
                Ok(CardToken::new(response.id))
            }
            Ok(Err(payload)) => {
                warn!(%payload, "Tokenizer rejected card");
                Err(CheckoutError::Tokenization(payload))
            }
            Err(_) => {
                warn!("Tokenizer dropped its callback without settling");
                Err(CheckoutError::Tokenization(json!(
                    "Tokenizer finished without returning a result"
                )))
            }
        }
    }
}
