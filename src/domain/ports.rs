use super::card::{CardInput, CardToken};
use super::payment::{PayRequest, PayResponse, RefreshResponse, TransactionId};
use crate::error::Result;
use async_trait::async_trait;

/// Turns raw card fields into a one-time token.
#[async_trait]
pub trait CardTokenizer: Send + Sync {
    /// Fails fast with a configuration error when the tokenizer cannot be used.
    fn ensure_ready(&self) -> Result<()>;

    async fn tokenize(&self, card: &CardInput) -> Result<CardToken>;
}

/// The payment backend that charges tokens and reports settlement.
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    async fn submit_payment(&self, request: &PayRequest) -> Result<PayResponse>;
    async fn refresh_status(&self, transaction_id: &TransactionId) -> Result<RefreshResponse>;
}

pub type CardTokenizerBox = Box<dyn CardTokenizer>;
pub type PaymentBackendBox = Box<dyn PaymentBackend>;
