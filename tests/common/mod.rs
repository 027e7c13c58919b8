#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wompi_checkout::application::checkout::{CheckoutController, CheckoutForm};
use wompi_checkout::domain::card::{CardInput, CardToken};
use wompi_checkout::domain::payment::{PayRequest, PayResponse, RefreshResponse, TransactionId};
use wompi_checkout::domain::ports::{CardTokenizer, PaymentBackend};
use wompi_checkout::error::{CheckoutError, Result};

pub const TX_ID: &str = "e7b28be8-00b0-4951-8309-4f058eab3186";

/// Everything the fakes were asked to do.
#[derive(Clone, Default)]
pub struct Calls {
    tokenize: Arc<AtomicUsize>,
    cards: Arc<Mutex<Vec<CardInput>>>,
    pays: Arc<Mutex<Vec<PayRequest>>>,
    refreshes: Arc<Mutex<Vec<TransactionId>>>,
}

impl Calls {
    pub fn tokenize_count(&self) -> usize {
        self.tokenize.load(Ordering::SeqCst)
    }

    pub fn cards(&self) -> Vec<CardInput> {
        self.cards.lock().unwrap().clone()
    }

    pub fn pays(&self) -> Vec<PayRequest> {
        self.pays.lock().unwrap().clone()
    }

    pub fn refreshes(&self) -> Vec<TransactionId> {
        self.refreshes.lock().unwrap().clone()
    }

    pub fn total(&self) -> usize {
        self.tokenize_count() + self.pays().len() + self.refreshes().len()
    }
}

pub struct FakeTokenizer {
    pub ready: bool,
    pub outcome: std::result::Result<String, Value>,
    pub calls: Calls,
}

#[async_trait]
impl CardTokenizer for FakeTokenizer {
    fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(CheckoutError::Configuration(
                "Wompi tokenizer unavailable".to_string(),
            ))
        }
    }

    async fn tokenize(&self, card: &CardInput) -> Result<CardToken> {
        self.ensure_ready()?;
        self.calls.tokenize.fetch_add(1, Ordering::SeqCst);
        self.calls.cards.lock().unwrap().push(card.clone());
        self.outcome
            .clone()
            .map(CardToken::new)
            .map_err(CheckoutError::Tokenization)
    }
}

pub struct FakeBackend {
    pub pay: std::result::Result<PayResponse, (u16, Value)>,
    pub refresh: std::result::Result<RefreshResponse, (u16, Value)>,
    pub calls: Calls,
}

#[async_trait]
impl PaymentBackend for FakeBackend {
    async fn submit_payment(&self, request: &PayRequest) -> Result<PayResponse> {
        self.calls.pays.lock().unwrap().push(request.clone());
        self.pay
            .clone()
            .map_err(|(status, body)| CheckoutError::Backend { status, body })
    }

    async fn refresh_status(&self, transaction_id: &TransactionId) -> Result<RefreshResponse> {
        self.calls
            .refreshes
            .lock()
            .unwrap()
            .push(transaction_id.clone());
        self.refresh
            .clone()
            .map_err(|(status, body)| CheckoutError::Backend { status, body })
    }
}

pub fn approved() -> PayResponse {
    PayResponse {
        id: "t1".to_string(),
        status: "APPROVED".to_string(),
        wompi_txn_id: "w1".to_string(),
        reference: "r1".to_string(),
    }
}

pub fn settled() -> RefreshResponse {
    RefreshResponse {
        id: "t1".to_string(),
        status: "APPROVED".to_string(),
        wompi_txn_id: Some("w1".to_string()),
        stock_decremented: true,
    }
}

pub fn ok_tokenizer(calls: &Calls) -> FakeTokenizer {
    FakeTokenizer {
        ready: true,
        outcome: Ok("tok_1".to_string()),
        calls: calls.clone(),
    }
}

pub fn ok_backend(calls: &Calls) -> FakeBackend {
    FakeBackend {
        pay: Ok(approved()),
        refresh: Ok(settled()),
        calls: calls.clone(),
    }
}

/// A controller over working fakes with the given transaction id typed in.
pub fn controller(calls: &Calls, transaction_id: &str) -> CheckoutController {
    let form = CheckoutForm {
        transaction_id: TransactionId::new(transaction_id),
        ..Default::default()
    };
    CheckoutController::with_form(
        Box::new(ok_tokenizer(calls)),
        Box::new(ok_backend(calls)),
        form,
    )
}
