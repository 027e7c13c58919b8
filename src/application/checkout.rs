use crate::domain::card::{CardInput, PaymentMethod};
use crate::domain::payment::{Installments, PayRequest, PayResponse, RefreshResponse, TransactionId};
use crate::domain::ports::{CardTokenizerBox, PaymentBackendBox};
use crate::error::{CheckoutError, Result};
use tracing::{info, instrument, warn};

/// Which action, if any, is waiting on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    AwaitingRefresh,
}

/// Everything the user can type or pick on the checkout form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutForm {
    pub transaction_id: TransactionId,
    pub method: PaymentMethod,
    pub installments: Installments,
    pub card: CardInput,
}

/// What the checkout currently displays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub phase: Phase,
    pub pay_result: Option<PayResponse>,
    pub refresh_result: Option<RefreshResponse>,
    pub error: Option<String>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Idle
    }
}

/// Drives the checkout: validates the form, tokenizes the card, submits the
/// payment and polls for settlement.
///
/// Both actions take `&mut self`, so a controller can never run two of them
/// at once. Failures never escape an action; they land in the error slot of
/// [`ViewState`] and the controller returns to [`Phase::Idle`].
pub struct CheckoutController {
    tokenizer: CardTokenizerBox,
    backend: PaymentBackendBox,
    form: CheckoutForm,
    state: ViewState,
}

impl CheckoutController {
    /// Creates a controller with an empty transaction id and the sandbox card.
    ///
    /// # Arguments
    ///
    /// * `tokenizer` - Produces card tokens.
    /// * `backend` - Charges tokens and reports transaction status.
    pub fn new(tokenizer: CardTokenizerBox, backend: PaymentBackendBox) -> Self {
        Self::with_form(tokenizer, backend, CheckoutForm::default())
    }

    pub fn with_form(
        tokenizer: CardTokenizerBox,
        backend: PaymentBackendBox,
        form: CheckoutForm,
    ) -> Self {
        Self {
            tokenizer,
            backend,
            form,
            state: ViewState::default(),
        }
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The persistent warning shown while the tokenizer is not configured.
    pub fn tokenizer_warning(&self) -> Option<String> {
        self.tokenizer.ensure_ready().err().map(|e| e.to_string())
    }

    /// Whether the Continue action is currently enabled.
    pub fn can_continue(&self) -> bool {
        !self.state.is_loading() && self.tokenizer.ensure_ready().is_ok()
    }

    /// Tokenizes the card and submits the payment.
    #[instrument(skip(self), fields(transaction_id = %self.form.transaction_id, method = %self.form.method))]
    pub async fn on_continue(&mut self) {
        self.state.error = None;
        self.state.pay_result = None;
        self.state.refresh_result = None;

        if let Err(e) = self.validate_continue() {
            self.fail(e);
            return;
        }

        self.state.phase = Phase::Submitting;
        let outcome = self.tokenize_and_pay().await;
        self.state.phase = Phase::Idle;

        match outcome {
            Ok(resp) => {
                info!(id = %resp.id, status = %resp.status, "Payment submitted");
                self.state.pay_result = Some(resp);
            }
            Err(e) => self.fail(e),
        }
    }

    /// Polls the backend for the status of the current transaction.
    ///
    /// Prefers the id of the last payment result over the form field.
    #[instrument(skip(self))]
    pub async fn on_refresh(&mut self) {
        self.state.error = None;
        self.state.refresh_result = None;

        let Some(transaction_id) = self.refresh_target() else {
            self.fail(CheckoutError::Validation(
                "No transactionId to refresh.".to_string(),
            ));
            return;
        };

        self.state.phase = Phase::AwaitingRefresh;
        let outcome = self.backend.refresh_status(&transaction_id).await;
        self.state.phase = Phase::Idle;

        match outcome {
            Ok(resp) => {
                info!(id = %resp.id, status = %resp.status, "Transaction refreshed");
                self.state.refresh_result = Some(resp);
            }
            Err(e) => self.fail(e),
        }
    }

    fn validate_continue(&self) -> Result<()> {
        if self.form.transaction_id.is_empty() {
            return Err(CheckoutError::Validation(
                "Paste the transactionId (UUID) created by your backend (POST /transactions)."
                    .to_string(),
            ));
        }

        if !self.form.method.is_supported() {
            return Err(CheckoutError::Validation(format!(
                "Only CARD payments are supported ({} selected).",
                self.form.method
            )));
        }

        Ok(())
    }

    async fn tokenize_and_pay(&self) -> Result<PayResponse> {
        let card_token = self.tokenizer.tokenize(&self.form.card).await?;
        let request = PayRequest {
            transaction_id: self.form.transaction_id.clone(),
            card_token,
            installments: self.form.installments,
        };
        self.backend.submit_payment(&request).await
    }

    fn refresh_target(&self) -> Option<TransactionId> {
        self.state
            .pay_result
            .as_ref()
            .map(|resp| TransactionId::new(resp.id.as_str()))
            .filter(|id| !id.is_empty())
            .or_else(|| Some(self.form.transaction_id.clone()).filter(|id| !id.is_empty()))
    }

    fn fail(&mut self, error: CheckoutError) {
        warn!(%error, "Checkout action failed");
        self.state.error = Some(error.to_string());
    }
}
