use crate::application::checkout::{CheckoutController, CheckoutForm};
use crate::infrastructure::backend::HttpPaymentBackend;
use crate::infrastructure::wompi::{HttpWompi, SANDBOX_API_URL, WompiConstructor, WompiTokenizer};
use clap::Args;
use std::sync::Arc;

/// Settings the checkout needs before any action can run.
#[derive(Debug, Clone, Args)]
pub struct CheckoutConfig {
    /// Base URL of the checkout backend
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: String,

    /// Wompi merchant public key. Paying is disabled without it.
    #[arg(long, env = "WOMPI_PUBLIC_KEY")]
    pub wompi_public_key: Option<String>,

    /// Wompi API base URL used for card tokenization
    #[arg(long, env = "WOMPI_API_URL", default_value = SANDBOX_API_URL)]
    pub wompi_api_url: String,
}

impl CheckoutConfig {
    pub fn backend(&self) -> HttpPaymentBackend {
        HttpPaymentBackend::new(self.backend_url.as_str())
    }

    pub fn tokenizer(&self) -> WompiTokenizer {
        let vendor: Arc<dyn WompiConstructor> = Arc::new(HttpWompi::new(self.wompi_api_url.as_str()));
        WompiTokenizer::new(Some(vendor), self.wompi_public_key.clone())
    }

    /// Wires the HTTP tokenizer and backend into a controller.
    pub fn controller(&self, form: CheckoutForm) -> CheckoutController {
        CheckoutController::with_form(Box::new(self.tokenizer()), Box::new(self.backend()), form)
    }
}
