use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment methods offered by the checkout.
///
/// Only `Card` is backed by a tokenizer; the rest can be selected but are
/// rejected when the payment is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    pub fn is_supported(self) -> bool {
        self == PaymentMethod::Card
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::ApplePay => "APPLE_PAY",
            PaymentMethod::GooglePay => "GOOGLE_PAY",
        };
        f.write_str(name)
    }
}

pub const SANDBOX_CARD_NUMBER: &str = "4242424242424242";
pub const SANDBOX_EXP_MONTH: &str = "12";
pub const SANDBOX_EXP_YEAR: &str = "29";
pub const SANDBOX_CVC: &str = "123";
pub const SANDBOX_CARD_HOLDER: &str = "TEST USER";

/// Raw card fields as typed by the user.
///
/// Field names match what the vendor tokenizer expects on the wire. Every
/// field defaults to the vendor's sandbox test card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, clap::Args)]
pub struct CardInput {
    #[arg(long = "card-number", default_value = SANDBOX_CARD_NUMBER)]
    pub number: String,
    #[arg(long, default_value = SANDBOX_EXP_MONTH)]
    pub exp_month: String,
    #[arg(long, default_value = SANDBOX_EXP_YEAR)]
    pub exp_year: String,
    #[arg(long, default_value = SANDBOX_CVC)]
    pub cvc: String,
    #[arg(long, default_value = SANDBOX_CARD_HOLDER)]
    pub card_holder: String,
}

impl Default for CardInput {
    fn default() -> Self {
        Self {
            number: SANDBOX_CARD_NUMBER.to_string(),
            exp_month: SANDBOX_EXP_MONTH.to_string(),
            exp_year: SANDBOX_EXP_YEAR.to_string(),
            cvc: SANDBOX_CVC.to_string(),
            card_holder: SANDBOX_CARD_HOLDER.to_string(),
        }
    }
}

/// One-time card reference produced by the vendor tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardToken(String);

impl CardToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
