use crate::domain::card::CardToken;
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned key correlating a payment attempt across pay and refresh.
///
/// Expected to be a UUID but treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Number of installments for a card charge. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Installments(u32);

impl Installments {
    pub fn new(value: u32) -> Result<Self, CheckoutError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(CheckoutError::Validation(
                "Installments must be a positive integer".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Installments {
    fn default() -> Self {
        Self(1)
    }
}

impl From<Installments> for u32 {
    fn from(installments: Installments) -> Self {
        installments.0
    }
}

impl TryFrom<u32> for Installments {
    type Error = CheckoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub transaction_id: TransactionId,
    pub card_token: CardToken,
    pub installments: Installments,
}

/// Backend response to a charge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    pub id: String,
    pub status: String,
    pub wompi_txn_id: String,
    pub reference: String,
}

/// Backend response to a status poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub id: String,
    pub status: String,
    pub wompi_txn_id: Option<String>,
    pub stock_decremented: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_installments_must_be_positive() {
        assert!(Installments::new(0).is_err());
        assert_eq!(Installments::try_from(3).unwrap().value(), 3);
        assert_eq!(Installments::default().value(), 1);
    }

    #[test]
    fn test_installments_deserialization_rejects_zero() {
        assert!(serde_json::from_value::<Installments>(json!(0)).is_err());
        let three: Installments = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(three.value(), 3);
    }

    #[test]
    fn test_pay_request_uses_camel_case() {
        let request = PayRequest {
            transaction_id: TransactionId::new("e7b28be8-00b0-4951-8309-4f058eab3186"),
            card_token: CardToken::new("tok_1"),
            installments: Installments::default(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "transactionId": "e7b28be8-00b0-4951-8309-4f058eab3186",
                "cardToken": "tok_1",
                "installments": 1
            })
        );
    }

    #[test]
    fn test_refresh_response_accepts_null_vendor_id() {
        let body = json!({
            "id": "t1",
            "status": "PENDING",
            "wompiTxnId": null,
            "stockDecremented": false
        });
        let refresh: RefreshResponse = serde_json::from_value(body).unwrap();
        assert_eq!(refresh.wompi_txn_id, None);
        assert!(!refresh.stock_decremented);
    }
}
