mod common;

use common::{Calls, TX_ID, ok_backend, ok_tokenizer};
use wompi_checkout::domain::card::CardInput;
use wompi_checkout::domain::payment::{Installments, PayRequest, TransactionId};
use wompi_checkout::domain::ports::{CardTokenizerBox, PaymentBackendBox};

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let calls = Calls::default();
    let tokenizer: CardTokenizerBox = Box::new(ok_tokenizer(&calls));
    let backend: PaymentBackendBox = Box::new(ok_backend(&calls));

    // Verify Send + Sync by spawning tasks
    let token_handle = tokio::spawn(async move { tokenizer.tokenize(&CardInput::default()).await.unwrap() });
    let token = token_handle.await.unwrap();

    let backend_handle = tokio::spawn(async move {
        let request = PayRequest {
            transaction_id: TransactionId::new(TX_ID),
            card_token: token,
            installments: Installments::default(),
        };
        let paid = backend.submit_payment(&request).await.unwrap();
        let refreshed = backend
            .refresh_status(&TransactionId::new(paid.id.as_str()))
            .await
            .unwrap();
        (paid, refreshed)
    });

    let (paid, refreshed) = backend_handle.await.unwrap();
    assert_eq!(paid.id, refreshed.id);
    assert_eq!(calls.tokenize_count(), 1);
    assert_eq!(calls.pays()[0].card_token.as_str(), "tok_1");
}
