use super::{TokenizeCallback, TokenizeOutcome, TokenizeResponse, WompiConstructor, WompiInstance};
use crate::domain::card::CardInput;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Public sandbox endpoint of the Wompi API.
pub const SANDBOX_API_URL: &str = "https://sandbox.wompi.co/v1";

/// Vendor constructor backed by Wompi's REST tokenization endpoint.
///
/// Instances run the request on a spawned tokio task and report through the
/// callback, so they must be used from within a runtime.
#[derive(Clone)]
pub struct HttpWompi {
    client: Client,
    api_url: String,
}

impl HttpWompi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(api_url, Client::new())
    }

    pub fn with_client(api_url: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }
}

impl WompiConstructor for HttpWompi {
    fn construct(&self, public_key: &str) -> Box<dyn WompiInstance> {
        Box::new(HttpWompiInstance {
            client: self.client.clone(),
            tokens_url: format!("{}/tokens/cards", self.api_url),
            public_key: public_key.to_string(),
        })
    }
}

struct HttpWompiInstance {
    client: Client,
    tokens_url: String,
    public_key: String,
}

impl WompiInstance for HttpWompiInstance {
    fn tokenize_card(&self, card: CardInput, callback: TokenizeCallback) {
        let client = self.client.clone();
        let url = self.tokens_url.clone();
        let public_key = self.public_key.clone();

        tokio::spawn(async move {
            let outcome = request_token(&client, &url, &public_key, &card).await;
            callback(outcome);
        });
    }
}

async fn request_token(
    client: &Client,
    url: &str,
    public_key: &str,
    card: &CardInput,
) -> TokenizeOutcome {
    debug!(url, "Requesting card token");
    let response = client
        .post(url)
        .bearer_auth(public_key)
        .json(card)
        .send()
        .await
        .map_err(|e| Value::String(e.to_string()))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| Value::String(e.to_string()))?;

    if !status.is_success() {
        // Wompi wraps failures as {"error": {...}}; pass anything else through untouched.
        return Err(body.get("error").cloned().unwrap_or(body));
    }

    let data = body.get("data").cloned().unwrap_or(Value::Null);
    serde_json::from_value::<TokenizeResponse>(data)
        .map_err(|e| Value::String(format!("Unexpected tokenizer response: {e}")))
}
