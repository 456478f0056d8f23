//! Source verification against an Etherscan-compatible explorer API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::error::VerifyError;

/// Something that can verify the source of a deployed contract.
#[async_trait]
pub trait SourceVerifier: Send + Sync {
    async fn verify_source(&self, address: &str, constructor_args: &[String]) -> Result<(), VerifyError>;
}

/// Submit `address` for verification, logging the outcome.
///
/// Best-effort: an "already verified" answer counts as success and every other
/// failure is logged and dropped. Nothing is returned to the caller.
pub async fn verify<V>(verifier: &V, address: &str, constructor_args: &[String])
where
    V: SourceVerifier + ?Sized,
{
    info!("Verifying contract...");
    match verifier.verify_source(address, constructor_args).await {
        Ok(()) => info!(address, "Contract verified"),
        Err(err) if err.is_already_verified() => info!("Already verified!"),
        Err(err) => error!(address, error = %err, "Contract verification failed"),
    }
}

// ============================================================================
// EXPLORER API
// ============================================================================

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    module: &'static str,
    action: &'static str,
    #[serde(rename = "contractaddress")]
    contract_address: &'a str,
    #[serde(rename = "constructorArguments")]
    constructor_arguments: &'a [String],
    #[serde(rename = "apikey")]
    api_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

impl VerifyResponse {
    /// Explorers put the useful text in `result` and a generic one in `message`.
    fn reason(&self) -> String {
        match &self.result {
            serde_json::Value::String(text) if !text.is_empty() => text.clone(),
            serde_json::Value::String(_) | serde_json::Value::Null => self.message.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP client for an Etherscan-style `verifysourcecode` endpoint.
pub struct ExplorerClient {
    client: Client,
    api_url: Url,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(api_url: &str, api_key: impl Into<String>) -> Result<Self, VerifyError> {
        let api_url = Url::parse(api_url)
            .map_err(|err| VerifyError::Config(format!("bad API URL {api_url}: {err}")))?;
        Ok(Self {
            client: Client::new(),
            api_url,
            api_key: api_key.into(),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[async_trait]
impl SourceVerifier for ExplorerClient {
    async fn verify_source(&self, address: &str, constructor_args: &[String]) -> Result<(), VerifyError> {
        let request = VerifyRequest {
            module: "contract",
            action: "verifysourcecode",
            contract_address: address,
            constructor_arguments: constructor_args,
            api_key: &self.api_key,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VerifyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: VerifyResponse = response.json().await?;
        if body.status != "1" {
            return Err(VerifyError::Rejected(body.reason()));
        }
        Ok(())
    }
}
