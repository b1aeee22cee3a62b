use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::catalog::RawItem;
use crate::config::EndpointConfig;
use crate::gateway::protocol::{ApiResponse, MutationRequest};
use crate::gateway::GatewayError;

/// Thin wrapper around the HTTP boundary with the sheet script.
///
/// One client, one endpoint. Reads are `GET ?action=get`; every mutation is
/// a `POST` with a JSON body sent as `text/plain` — the plain-text content
/// type is deliberate, it keeps browser-hosted deployments of the same
/// contract free of CORS pre-flights, and the script only ever looks at the
/// body.
pub struct StockClient {
    client: Client,
    base_url: String,
}

impl StockClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                endpoint.connect_timeout_seconds,
            )))
            .build()
            .map_err(|e| GatewayError::Transport { source: e })?;

        Ok(Self {
            client,
            base_url: endpoint.url.clone(),
        })
    }

    /// Fetch the full item collection.
    pub async fn fetch_items(&self) -> Result<Vec<RawItem>, GatewayError> {
        let url = format!("{}?action=get", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport { source: e })?;
        let records: Vec<RawItem> =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode { source: e })?;

        tracing::debug!(count = records.len(), "Fetched catalog snapshot");
        Ok(records)
    }

    /// Send one mutation and interpret the `{status: ...}` reply.
    pub async fn submit(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        let body =
            serde_json::to_string(request).map_err(|e| GatewayError::Decode { source: e })?;

        let response = self
            .client
            .post(&self.base_url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport { source: e })?;
        let reply: ApiResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode { source: e })?;

        match reply {
            ApiResponse::Success => Ok(()),
            ApiResponse::Error { message } => {
                tracing::warn!(%message, "Endpoint rejected mutation");
                Err(GatewayError::Application { message })
            }
        }
    }
}
