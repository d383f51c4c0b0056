use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::BotError;

/// Single GET against an upstream JSON API. A non-success status or an
/// undecodable body fails the whole run, retries belong to the orchestrator.
pub async fn get_json<T: DeserializeOwned>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    endpoint: &str,
) -> Result<T, BotError> {
    let url = format!("{}{}", base_url, path);
    let response = http_client
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| BotError::Transport {
            endpoint: endpoint.to_owned(),
            source: e,
        })?;
    let status = response.status();
    if !status.is_success() {
        tracing::error!("{} returned {}", endpoint, status);
        return Err(BotError::Fetch {
            endpoint: endpoint.to_owned(),
            status,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| BotError::Parse(endpoint.to_owned(), e.to_string()))
}
