use reqwest::Client;
use tracing::instrument;

use super::{MempoolSnapshot, RecommendedFees};
use crate::errors::BotError;
use crate::fetch::get_json;

/// Read-only client for the mempool.space REST API.
#[derive(Clone, Debug)]
pub struct MempoolSpaceClient {
    http_client: Client,
    base_url: String,
}

impl MempoolSpaceClient {
    pub fn new(base_url: &str, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    //https://mempool.space/api/v1/fees/recommended
    #[instrument(skip(self))]
    pub async fn recommended_fees(&self) -> Result<RecommendedFees, BotError> {
        get_json(
            &self.http_client,
            &self.base_url,
            "/api/v1/fees/recommended",
            "mempool.space recommended fees",
        )
        .await
    }

    //https://mempool.space/api/mempool
    #[instrument(skip(self))]
    pub async fn mempool(&self) -> Result<MempoolSnapshot, BotError> {
        get_json(
            &self.http_client,
            &self.base_url,
            "/api/mempool",
            "mempool.space mempool summary",
        )
        .await
    }
}
