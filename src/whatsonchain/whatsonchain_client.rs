use reqwest::Client;
use tracing::instrument;

use super::MempoolInfo;
use crate::errors::BotError;
use crate::fetch::get_json;

/// Client for the WhatsOnChain BSV mempool endpoint.
#[derive(Clone, Debug)]
pub struct WhatsOnChainClient {
    http_client: Client,
    base_url: String,
}

impl WhatsOnChainClient {
    pub fn new(base_url: &str, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    //https://api.whatsonchain.com/v1/bsv/main/mempool/info
    #[instrument(skip(self))]
    pub async fn mempool_info(&self) -> Result<MempoolInfo, BotError> {
        get_json(
            &self.http_client,
            &self.base_url,
            "/v1/bsv/main/mempool/info",
            "WhatsOnChain mempool info",
        )
        .await
    }
}
