use reqwest::Client;
use tracing::instrument;

use super::{decode_payload, FeeQuote, FeeQuoteEnvelope};
use crate::errors::BotError;
use crate::fetch::get_json;

/// Client for a BSV mAPI fee-quote endpoint.
#[derive(Clone, Debug)]
pub struct MapiClient {
    http_client: Client,
    base_url: String,
}

impl MapiClient {
    pub fn new(base_url: &str, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    //https://mapi.gorillapool.io/mapi/feeQuote
    #[instrument(skip(self))]
    pub async fn fee_quote(&self) -> Result<FeeQuote, BotError> {
        let envelope: FeeQuoteEnvelope = get_json(
            &self.http_client,
            &self.base_url,
            "/mapi/feeQuote",
            "mAPI fee quote",
        )
        .await?;
        decode_payload(&envelope.payload)
    }
}
