use async_trait::async_trait;
use nostr_sdk::prelude::*;
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::configuration::NostrSettings;
use crate::errors::BotError;

#[derive(Debug, Clone)]
pub struct PosterIdentity {
    pub handle: String,
    pub id: String,
}

/// Seam between the orchestrator and the posting platform. The platform's
/// own semantics stay behind this trait.
#[async_trait]
pub trait Poster: Send + Sync {
    async fn identity(&self) -> Result<PosterIdentity, BotError>;
    async fn post(&self, text: &str) -> Result<String, BotError>;
}

#[derive(Clone)]
pub struct NostrPoster {
    keys: Keys,
    client: Client,
}

impl NostrPoster {
    #[instrument(skip_all)]
    pub async fn build(configuration: &NostrSettings) -> Result<Self, BotError> {
        let private_key = SecretKey::from_bech32(configuration.private_key.expose_secret())
            .map_err(|e| BotError::Auth(format!("invalid nostr private key: {}", e)))?;
        let keys = Keys::new(private_key);
        let opts = Options::new().wait_for_send(false);
        let client = Client::with_opts(&keys, opts);
        for relay in configuration.nostr_relays.iter() {
            client
                .add_relay(relay.as_str(), None)
                .await
                .map_err(|e| BotError::Auth(format!("could not add relay {}: {}", relay, e)))?;
        }
        client.connect().await;
        let metadata = Metadata::new()
            .name("fee_ticker_bot")
            .display_name("fee ticker bot")
            .about("posts a periodic snapshot of BTC and BSV fee levels, confirmation ETAs and mempool backlogs");
        client
            .set_metadata(metadata)
            .await
            .map_err(|e| BotError::Auth(format!("could not publish bot metadata: {}", e)))?;
        Ok(Self { keys, client })
    }
}

#[async_trait]
impl Poster for NostrPoster {
    #[instrument(skip_all)]
    async fn identity(&self) -> Result<PosterIdentity, BotError> {
        let public_key = self.keys.public_key();
        let handle = public_key
            .to_bech32()
            .map_err(|e| BotError::Auth(e.to_string()))?;
        if self.client.relays().await.is_empty() {
            return Err(BotError::Auth("no relays configured".into()));
        }
        Ok(PosterIdentity {
            handle,
            id: public_key.to_string(),
        })
    }

    #[instrument(skip_all)]
    async fn post(&self, text: &str) -> Result<String, BotError> {
        let event_id = self
            .client
            .publish_text_note(text, &[])
            .await
            .map_err(|e| BotError::Post(e.to_string()))?;
        Ok(event_id.to_hex())
    }
}
