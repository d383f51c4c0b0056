use std::time::Duration;

use crate::bot::{run_pipeline, with_single_retry, BotClients, RunOutcome};
use crate::configuration::Settings;
use crate::errors::BotError;
use crate::mapi::MapiClient;
use crate::mempool_space::MempoolSpaceClient;
use crate::nostr::NostrPoster;
use crate::whatsonchain::WhatsOnChainClient;

const RETRY_DELAY: Duration = Duration::from_secs(2);
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Application {
    settings: Settings,
    clients: BotClients,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let clients = BotClients {
            mempool_space: MempoolSpaceClient::new(
                &configuration.bot.mempool_space_url,
                http_client.clone(),
            ),
            mapi: MapiClient::new(&configuration.bot.mapi_url, http_client.clone()),
            whatsonchain: WhatsOnChainClient::new(&configuration.bot.whatsonchain_url, http_client),
        };
        Ok(Self {
            settings: configuration,
            clients,
        })
    }

    /// Runs the whole sequence once, and once more after a fixed delay if it
    /// fails. The poster is rebuilt on the retry so the auth preflight is
    /// re-run too.
    pub async fn run_until_stopped(self) -> Result<RunOutcome, BotError> {
        let settings = &self.settings;
        let clients = &self.clients;
        with_single_retry(RETRY_DELAY, || async move {
            settings.ensure_credentials()?;
            let poster = NostrPoster::build(&settings.nostr).await?;
            run_pipeline(clients, &poster, &settings.bot).await
        })
        .await
    }
}
