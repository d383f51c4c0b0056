use std::future::Future;
use std::time::Duration;

use futures_util::future::try_join;
use tracing::instrument;

use crate::configuration::BotSettings;
use crate::errors::BotError;
use crate::mapi::{FeeQuote, MapiClient};
use crate::mempool_space::{MempoolSnapshot, MempoolSpaceClient, RecommendedFees};
use crate::message::compose;
use crate::metrics::{derive_bsv, derive_btc, DerivedMetrics};
use crate::nostr::Poster;
use crate::whatsonchain::{MempoolInfo, WhatsOnChainClient};

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Posted { id: String },
    DryRun { text: String },
}

pub struct BotClients {
    pub mempool_space: MempoolSpaceClient,
    pub mapi: MapiClient,
    pub whatsonchain: WhatsOnChainClient,
}

/// One full pass: preflight, the two network reads in parallel, derivation,
/// composition, post. Any error aborts the pass with nothing posted.
#[instrument(skip_all)]
pub async fn run_pipeline(
    clients: &BotClients,
    poster: &dyn Poster,
    settings: &BotSettings,
) -> Result<RunOutcome, BotError> {
    let identity = poster.identity().await?;
    tracing::info!("auth ok as {}", identity.handle);

    let (btc, bsv) = try_join(
        fetch_btc(&clients.mempool_space),
        fetch_bsv(&clients.mapi, &clients.whatsonchain),
    )
    .await?;
    let (btc_fees, btc_mempool) = btc;
    let (bsv_quote, bsv_mempool) = bsv;

    let metrics = DerivedMetrics {
        btc: derive_btc(&btc_fees, &btc_mempool, settings.fee_tier)?,
        bsv: derive_bsv(&bsv_quote, &bsv_mempool)?,
    };
    let text = compose(&metrics, &settings.explainer_url);
    tracing::info!("post text:\n{}", text);

    if settings.dry_run {
        tracing::info!("dry run enabled, not posting");
        return Ok(RunOutcome::DryRun { text });
    }

    let id = poster.post(&text).await?;
    if id.is_empty() {
        return Err(BotError::Post(
            "platform confirmed the post without an identifier".into(),
        ));
    }
    tracing::info!("posted note {} as {}", id, identity.handle);
    Ok(RunOutcome::Posted { id })
}

#[instrument(skip_all)]
async fn fetch_btc(
    client: &MempoolSpaceClient,
) -> Result<(RecommendedFees, MempoolSnapshot), BotError> {
    tracing::info!("fetching BTC fees and mempool");
    let fees = client.recommended_fees().await?;
    let mempool = client.mempool().await?;
    Ok((fees, mempool))
}

#[instrument(skip_all)]
async fn fetch_bsv(
    mapi: &MapiClient,
    whatsonchain: &WhatsOnChainClient,
) -> Result<(FeeQuote, MempoolInfo), BotError> {
    tracing::info!("fetching BSV fee quote and mempool");
    let quote = mapi.fee_quote().await?;
    let mempool = whatsonchain.mempool_info().await?;
    Ok((quote, mempool))
}

/// One attempt, then on failure exactly one more after a fixed delay. The
/// retry re-runs the whole operation so the two code paths cannot drift.
pub async fn with_single_retry<T, F, Fut>(delay: Duration, operation: F) -> Result<T, BotError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, BotError>>,
{
    match operation().await {
        Ok(value) => Ok(value),
        Err(first) => {
            tracing::error!("run failed: {:?}, retrying in {:?}", first, delay);
            tokio::time::sleep(delay).await;
            operation().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::with_single_retry;
    use crate::errors::BotError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn a_failing_operation_is_attempted_exactly_twice() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), BotError> = with_single_retry(Duration::ZERO, || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(BotError::Validation("boom".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn a_successful_first_attempt_is_not_retried() {
        let attempts = AtomicU32::new(0);
        let result = with_single_retry(Duration::ZERO, || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Ok(42)
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_failure_followed_by_success_recovers() {
        let attempts = AtomicU32::new(0);
        let result = with_single_retry(Duration::ZERO, || async {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(BotError::Validation("transient".into()))
            } else {
                Ok("recovered")
            }
        })
        .await;
        assert_eq!(result.unwrap(), "recovered");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
