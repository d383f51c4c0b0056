use std::fmt::Debug;

use reqwest::StatusCode;

use crate::error_fmt::error_chain_fmt;

/// Everything that can stop a run. All of these bubble up to the
/// single blanket retry in the orchestrator, nothing is recovered locally.
#[derive(thiserror::Error)]
pub enum BotError {
    #[error("missing required configuration: {0}")]
    Config(String),
    #[error("{endpoint} returned HTTP {status}")]
    Fetch { endpoint: String, status: StatusCode },
    #[error("request to {endpoint} failed before a status was returned")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not parse response from {0}: {1}")]
    Parse(String, String),
    #[error("invalid upstream data: {0}")]
    Validation(String),
    #[error("identity check against the posting platform failed: {0}")]
    Auth(String),
    #[error("posting failed: {0}")]
    Post(String),
}

impl Debug for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
