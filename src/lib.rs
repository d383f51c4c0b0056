pub mod bot;
pub mod configuration;
pub mod error_fmt;
pub mod errors;
pub mod fetch;
pub mod format;
pub mod mapi;
pub mod mempool_space;
pub mod message;
pub mod metrics;
pub mod nostr;
pub mod startup;
pub mod telemetry;
pub mod validation;
pub mod whatsonchain;
