use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_bool_from_anything;

use crate::errors::BotError;
use crate::mempool_space::FeeTier;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub bot: BotSettings,
    pub nostr: NostrSettings,
}

/// Immutable per-run settings, built once at startup and passed by reference
/// into the pipeline. Nothing reads the environment mid-run.
#[derive(serde::Deserialize, Clone)]
pub struct BotSettings {
    pub mempool_space_url: String,
    pub mapi_url: String,
    pub whatsonchain_url: String,
    #[serde(default)]
    pub fee_tier: FeeTier,
    #[serde(default)]
    pub explainer_url: String,
    #[serde(default, deserialize_with = "deserialize_bool_from_anything")]
    pub dry_run: bool,
}

#[derive(serde::Deserialize, Clone)]
pub struct NostrSettings {
    pub private_key: Secret<String>,
    pub nostr_relays: Vec<String>,
}

impl Settings {
    pub fn ensure_credentials(&self) -> Result<(), BotError> {
        if self.nostr.private_key.expose_secret().is_empty() {
            return Err(BotError::Config("nostr.private_key".into()));
        }
        if self.nostr.nostr_relays.is_empty() {
            return Err(BotError::Config("nostr.nostr_relays".into()));
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Environment variables such as APP_BOT__DRY_RUN=1 override the yaml file.
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::{BotSettings, NostrSettings, Settings};
    use crate::errors::BotError;
    use crate::mempool_space::FeeTier;
    use secrecy::Secret;

    fn settings(private_key: &str, relays: Vec<String>) -> Settings {
        Settings {
            bot: BotSettings {
                mempool_space_url: "https://mempool.space".into(),
                mapi_url: "https://mapi.gorillapool.io".into(),
                whatsonchain_url: "https://api.whatsonchain.com".into(),
                fee_tier: FeeTier::default(),
                explainer_url: String::new(),
                dry_run: false,
            },
            nostr: NostrSettings {
                private_key: Secret::new(private_key.to_owned()),
                nostr_relays: relays,
            },
        }
    }

    #[test]
    fn missing_private_key_is_named_in_the_error() {
        let err = settings("", vec!["wss://relay.example".into()])
            .ensure_credentials()
            .unwrap_err();
        assert!(matches!(err, BotError::Config(item) if item == "nostr.private_key"));
    }

    #[test]
    fn missing_relays_are_named_in_the_error() {
        let err = settings("nsec1...", vec![]).ensure_credentials().unwrap_err();
        assert!(matches!(err, BotError::Config(item) if item == "nostr.nostr_relays"));
    }

    #[test]
    fn complete_credentials_pass() {
        assert!(settings("nsec1...", vec!["wss://relay.example".into()])
            .ensure_credentials()
            .is_ok());
    }
}
