use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::FeeQuote;
use crate::errors::BotError;
use crate::validation::require_key;

/// mAPI does not announce whether the payload is raw JSON or base64-encoded
/// JSON, so each strategy is tried in order and the first success wins.
type DecodeStrategy = fn(&str) -> Option<serde_json::Value>;

const STRATEGIES: [DecodeStrategy; 2] = [parse_direct, parse_base64];

fn parse_direct(payload: &str) -> Option<serde_json::Value> {
    serde_json::from_str(payload).ok()
}

fn parse_base64(payload: &str) -> Option<serde_json::Value> {
    let bytes = BASE64.decode(payload.trim()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&text).ok()
}

pub fn decode_payload(payload: &str) -> Result<FeeQuote, BotError> {
    let value = STRATEGIES
        .iter()
        .find_map(|decode| decode(payload))
        .ok_or_else(|| {
            BotError::Parse(
                "mAPI fee quote payload".to_owned(),
                "payload is neither raw JSON nor base64-encoded JSON".to_owned(),
            )
        })?;
    require_key(&value, "fees", "fee list")?;
    serde_json::from_value(value)
        .map_err(|e| BotError::Parse("mAPI fee quote payload".to_owned(), e.to_string()))
}
