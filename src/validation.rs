use crate::errors::BotError;

/// Rejects NaN/infinity before a value enters a fee formula.
pub fn require_finite(value: f64, label: &str) -> Result<f64, BotError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BotError::Validation(format!(
            "{} is not a finite number",
            label
        )))
    }
}

/// A present-but-null value passes, only a missing key fails.
pub fn require_key<'a>(
    value: &'a serde_json::Value,
    key: &str,
    hint: &str,
) -> Result<&'a serde_json::Value, BotError> {
    value
        .get(key)
        .ok_or_else(|| BotError::Validation(format!("missing key {} ({})", key, hint)))
}

#[cfg(test)]
mod tests {
    use super::{require_finite, require_key};
    use crate::errors::BotError;
    use serde_json::json;

    #[test]
    fn require_finite_accepts_ordinary_numbers() {
        assert_eq!(require_finite(0.25, "rate").unwrap(), 0.25);
        assert_eq!(require_finite(-3.0, "rate").unwrap(), -3.0);
    }

    #[test]
    fn require_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            require_finite(f64::NAN, "rate"),
            Err(BotError::Validation(_))
        ));
        assert!(matches!(
            require_finite(f64::INFINITY, "rate"),
            Err(BotError::Validation(_))
        ));
    }

    #[test]
    fn require_key_distinguishes_absent_from_null() {
        let value = json!({ "fees": null });
        assert!(require_key(&value, "fees", "fee list").is_ok());
        assert!(matches!(
            require_key(&value, "payload", "envelope"),
            Err(BotError::Validation(_))
        ));
    }
}
