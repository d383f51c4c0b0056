use serde::{Deserialize, Serialize};

use crate::errors::BotError;
use crate::validation::require_finite;

/// Outer mAPI response. The signature metadata around the payload is not
/// verified here, only the payload itself is consumed.
#[derive(Deserialize, Debug, Clone)]
pub struct FeeQuoteEnvelope {
    pub payload: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeeQuote {
    pub fees: Vec<FeeRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub fee_type: String,
    pub mining_fee: MiningFee,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct MiningFee {
    pub satoshis: f64,
    pub bytes: f64,
}

impl FeeQuote {
    fn find(&self, fee_type: &str) -> Option<&FeeRecord> {
        self.fees
            .iter()
            .find(|record| record.fee_type.eq_ignore_ascii_case(fee_type))
    }

    /// The quote is unusable without a standard fee.
    pub fn standard(&self) -> Result<&FeeRecord, BotError> {
        self.find("standard")
            .ok_or_else(|| BotError::Validation("no standard fee record in quote".into()))
    }

    /// The data fee is optional, the standard fee covers for it.
    pub fn data_or_standard(&self) -> Result<&FeeRecord, BotError> {
        match self.find("data") {
            Some(record) => Ok(record),
            None => self.standard(),
        }
    }
}

impl FeeRecord {
    /// Satoshis per byte for this record.
    pub fn rate(&self) -> Result<f64, BotError> {
        let satoshis = require_finite(self.mining_fee.satoshis, "miningFee.satoshis")?;
        let bytes = require_finite(self.mining_fee.bytes, "miningFee.bytes")?;
        if bytes == 0.0 {
            return Err(BotError::Validation("miningFee.bytes is zero".into()));
        }
        Ok(satoshis / bytes)
    }
}
