use serde::Deserialize;

use super::RecommendedFees;

/// Named priority level on the recommended-fee table. Each tier maps to the
/// block count it is expected to confirm within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FeeTier {
    Fastest,
    HalfHour,
    Hour,
    Economy,
    Minimum,
}

impl FeeTier {
    pub fn blocks(&self) -> u64 {
        match self {
            FeeTier::Fastest => 1,
            FeeTier::HalfHour => 3,
            FeeTier::Hour => 6,
            FeeTier::Economy => 12,
            FeeTier::Minimum => 18,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeeTier::Fastest => "fastestFee",
            FeeTier::HalfHour => "halfHourFee",
            FeeTier::Hour => "hourFee",
            FeeTier::Economy => "economyFee",
            FeeTier::Minimum => "minimumFee",
        }
    }

    pub fn rate(&self, fees: &RecommendedFees) -> f64 {
        match self {
            FeeTier::Fastest => fees.fastest_fee,
            FeeTier::HalfHour => fees.half_hour_fee,
            FeeTier::Hour => fees.hour_fee,
            FeeTier::Economy => fees.economy_fee,
            FeeTier::Minimum => fees.minimum_fee,
        }
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        FeeTier::Hour
    }
}

// Unrecognized tier names fall back to the hour tier rather than failing
// the run, the configured value is only a display preference.
impl From<String> for FeeTier {
    fn from(val: String) -> Self {
        match val.as_str() {
            "fastestFee" => FeeTier::Fastest,
            "halfHourFee" => FeeTier::HalfHour,
            "hourFee" => FeeTier::Hour,
            "economyFee" => FeeTier::Economy,
            "minimumFee" => FeeTier::Minimum,
            _ => FeeTier::Hour,
        }
    }
}
