//! Pure calculators mapping upstream snapshots to the figures shown in the
//! post. No I/O here, everything is deterministic.

use crate::errors::BotError;
use crate::mapi::FeeQuote;
use crate::mempool_space::{FeeTier, MempoolSnapshot, RecommendedFees};
use crate::validation::require_finite;
use crate::whatsonchain::MempoolInfo;

/// Reference size of a 1-input/2-output BTC transfer.
pub const BTC_SIMPLE_VBYTES: f64 = 140.0;
/// Reference size of the equivalent BSV transfer.
pub const BSV_SIMPLE_BYTES: f64 = 226.0;
pub const ONE_KB: f64 = 1000.0;
pub const MINUTES_PER_BLOCK: u64 = 10;
/// Assumed block capacity in vbytes when normalizing the BTC backlog.
const BLOCK_CAPACITY_VBYTES: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkMetrics {
    /// Cost of the reference simple transfer, in satoshis.
    pub simple_fee: i64,
    /// Cost of 1KB of data, in satoshis.
    pub one_kb_fee: i64,
    pub eta_minutes: u64,
    pub backlog_count: u64,
    /// Backlog expressed in block-equivalents.
    pub backlog_blocks: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub btc: NetworkMetrics,
    pub bsv: NetworkMetrics,
}

pub fn simple_fee_cost(rate_per_unit: f64, assumed_size: f64) -> i64 {
    (rate_per_unit * assumed_size).round() as i64
}

pub fn one_kb_cost(rate_per_unit: f64) -> i64 {
    (rate_per_unit * ONE_KB).round() as i64
}

/// Step function bucketing the BSV pending-tx count into a block count.
/// Monotonic non-decreasing in the count.
pub fn blocks_for_backlog(tx_count: u64) -> u64 {
    if tx_count <= 20_000 {
        1
    } else if tx_count <= 100_000 {
        2
    } else {
        3
    }
}

pub fn bsv_eta_minutes(tx_count: u64) -> u64 {
    blocks_for_backlog(tx_count) * MINUTES_PER_BLOCK
}

/// BTC backlog normalized to block capacity, kept to one decimal place.
pub fn vsize_backlog_blocks(vsize: u64) -> f64 {
    ((vsize as f64 / BLOCK_CAPACITY_VBYTES) * 10.0).round().max(0.0) / 10.0
}

pub fn derive_btc(
    fees: &RecommendedFees,
    mempool: &MempoolSnapshot,
    tier: FeeTier,
) -> Result<NetworkMetrics, BotError> {
    let rate = require_finite(tier.rate(fees), tier.name())?;
    Ok(NetworkMetrics {
        simple_fee: simple_fee_cost(rate, BTC_SIMPLE_VBYTES),
        one_kb_fee: one_kb_cost(rate),
        eta_minutes: tier.blocks() * MINUTES_PER_BLOCK,
        backlog_count: mempool.count,
        backlog_blocks: vsize_backlog_blocks(mempool.vsize),
    })
}

pub fn derive_bsv(quote: &FeeQuote, mempool: &MempoolInfo) -> Result<NetworkMetrics, BotError> {
    let standard_rate = quote.standard()?.rate()?;
    let data_rate = quote.data_or_standard()?.rate()?;
    let eta_minutes = bsv_eta_minutes(mempool.count);
    Ok(NetworkMetrics {
        simple_fee: simple_fee_cost(standard_rate, BSV_SIMPLE_BYTES),
        one_kb_fee: one_kb_cost(data_rate),
        eta_minutes,
        backlog_count: mempool.count,
        // the ETA bucket doubles as the backlog estimate, there is no
        // independent size signal for this network
        backlog_blocks: (eta_minutes / MINUTES_PER_BLOCK).max(1) as f64,
    })
}
