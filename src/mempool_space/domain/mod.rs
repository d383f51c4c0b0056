mod fee_tier;
mod mempool_snapshot;
mod recommended_fees;

pub use fee_tier::*;
pub use mempool_snapshot::*;
pub use recommended_fees::*;
