use serde::{Deserialize, Serialize};

/// Summary of the pending pool: transaction count and total virtual size
/// in vbytes. Fields the API leaves out are read as zero.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MempoolSnapshot {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub vsize: u64,
}
