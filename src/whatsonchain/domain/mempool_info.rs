use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MempoolInfo {
    #[serde(default)]
    pub count: u64,
}
