mod mempool_info;

pub use mempool_info::*;
