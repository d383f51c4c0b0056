mod domain;
mod mempool_space_client;

pub use domain::*;
pub use mempool_space_client::*;
