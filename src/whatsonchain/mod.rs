mod domain;
mod whatsonchain_client;

pub use domain::*;
pub use whatsonchain_client::*;
