mod domain;
mod mapi_client;

pub use domain::*;
pub use mapi_client::*;
