mod fee_quote;
mod payload;

pub use fee_quote::*;
pub use payload::*;
