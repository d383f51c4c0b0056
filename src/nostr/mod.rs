mod nostr_poster;

pub use nostr_poster::*;
