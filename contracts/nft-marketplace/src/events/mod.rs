mod builder;
mod types;

mod contract;
mod listing;

pub use contract::*;
pub use listing::*;

pub(crate) const STANDARD: &str = "nft_marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const TOKEN_LISTED_SUCCESS: &str = "TokenListedSuccess";
pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
