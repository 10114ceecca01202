//! Typed errors for the marketplace ledger.
//!
//! Methods marked `#[handle_result]` turn an `Err` into `env::panic_str` with
//! the Display text, which rolls back the whole call. Display is the bare
//! message: existing callers match on these strings exactly.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketplaceError {
    /// Caller is not allowed to perform the mutation.
    Unauthorized(String),
    /// Listing price is zero.
    InvalidPrice(String),
    /// Attached deposit does not match the listing fee.
    IncorrectFee(String),
    /// Attached deposit does not match the asking price.
    IncorrectPrice(String),
    /// Token id was never allocated.
    UnknownToken(String),
    /// Listing exists but is no longer for sale.
    NotListed(String),
    InvalidInput(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg)
            | Self::InvalidPrice(msg)
            | Self::IncorrectFee(msg)
            | Self::IncorrectPrice(msg)
            | Self::UnknownToken(msg)
            | Self::NotListed(msg)
            | Self::InvalidInput(msg) => f.write_str(msg),
        }
    }
}

impl MarketplaceError {
    pub fn only_owner(action: &str) -> Self {
        Self::Unauthorized(format!("Only owner can {}", action))
    }
    pub fn non_positive_price() -> Self {
        Self::InvalidPrice("Make sure the price isn't negative".into())
    }
    pub fn wrong_listing_fee() -> Self {
        Self::IncorrectFee("Hopefully sending the correct price".into())
    }
    pub fn wrong_asking_price() -> Self {
        Self::IncorrectPrice(
            "Please submit the asking price in order to complete the purchase".into(),
        )
    }
    pub fn token_not_found() -> Self {
        Self::UnknownToken("Token does not exist".into())
    }
    pub fn not_listed() -> Self {
        Self::NotListed("Token is not listed for sale".into())
    }
}
