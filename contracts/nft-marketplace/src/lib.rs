use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod listing;
mod storage;

mod admin;
mod upgrade;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MarketplaceError;
pub use listing::{ListedToken, Token, TokenId};
pub use storage::StorageKey;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    /// Fee in yoctoNEAR a seller attaches to `create_token`.
    pub list_price: u128,

    /// Last allocated id; ids start at 1 so 0 means "nothing minted yet".
    pub current_token_id: TokenId,
    pub tokens: LookupMap<TokenId, Token>,
    pub listings: IterableMap<TokenId, ListedToken>,
    // Every token an account has sold or bought.
    pub(crate) tokens_by_account: LookupMap<AccountId, IterableSet<TokenId>>,
}
