use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

pub type TokenId = u64;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub token_id: TokenId,
    pub token_uri: String,
    pub creator_id: AccountId,
    /// Held by the ledger until the token sells, then forwarded to the owner.
    pub listing_fee_paid: U128,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ListedToken {
    pub token_id: TokenId,
    pub seller_id: AccountId,
    /// The ledger account while listed, the buyer once sold.
    pub owner_id: AccountId,
    pub price: U128,
    pub currently_listed: bool,
}
