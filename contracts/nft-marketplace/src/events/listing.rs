use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::builder::EventBuilder;
use super::{LISTING, TOKEN_LISTED_SUCCESS};
use crate::TokenId;

pub fn emit_token_listed_success(
    token_id: TokenId,
    contract_id: &AccountId,
    seller_id: &AccountId,
    price: U128,
    currently_listed: bool,
) {
    EventBuilder::new(TOKEN_LISTED_SUCCESS, "token_listed", seller_id)
        .field("token_id", token_id)
        .field("contract_id", contract_id)
        .field("seller_id", seller_id)
        .field("price", price)
        .field("currently_listed", currently_listed)
        .emit();
}

pub fn emit_token_sold(
    token_id: TokenId,
    seller_id: &AccountId,
    buyer_id: &AccountId,
    price: U128,
    listing_fee: U128,
) {
    EventBuilder::new(LISTING, "token_sold", buyer_id)
        .field("token_id", token_id)
        .field("seller_id", seller_id)
        .field("buyer_id", buyer_id)
        .field("price", price)
        .field("listing_fee", listing_fee)
        .emit();
}
