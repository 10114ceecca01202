use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_list_price_updated(owner_id: &AccountId, old_price: u128, new_price: u128) {
    EventBuilder::new(CONTRACT, "list_price_updated", owner_id)
        .field("old_list_price", U128(old_price))
        .field("new_list_price", U128(new_price))
        .emit();
}
