use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Tokens,
    Listings,
    TokensByAccount,
    TokensByAccountInner { account_id_hash: Vec<u8> },
}
