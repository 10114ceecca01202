use near_sdk::NearToken;

/// 0.01 NEAR.
pub const DEFAULT_LIST_PRICE: u128 = 10_000_000_000_000_000_000_000;

pub const MAX_TOKEN_URI_LEN: usize = 2_048;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_MIGRATE_TGAS: u64 = 200;
