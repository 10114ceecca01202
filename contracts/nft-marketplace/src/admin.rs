use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, list_price: Option<U128>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            list_price: list_price.map(|p| p.0).unwrap_or(DEFAULT_LIST_PRICE),
            current_token_id: 0,
            tokens: LookupMap::new(StorageKey::Tokens),
            listings: IterableMap::new(StorageKey::Listings),
            tokens_by_account: LookupMap::new(StorageKey::TokensByAccount),
        }
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_list_price(&self) -> U128 {
        U128(self.list_price)
    }

    /// Owner only. Zero is a valid fee.
    #[handle_result]
    pub fn update_list_price(&mut self, list_price: U128) -> Result<(), MarketplaceError> {
        self.check_contract_owner(&env::predecessor_account_id(), "update listing price")?;
        let old_price = self.list_price;
        self.list_price = list_price.0;
        events::emit_list_price_updated(&self.owner_id, old_price, self.list_price);
        Ok(())
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
