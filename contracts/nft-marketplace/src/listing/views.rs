use crate::guards::clamp_page;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_listed_token_for_id(&self, token_id: TokenId) -> Result<ListedToken, MarketplaceError> {
        self.listings
            .get(&token_id)
            .cloned()
            .ok_or_else(MarketplaceError::token_not_found)
    }

    pub fn get_latest_id_to_listed_token(&self) -> Option<ListedToken> {
        self.listings.get(&self.current_token_id).cloned()
    }

    pub fn get_current_token(&self) -> TokenId {
        self.current_token_id
    }

    pub fn get_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens.get(&token_id).cloned()
    }

    pub fn token_uri(&self, token_id: TokenId) -> Option<String> {
        self.tokens.get(&token_id).map(|token| token.token_uri.clone())
    }

    pub fn get_all_nfts(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ListedToken> {
        let (start, limit) = clamp_page(from_index, limit);
        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn get_listed_nfts(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ListedToken> {
        let (start, limit) = clamp_page(from_index, limit);
        self.listings
            .values()
            .filter(|listing| listing.currently_listed)
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Tokens the account listed or bought, in the order it touched them.
    pub fn get_nfts_for_account(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<ListedToken> {
        let Some(tokens) = self.tokens_by_account.get(&account_id) else {
            return vec![];
        };
        let (start, limit) = clamp_page(from_index, limit);
        tokens
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| self.listings.get(token_id).cloned())
            .collect()
    }

    pub fn get_supply_for_account(&self, account_id: AccountId) -> u64 {
        self.tokens_by_account
            .get(&account_id)
            .map(|tokens| tokens.len() as u64)
            .unwrap_or(0)
    }
}
