use crate::*;

impl Contract {
    pub(crate) fn add_token_to_account(&mut self, account_id: &AccountId, token_id: TokenId) {
        let mut tokens = self.tokens_by_account.remove(account_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TokensByAccountInner {
                account_id_hash: crate::guards::hash_account_id(account_id),
            })
        });
        tokens.insert(token_id);
        self.tokens_by_account.insert(account_id.clone(), tokens);
    }
}
