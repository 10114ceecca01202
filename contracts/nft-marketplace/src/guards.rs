use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    /// Single owner gate for every owner-only mutation; `action` completes
    /// the sentence "Only owner can ...".
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
        action: &str,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::only_owner(action));
        }
        Ok(())
    }
}

pub(crate) fn clamp_page(from_index: Option<u64>, limit: Option<u64>) -> (usize, usize) {
    let start = usize::try_from(from_index.unwrap_or(0)).unwrap_or(usize::MAX);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}
