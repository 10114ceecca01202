use crate::*;
use near_sdk::Gas;

#[near]
impl Contract {
    /// Owner only; the new WASM is the raw call input.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id(), "upgrade the contract")?;
        let code = env::input()
            .ok_or_else(|| MarketplaceError::InvalidInput("No contract code attached".into()))?
            .to_vec();
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            ))
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
