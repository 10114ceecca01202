use crate::*;

#[near]
impl Contract {
    /// Mints a token and lists it for `price`. The attached deposit must be
    /// exactly the current listing fee.
    #[payable]
    #[handle_result]
    pub fn create_token(&mut self, token_uri: String, price: U128) -> Result<TokenId, MarketplaceError> {
        let seller_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_create_token(&seller_id, token_uri, price, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_create_token(
        &mut self,
        seller_id: &AccountId,
        token_uri: String,
        price: U128,
        deposit: u128,
    ) -> Result<TokenId, MarketplaceError> {
        if price.0 == 0 {
            return Err(MarketplaceError::non_positive_price());
        }
        validate_token_uri(&token_uri)?;
        if deposit != self.list_price {
            return Err(MarketplaceError::wrong_listing_fee());
        }

        let token_id = self.current_token_id + 1;
        let contract_id = env::current_account_id();

        self.tokens.insert(
            token_id,
            Token {
                token_id,
                token_uri,
                creator_id: seller_id.clone(),
                listing_fee_paid: U128(deposit),
            },
        );
        self.listings.insert(
            token_id,
            ListedToken {
                token_id,
                seller_id: seller_id.clone(),
                owner_id: contract_id.clone(),
                price,
                currently_listed: true,
            },
        );
        self.add_token_to_account(seller_id, token_id);
        self.current_token_id = token_id;

        events::emit_token_listed_success(token_id, &contract_id, seller_id, price, true);
        Ok(token_id)
    }
}

pub(crate) fn validate_token_uri(token_uri: &str) -> Result<(), MarketplaceError> {
    if token_uri.len() > MAX_TOKEN_URI_LEN {
        return Err(MarketplaceError::InvalidInput(format!(
            "Token URI exceeds max length of {} bytes",
            MAX_TOKEN_URI_LEN
        )));
    }
    Ok(())
}
