use crate::*;

#[near]
impl Contract {
    /// Buys a listed token. The attached deposit must equal the asking price;
    /// the price goes to the seller and the escrowed listing fee to the owner.
    #[payable]
    #[handle_result]
    pub fn execute_sale(&mut self, token_id: TokenId) -> Result<(), MarketplaceError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_execute_sale(&buyer_id, token_id, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_execute_sale(
        &mut self,
        buyer_id: &AccountId,
        token_id: TokenId,
        deposit: u128,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self
            .listings
            .get(&token_id)
            .cloned()
            .ok_or_else(MarketplaceError::token_not_found)?;
        let listing_fee = self
            .tokens
            .get(&token_id)
            .map(|token| token.listing_fee_paid.0)
            .ok_or_else(MarketplaceError::token_not_found)?;

        if !listing.currently_listed {
            return Err(MarketplaceError::not_listed());
        }
        let price = listing.price.0;
        if deposit != price {
            return Err(MarketplaceError::wrong_asking_price());
        }

        listing.owner_id = buyer_id.clone();
        listing.currently_listed = false;
        let seller_id = listing.seller_id.clone();
        self.listings.insert(token_id, listing);
        self.add_token_to_account(buyer_id, token_id);

        // Settlement is fire-and-forget; the state transition above is final.
        let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price));
        if listing_fee > 0 {
            let _ = Promise::new(self.owner_id.clone())
                .transfer(NearToken::from_yoctonear(listing_fee));
        }

        events::emit_token_sold(token_id, &seller_id, buyer_id, U128(price), U128(listing_fee));
        Ok(())
    }
}
