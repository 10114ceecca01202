use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn create_token_returns_first_id_and_lists_it() {
    let mut contract = new_contract();
    let token_id = list_token(&mut contract, &owner(), "https://example.com", ONE_NEAR);

    assert_eq!(token_id, 1);
    let listed = contract.get_latest_id_to_listed_token().unwrap();
    assert_eq!(listed.token_id, 1);
    assert_eq!(listed.price, U128(ONE_NEAR));
    assert!(listed.currently_listed);
    assert_eq!(listed.seller_id, owner());
    assert_eq!(listed.owner_id, marketplace());
}

#[test]
fn create_token_ids_are_sequential() {
    let mut contract = new_contract();

    for expected in 1..=5u64 {
        let id = list_token(&mut contract, &buyer(), "ipfs://meta", ONE_NEAR + expected as u128);
        assert_eq!(id, expected);
    }
    assert_eq!(contract.get_current_token(), 5);
    assert_eq!(
        contract.get_latest_id_to_listed_token().unwrap().price,
        U128(ONE_NEAR + 5)
    );
}

#[test]
fn create_token_stores_token_record() {
    let mut contract = new_contract();
    let token_id = list_token(&mut contract, &buyer(), "https://example.com/1.json", 7);

    let token = contract.get_token(token_id).unwrap();
    assert_eq!(token.token_uri, "https://example.com/1.json");
    assert_eq!(token.creator_id, buyer());
    assert_eq!(token.listing_fee_paid, U128(DEFAULT_LIST_PRICE));
    assert_eq!(
        contract.token_uri(token_id),
        Some("https://example.com/1.json".to_string())
    );
}

#[test]
fn create_token_zero_price_fails_without_allocating() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), DEFAULT_LIST_PRICE).build());

    let err = contract
        .create_token("https://example.com".into(), U128(0))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidPrice(_)));
    assert_eq!(err.to_string(), "Make sure the price isn't negative");
    assert_eq!(contract.get_current_token(), 0);
    assert!(contract.get_latest_id_to_listed_token().is_none());
    assert!(contract.get_all_nfts(None, None).is_empty());
}

#[test]
fn create_token_wrong_fee_fails_without_allocating() {
    let mut contract = new_contract();

    for deposit in [0, DEFAULT_LIST_PRICE - 1, DEFAULT_LIST_PRICE + 1] {
        testing_env!(context_with_deposit(owner(), deposit).build());
        let err = contract
            .create_token("https://example.com".into(), U128(ONE_NEAR))
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::IncorrectFee(_)));
    }
    assert_eq!(contract.get_current_token(), 0);
    assert_eq!(contract.get_supply_for_account(owner()), 0);
}

#[test]
fn create_token_price_checked_before_fee() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = contract
        .create_token("https://example.com".into(), U128(0))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidPrice(_)));
}

#[test]
fn create_token_accepts_empty_uri() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), DEFAULT_LIST_PRICE).build());

    let token_id = contract.create_token(String::new(), U128(ONE_NEAR)).unwrap();
    assert_eq!(token_id, 1);
    assert_eq!(contract.token_uri(token_id), Some(String::new()));
    assert!(contract.get_listed_token_for_id(token_id).unwrap().currently_listed);
}

#[test]
fn create_token_oversized_uri_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), DEFAULT_LIST_PRICE).build());

    let uri = "a".repeat(MAX_TOKEN_URI_LEN + 1);
    let err = contract.create_token(uri, U128(ONE_NEAR)).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn create_token_with_zero_fee_configured() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    contract.update_list_price(U128(0)).unwrap();

    let token_id = list_token(&mut contract, &buyer(), "https://example.com", ONE_NEAR);
    assert_eq!(token_id, 1);
    assert_eq!(contract.get_token(1).unwrap().listing_fee_paid, U128(0));
}

#[test]
fn create_token_after_failure_reuses_next_id() {
    let mut contract = new_contract();
    list_token(&mut contract, &owner(), "https://example1.com", ONE_NEAR);

    testing_env!(context_with_deposit(owner(), DEFAULT_LIST_PRICE).build());
    assert!(contract.create_token("https://bad.com".into(), U128(0)).is_err());

    let id = list_token(&mut contract, &owner(), "https://example2.com", ONE_NEAR);
    assert_eq!(id, 2);
}
