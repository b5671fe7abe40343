use super::*;
use minter_common::ProjectInfo;
use near_sdk::test_utils::{VMContextBuilder, accounts, get_logs};
use near_sdk::{NearToken, testing_env};

const NOW: u64 = 1_700_000_000;
const START: u64 = NOW + 600;
const HALF_LIFE: u64 = 1_800;

// --- Test Helpers ---

fn owner() -> AccountId {
    accounts(0)
}

fn artist() -> AccountId {
    accounts(1)
}

fn buyer() -> AccountId {
    accounts(2)
}

fn filter() -> AccountId {
    "filter.near".parse().unwrap()
}

fn self_id() -> AccountId {
    "da-exp.near".parse().unwrap()
}

fn get_context(predecessor: AccountId, deposit: u128, now: u64) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id(self_id())
        .predecessor_account_id(predecessor)
        .block_timestamp(now * 1_000_000_000)
        .account_balance(NearToken::from_near(100))
        .attached_deposit(NearToken::from_yoctonear(deposit));
    builder
}

fn setup_contract() -> Contract {
    testing_env!(get_context(owner(), 0, NOW).build());
    let mut contract = Contract::new(owner(), filter());
    testing_env!(get_context(filter(), 0, NOW).build());
    contract
        .on_project_assigned(
            1,
            ProjectInfo {
                artist_id: artist(),
                max_invocations: 2,
                invocations: 0,
            },
        )
        .unwrap();
    contract
}

fn configure(
    contract: &mut Contract,
    start: u64,
    half_life: u64,
    start_price: u128,
    base_price: u128,
) -> Result<(), MinterError> {
    testing_env!(get_context(artist(), 0, NOW).build());
    contract.set_auction_details(1, start, half_life, U128(start_price), U128(base_price))
}

fn setup_auction() -> Contract {
    let mut contract = setup_contract();
    configure(&mut contract, START, HALF_LIFE, 100, 1).unwrap();
    contract
}

fn price_at(contract: &Contract, now: u64) -> u128 {
    testing_env!(get_context(buyer(), 0, now).build());
    contract.get_price_info(1).token_price.0
}

fn purchase_at(contract: &mut Contract, now: u64, deposit: u128) -> Result<Promise, MinterError> {
    testing_env!(get_context(buyer(), deposit, now).build());
    contract.purchase(1)
}

// --- Configuration Tests ---

#[test]
fn test_set_auction_details() {
    let contract = setup_auction();
    let params = contract.get_project_auction_parameters(1).unwrap();
    assert_eq!(params.timestamp_start, START);
    assert_eq!(params.price_decay_half_life_seconds, HALF_LIFE);
    assert_eq!(params.start_price, U128(100));
    // 100 -> 50 -> 25 -> 12 -> 6 -> 3 -> 1
    assert_eq!(params.fully_decayed_at, START + 6 * HALF_LIFE);
    assert!(get_logs().iter().any(|l| l.contains("set_auction_details")));
}

#[test]
fn test_invalid_details_rejected() {
    let mut contract = setup_contract();
    assert_eq!(
        configure(&mut contract, NOW, HALF_LIFE, 100, 1),
        Err(MinterError::AuctionStartInPast)
    );
    assert_eq!(
        configure(&mut contract, START, HALF_LIFE, 100, 100),
        Err(MinterError::PriceNotDecaying)
    );
    assert!(matches!(
        configure(&mut contract, START, 299, 100, 1),
        Err(MinterError::OutOfRange(_))
    ));
    assert!(matches!(
        configure(&mut contract, START, 3_601, 100, 1),
        Err(MinterError::OutOfRange(_))
    ));
    assert!(contract.get_project_auction_parameters(1).is_none());
    assert_eq!(contract.get_price_info(1), PriceInfo::unconfigured());
}

#[test]
fn test_only_artist_configures() {
    let mut contract = setup_contract();
    testing_env!(get_context(owner(), 0, NOW).build());
    assert!(matches!(
        contract.set_auction_details(1, START, HALF_LIFE, U128(100), U128(1)),
        Err(MinterError::Unauthorized(_))
    ));
    testing_env!(get_context(artist(), 0, NOW).build());
    assert_eq!(
        contract.set_auction_details(2, START, HALF_LIFE, U128(100), U128(1)),
        Err(MinterError::NotAssigned(2))
    );
}

#[test]
fn test_details_replaceable_until_start() {
    let mut contract = setup_auction();
    assert!(configure(&mut contract, START + 60, 600, 80, 10).is_ok());
    assert_eq!(
        contract.get_project_auction_parameters(1).unwrap().start_price,
        U128(80)
    );

    testing_env!(get_context(artist(), 0, START + 60).build());
    assert_eq!(
        contract.set_auction_details(1, START + 10_000, 600, U128(80), U128(10)),
        Err(MinterError::AuctionAlreadyStarted(1))
    );
}

#[test]
fn test_half_life_range_update() {
    let mut contract = setup_contract();
    testing_env!(get_context(owner(), 1, NOW).build());
    contract.set_allowable_half_life_range_seconds(60, 600).unwrap();
    assert_eq!(
        contract.get_allowable_half_life_range_seconds(),
        HalfLifeRangeView {
            minimum_seconds: 60,
            maximum_seconds: 600,
        }
    );
    assert!(matches!(
        contract.set_allowable_half_life_range_seconds(600, 60),
        Err(MinterError::OutOfRange(_))
    ));
    assert!(matches!(
        configure(&mut contract, START, HALF_LIFE, 100, 1),
        Err(MinterError::OutOfRange(_))
    ));

    testing_env!(get_context(owner(), 0, NOW).build());
    assert!(matches!(
        contract.set_allowable_half_life_range_seconds(60, 600),
        Err(MinterError::InvalidInput(_))
    ));
}

#[test]
fn test_reset_auction_details() {
    let mut contract = setup_auction();
    testing_env!(get_context(artist(), 1, START + 5).build());
    assert!(matches!(
        contract.reset_auction_details(1),
        Err(MinterError::Unauthorized(_))
    ));

    testing_env!(get_context(owner(), 1, START + 5).build());
    contract.reset_auction_details(1).unwrap();
    assert_eq!(
        purchase_at(&mut contract, START + 5, 100).err(),
        Some(MinterError::NotConfigured(1))
    );
}

// --- Pricing Tests ---

#[test]
fn test_price_halves_each_half_life() {
    let contract = setup_auction();
    assert_eq!(price_at(&contract, NOW), 100);
    assert_eq!(price_at(&contract, START), 100);
    assert_eq!(price_at(&contract, START + HALF_LIFE - 1), 100);
    assert_eq!(price_at(&contract, START + HALF_LIFE), 50);
    assert_eq!(price_at(&contract, START + 2 * HALF_LIFE), 25);
    assert_eq!(price_at(&contract, START + 20 * HALF_LIFE), 1);
}

// --- Purchase Tests ---

#[test]
fn test_purchase_before_start_fails() {
    let mut contract = setup_auction();
    assert_eq!(
        purchase_at(&mut contract, START - 1, 100).err(),
        Some(MinterError::AuctionNotStarted(1))
    );
}

#[test]
fn test_purchase_requires_current_price() {
    let mut contract = setup_auction();
    assert_eq!(
        purchase_at(&mut contract, START + HALF_LIFE, 49).err(),
        Some(MinterError::InsufficientDeposit {
            required: U128(50),
            attached: U128(49),
        })
    );
    assert!(purchase_at(&mut contract, START + HALF_LIFE, 50).is_ok());
    assert_eq!(contract.get_project_sale_state(1).unwrap().invocations, 1);
}

#[test]
fn test_purchase_until_sold_out() {
    let mut contract = setup_auction();
    assert!(purchase_at(&mut contract, START, 100).is_ok());
    assert!(purchase_at(&mut contract, START, 150).is_ok());
    assert_eq!(
        purchase_at(&mut contract, START, 100).err(),
        Some(MinterError::MaxInvocationsReached(1))
    );
}

#[test]
fn test_mint_callback_outcomes() {
    let mut contract = setup_auction();
    purchase_at(&mut contract, START, 120).unwrap();

    testing_env!(get_context(self_id(), 0, START).build());
    assert_eq!(
        contract.resolve_purchase(1, &buyer(), 120, 100, Some(U64(7))),
        Some(U64(7))
    );
    assert_eq!(contract.get_project_sale_state(1).unwrap().invocations, 1);

    assert_eq!(contract.on_purchase_minted(1, buyer(), U128(120), U128(100)), None);
    assert_eq!(contract.get_project_sale_state(1).unwrap().invocations, 0);
    assert!(get_logs().iter().any(|l| l.contains("purchase_failed")));
}

#[test]
fn test_minter_type() {
    let contract = setup_contract();
    assert_eq!(contract.minter_type(), "MinterDAExpV1");
    assert_eq!(contract.get_owner(), &owner());
}
