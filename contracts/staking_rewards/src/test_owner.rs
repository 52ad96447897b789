extern crate std;

use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction},
    token::StellarAssetClient,
    Address, Env, IntoVal, Symbol,
};

use crate::{ContractError, StakingRewardsContract, StakingRewardsContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingRewardsContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let staking_asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let rewards_asset = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &staking_asset.address(),
        &rewards_asset.address(),
        &10,
        &86_400,
    );

    (env, client, owner, staking_asset.address())
}

// ── Two-step ownership transfer ──────────────────────────────────────────────

#[test]
fn test_owner_transfer_happy_path() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    assert_eq!(client.get_pending_owner(), Some(successor.clone()));

    client.accept_owner(&successor);
    assert_eq!(client.get_pool_state().owner, successor);
    assert_eq!(client.get_pending_owner(), None);

    // The old owner lost its rights, the new one has them.
    match client.try_set_reward_rate(&owner, &20) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    client.set_reward_rate(&successor, &20);
    assert_eq!(client.get_pool_state().reward_rate, 20);
}

#[test]
fn test_propose_owner_by_non_owner_fails() {
    let (env, client, _owner, _) = setup();
    let intruder = Address::generate(&env);

    match client.try_propose_owner(&intruder, &intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pending_owner(), None);
}

#[test]
fn test_accept_owner_by_wrong_address_fails() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_owner(&owner, &successor);

    match client.try_accept_owner(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pool_state().owner, owner);
}

#[test]
fn test_accept_owner_without_proposal_fails() {
    let (env, client, _owner, _) = setup();

    match client.try_accept_owner(&Address::generate(&env)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
}

#[test]
fn test_cancel_owner_transfer() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    client.cancel_owner_transfer(&owner);
    assert_eq!(client.get_pending_owner(), None);

    match client.try_accept_owner(&successor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
    match client.try_cancel_owner_transfer(&owner) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
}

// ── Caller authentication ────────────────────────────────────────────────────

#[test]
fn test_stake_requires_staker_auth() {
    let (env, client, _owner, staking_asset) = setup();
    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &staking_asset).mint(&staker, &1_000);

    client.stake(&staker, &250);

    let auths = env.auths();
    let (signer, invocation) = auths
        .iter()
        .find(|(addr, _)| *addr == staker)
        .expect("staker must authorize the stake");
    assert_eq!(*signer, staker);
    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            client.address.clone(),
            Symbol::new(&env, "stake"),
            (staker.clone(), 250i128).into_val(&env),
        ))
    );
}

#[test]
fn test_set_reward_rate_requires_owner_auth() {
    let (env, client, owner, _) = setup();

    client.set_reward_rate(&owner, &15);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, owner);
}

#[test]
fn test_unstake_and_claim_require_staker_auth() {
    let (env, client, _owner, staking_asset) = setup();
    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &staking_asset).mint(&staker, &1_000);
    client.stake(&staker, &1_000);

    client.unstake(&staker, &300);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, staker);
    assert_eq!(
        auths[0].1.function,
        AuthorizedFunction::Contract((
            client.address.clone(),
            Symbol::new(&env, "unstake"),
            (staker.clone(), 300i128).into_val(&env),
        ))
    );

    client.claim_rewards(&staker);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, staker);
    assert_eq!(
        auths[0].1.function,
        AuthorizedFunction::Contract((
            client.address.clone(),
            Symbol::new(&env, "claim_rewards"),
            (staker.clone(),).into_val(&env),
        ))
    );
}
