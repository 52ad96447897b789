#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake { amount: u64 },
    ClaimRewards,
    Advance { secs: u16 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    reward_rate: u32,
    duration: u32,
    actions: Vec<FuzzAction>,
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();

    let staking_asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let rewards_asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let init = client.try_initialize(
        &owner,
        &staking_asset,
        &rewards_asset,
        &i128::from(input.reward_rate),
        &u64::from(input.duration),
    );
    if init.is_err() {
        // Zero rate or zero duration is rejected up front.
        return;
    }
    StellarAssetClient::new(&env, &rewards_asset).mint(&contract_id, &i128::MAX);

    let mut users = Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &staking_asset).mint(&user, &i128::from(u64::MAX));
        users.push(user);
    }

    let stake_token = TokenClient::new(&env, &staking_asset);
    let mut now = env.ledger().timestamp();
    let mut last_rpt = 0i128;

    // Errors are expected for out-of-range amounts; any panic or broken
    // invariant is a finding.
    for (i, action) in input.actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &i128::from(amount));
            }
            FuzzAction::Unstake { amount } => {
                let _ = client.try_unstake(caller, &i128::from(amount));
            }
            FuzzAction::ClaimRewards => {
                let _ = client.try_claim_rewards(caller);
            }
            FuzzAction::Advance { secs } => {
                now += u64::from(secs);
                env.ledger().set_timestamp(now);
            }
        }

        let pool = client.get_pool_state();
        let staked: i128 = users
            .iter()
            .filter_map(|u| client.get_staker_state(u))
            .map(|a| a.staked_amount)
            .sum();
        assert_eq!(pool.total_staked, staked);
        assert_eq!(stake_token.balance(&contract_id), pool.total_staked);
        assert!(pool.reward_per_token_stored >= last_rpt);
        assert!(pool.last_update_time <= pool.period_finish);
        last_rpt = pool.reward_per_token_stored;
    }
});
