use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

pub const START: u64 = 1_000;

pub struct Pool {
    pub env: Env,
    pub client: StakingRewardsContractClient<'static>,
    pub owner: Address,
    pub staking_asset: Address,
    pub rewards_asset: Address,
}

impl Pool {
    pub fn new(reward_rate: i128, duration: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START);

        let staking_asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let rewards_asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let contract_id = env.register(StakingRewardsContract, ());
        let client = StakingRewardsContractClient::new(&env, &contract_id);

        let owner = Address::generate(&env);
        client.initialize(&owner, &staking_asset, &rewards_asset, &reward_rate, &duration);

        StellarAssetClient::new(&env, &rewards_asset).mint(&contract_id, &i128::from(u64::MAX));

        Self {
            env,
            client,
            owner,
            staking_asset,
            rewards_asset,
        }
    }

    pub fn staker(&self, balance: i128) -> Address {
        let staker = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.staking_asset).mint(&staker, &balance);
        staker
    }

    pub fn at(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn stake_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.staking_asset).balance(who)
    }

    pub fn reward_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.rewards_asset).balance(who)
    }
}
