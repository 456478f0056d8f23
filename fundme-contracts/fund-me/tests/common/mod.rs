//! Local deployment fixture shared by the behavioral suites.
//!
//! Mirrors what a fresh development deployment looks like: a mock aggregator
//! answering 2000 USD, a Stellar asset used as the funding token, and `FundMe`
//! owned by the deployer.

#![allow(dead_code)]

use fund_me::{FundMe, FundMeClient};
use mock_price_feed::{MockV3Aggregator, MockV3AggregatorClient, DECIMALS, INITIAL_ANSWER};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

/// One whole funding token (Stellar assets carry 7 decimals).
pub const SEND_VALUE: i128 = 10_000_000;

/// Tokens minted to every generated account.
pub const STARTING_BALANCE: i128 = 100 * SEND_VALUE;

pub struct Fixture {
    pub env: Env,
    pub deployer: Address,
    pub fund_me: FundMeClient<'static>,
    pub price_feed: MockV3AggregatorClient<'static>,
    pub token: token::Client<'static>,
    token_admin: token::StellarAssetClient<'static>,
}

impl Fixture {
    pub fn deploy() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let token_admin = Address::generate(&env);
        let token_id = env.register_stellar_asset_contract_v2(token_admin).address();
        let token = token::Client::new(&env, &token_id);
        let token_admin = token::StellarAssetClient::new(&env, &token_id);

        let feed_id = env.register(MockV3Aggregator, (DECIMALS, INITIAL_ANSWER));
        let price_feed = MockV3AggregatorClient::new(&env, &feed_id);

        let deployer = Address::generate(&env);
        token_admin.mint(&deployer, &STARTING_BALANCE);

        let fund_me_id = env.register(FundMe, (deployer.clone(), feed_id, token_id));
        let fund_me = FundMeClient::new(&env, &fund_me_id);

        Fixture {
            env,
            deployer,
            fund_me,
            price_feed,
            token,
            token_admin,
        }
    }

    /// A fresh account holding [`STARTING_BALANCE`] tokens.
    pub fn account(&self) -> Address {
        let account = Address::generate(&self.env);
        self.token_admin.mint(&account, &STARTING_BALANCE);
        account
    }

    pub fn accounts(&self, count: usize) -> Vec<Address> {
        (0..count).map(|_| self.account()).collect()
    }

    pub fn balance_of(&self, who: &Address) -> i128 {
        self.token.balance(who)
    }

    pub fn contract_balance(&self) -> i128 {
        self.token.balance(&self.fund_me.address)
    }
}
