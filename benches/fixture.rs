//! Funded `FundMe` deployments shared by the runner and the Criterion benches.

#![allow(dead_code)]

use fund_me::{FundMe, FundMeClient};
use mock_price_feed::{MockV3Aggregator, DECIMALS, INITIAL_ANSWER};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

pub const SEND_VALUE: i128 = 10_000_000;

pub struct Funded {
    pub env: Env,
    pub owner: Address,
    pub fund_me: FundMeClient<'static>,
}

/// Deploy the contracts and fund them from `funders` distinct accounts.
pub fn funded_contract(funders: u32) -> Funded {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let token_admin = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(token_admin).address();
    let minter = token::StellarAssetClient::new(&env, &token_id);

    let feed_id = env.register(MockV3Aggregator, (DECIMALS, INITIAL_ANSWER));
    let owner = Address::generate(&env);
    let contract_id = env.register(FundMe, (owner.clone(), feed_id, token_id));
    let fund_me = FundMeClient::new(&env, &contract_id);

    for _ in 0..funders {
        let funder = Address::generate(&env);
        minter.mint(&funder, &SEND_VALUE);
        fund_me.fund(&funder, &SEND_VALUE);
    }

    Funded { env, owner, fund_me }
}

#[derive(Clone, Copy, Debug)]
pub enum Variant {
    Standard,
    Cheaper,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::Cheaper];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Standard => "withdraw",
            Variant::Cheaper => "cheaper_withdraw",
        }
    }

    pub fn run(&self, funded: &Funded) -> i128 {
        match self {
            Variant::Standard => funded.fund_me.withdraw(&funded.owner),
            Variant::Cheaper => funded.fund_me.cheaper_withdraw(&funded.owner),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Cost {
    pub cpu_instructions: u64,
    pub memory_bytes: u64,
}

/// Metered host cost of a single withdrawal with `funders` tracked funders.
pub fn measure(variant: Variant, funders: u32) -> Cost {
    let funded = funded_contract(funders);
    let mut budget = funded.env.cost_estimate().budget();
    budget.reset_unlimited();
    budget.reset_tracker();

    variant.run(&funded);

    Cost {
        cpu_instructions: budget.cpu_instruction_cost(),
        memory_bytes: budget.memory_bytes_cost(),
    }
}
