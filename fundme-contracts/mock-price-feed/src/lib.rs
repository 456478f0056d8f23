#![no_std]
//! Chainlink-style `MockV3Aggregator` for local deployments.
//!
//! Development networks have no live oracle, so the deployment fixture
//! registers this contract instead and points `fund-me` at it. The answer can
//! be moved with [`MockV3Aggregator::update_answer`] to exercise price changes.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Env, String};

/// Decimals the local fixture deploys the aggregator with.
pub const DECIMALS: u32 = 8;
/// 2000 USD per whole token, expressed with [`DECIMALS`] decimals.
pub const INITIAL_ANSWER: i128 = 200_000_000_000;

const DESCRIPTION: &str = "v0.6/tests/MockV3Aggregator.sol";
const VERSION: u32 = 0;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AggregatorError {
    RoundNotFound = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u32,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u32,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Decimals,
    LatestRound,
    Round(u32),
}

#[contract]
pub struct MockV3Aggregator;

#[contractimpl]
impl MockV3Aggregator {
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer);
    }

    /// Publish a new answer as the next round, stamped with the ledger time.
    pub fn update_answer(env: Env, answer: i128) {
        let round_id = Self::latest_round(env.clone()) + 1;
        let now = env.ledger().timestamp();
        store_round(&env, round_id, answer, now, now);
    }

    /// Overwrite a specific round and make it the latest one.
    pub fn update_round_data(env: Env, round_id: u32, answer: i128, timestamp: u64, started_at: u64) {
        store_round(&env, round_id, answer, timestamp, started_at);
    }

    pub fn latest_round_data(env: Env) -> RoundData {
        let round_id = Self::latest_round(env.clone());
        load_round(&env, round_id).unwrap_or(RoundData {
            round_id,
            answer: 0,
            started_at: 0,
            updated_at: 0,
            answered_in_round: round_id,
        })
    }

    pub fn get_round_data(env: Env, round_id: u32) -> Result<RoundData, AggregatorError> {
        load_round(&env, round_id).ok_or(AggregatorError::RoundNotFound)
    }

    pub fn latest_answer(env: Env) -> i128 {
        Self::latest_round_data(env).answer
    }

    pub fn latest_timestamp(env: Env) -> u64 {
        Self::latest_round_data(env).updated_at
    }

    pub fn latest_round(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::LatestRound).unwrap_or(0)
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Decimals).unwrap_or(DECIMALS)
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, DESCRIPTION)
    }
}

fn store_round(env: &Env, round_id: u32, answer: i128, timestamp: u64, started_at: u64) {
    let data = RoundData {
        round_id,
        answer,
        started_at,
        updated_at: timestamp,
        answered_in_round: round_id,
    };
    env.storage().instance().set(&DataKey::Round(round_id), &data);
    env.storage().instance().set(&DataKey::LatestRound, &round_id);
}

fn load_round(env: &Env, round_id: u32) -> Option<RoundData> {
    env.storage().instance().get(&DataKey::Round(round_id))
}

mod test;
