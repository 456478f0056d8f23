#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Ledger, Env, String};

fn deploy(env: &Env) -> MockV3AggregatorClient<'_> {
    let contract_id = env.register(MockV3Aggregator, (DECIMALS, INITIAL_ANSWER));
    MockV3AggregatorClient::new(env, &contract_id)
}

#[test]
fn test_constructor_publishes_first_round() {
    let env = Env::default();
    let client = deploy(&env);

    assert_eq!(client.decimals(), 8);
    assert_eq!(client.latest_round(), 1);
    assert_eq!(client.latest_answer(), INITIAL_ANSWER);

    let round = client.latest_round_data();
    assert_eq!(round.round_id, 1);
    assert_eq!(round.answered_in_round, 1);
    assert_eq!(round.answer, INITIAL_ANSWER);
}

#[test]
fn test_update_answer_advances_round() {
    let env = Env::default();
    let client = deploy(&env);

    env.ledger().set_timestamp(1_700_000_000);
    client.update_answer(&150_000_000_000);

    assert_eq!(client.latest_round(), 2);
    assert_eq!(client.latest_answer(), 150_000_000_000);
    assert_eq!(client.latest_timestamp(), 1_700_000_000);

    // History of the first round is kept
    let first = client.get_round_data(&1);
    assert_eq!(first.answer, INITIAL_ANSWER);
}

#[test]
fn test_update_round_data_overrides_latest() {
    let env = Env::default();
    let client = deploy(&env);

    client.update_round_data(&7, &123, &500, &400);

    let latest = client.latest_round_data();
    assert_eq!(latest.round_id, 7);
    assert_eq!(latest.answer, 123);
    assert_eq!(latest.updated_at, 500);
    assert_eq!(latest.started_at, 400);
}

#[test]
fn test_unknown_round_is_rejected() {
    let env = Env::default();
    let client = deploy(&env);

    let result = client.try_get_round_data(&42);
    assert_eq!(result, Err(Ok(AggregatorError::RoundNotFound)));
}

#[test]
fn test_version_and_description() {
    let env = Env::default();
    let client = deploy(&env);

    assert_eq!(client.version(), 0);
    assert_eq!(
        client.description(),
        String::from_str(&env, "v0.6/tests/MockV3Aggregator.sol")
    );
}
