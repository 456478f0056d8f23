use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::errors::FundMeError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PriceFeed,
    Token,
    TokenDecimals,
    FunderCount,
    Funder(u32),
    AmountFunded(Address),
}

const DAY_IN_LEDGERS: u32 = 17_280;
/// Entries stay live for 30 days past their last write.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn init(env: &Env, owner: &Address, price_feed: &Address, token: &Address, token_decimals: u32) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Owner, owner);
    storage.set(&DataKey::PriceFeed, price_feed);
    storage.set(&DataKey::Token, token);
    storage.set(&DataKey::TokenDecimals, &token_decimals);
}

fn required<V>(env: &Env, key: &DataKey) -> V
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, FundMeError::NotInitialized))
}

pub fn get_owner(env: &Env) -> Address {
    required(env, &DataKey::Owner)
}

pub fn get_price_feed(env: &Env) -> Address {
    required(env, &DataKey::PriceFeed)
}

pub fn get_token(env: &Env) -> Address {
    required(env, &DataKey::Token)
}

pub fn get_token_decimals(env: &Env) -> u32 {
    required(env, &DataKey::TokenDecimals)
}

pub fn get_funder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FunderCount)
        .unwrap_or(0)
}

pub fn set_funder_count(env: &Env, count: u32) {
    let storage = env.storage().instance();
    storage.set(&DataKey::FunderCount, &count);
    storage.extend_ttl(PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_funder(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Funder(index))
}

/// Append `funder` at the end of the sequence.
pub fn push_funder(env: &Env, funder: &Address) {
    let index = get_funder_count(env);
    let key = DataKey::Funder(index);
    env.storage().persistent().set(&key, funder);
    bump(env, &key);
    set_funder_count(env, index + 1);
}

pub fn remove_funder(env: &Env, index: u32) {
    env.storage().persistent().remove(&DataKey::Funder(index));
}

pub fn get_funders(env: &Env) -> Vec<Address> {
    let mut funders = Vec::new(env);
    for index in 0..get_funder_count(env) {
        if let Some(funder) = get_funder(env, index) {
            funders.push_back(funder);
        }
    }
    funders
}

pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(funder.clone()))
        .unwrap_or(0)
}

pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}

/// Removing the entry reads back as zero through [`get_amount_funded`].
pub fn clear_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

/// Writes refresh the entry's TTL.
fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
