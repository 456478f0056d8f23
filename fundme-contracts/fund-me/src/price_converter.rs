use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::errors::FundMeError;

/// Contributions are valued in USD with this many decimals.
pub const USD_DECIMALS: u32 = 18;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u32,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u32,
}

/// Read side of a Chainlink-style aggregator.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_round_data(env: Env) -> RoundData;
    fn decimals(env: Env) -> u32;
    fn version(env: Env) -> u32;
}

/// Latest answer of the feed together with the decimals it is expressed in.
pub fn get_price(env: &Env, price_feed: &Address) -> Result<(i128, u32), FundMeError> {
    let feed = PriceFeedClient::new(env, price_feed);
    let round = feed.latest_round_data();
    if round.answer <= 0 {
        return Err(FundMeError::InvalidPrice);
    }
    Ok((round.answer, feed.decimals()))
}

/// USD value of `amount` token base units, with [`USD_DECIMALS`] decimals.
pub fn get_conversion_rate(
    env: &Env,
    price_feed: &Address,
    amount: i128,
    token_decimals: u32,
) -> Result<i128, FundMeError> {
    let (price, feed_decimals) = get_price(env, price_feed)?;
    let value = amount
        .checked_mul(price)
        .ok_or(FundMeError::ArithmeticOverflow)?;
    rescale(value, token_decimals.saturating_add(feed_decimals), USD_DECIMALS)
}

/// Move `value` from `from` decimals to `to` decimals in a single step.
pub fn rescale(value: i128, from: u32, to: u32) -> Result<i128, FundMeError> {
    if from >= to {
        // A divisor beyond i128 truncates every value to zero
        match 10i128.checked_pow(from - to) {
            Some(divisor) => Ok(value / divisor),
            None => Ok(0),
        }
    } else {
        value
            .checked_mul(pow10(to - from)?)
            .ok_or(FundMeError::ArithmeticOverflow)
    }
}

fn pow10(exp: u32) -> Result<i128, FundMeError> {
    10i128
        .checked_pow(exp)
        .ok_or(FundMeError::ArithmeticOverflow)
}
