#![no_std]
//! Crowdfunding ledger valued through a USD price feed.
//!
//! Anyone may [`FundMe::fund`] the contract with the configured token as long
//! as the contribution is worth at least [`MINIMUM_USD`]. The owner drains the
//! whole balance with [`FundMe::withdraw`] or [`FundMe::cheaper_withdraw`],
//! which also wipes every funder record.

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

mod errors;
mod events;
mod price_converter;
mod storage;

pub use errors::FundMeError;
pub use price_converter::{rescale, RoundData, USD_DECIMALS};

use events::Events;
use price_converter::PriceFeedClient;

/// Smallest accepted contribution: 50 USD with [`USD_DECIMALS`] decimals.
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(USD_DECIMALS);

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, token: Address) {
        let token_decimals = token::Client::new(&env, &token).decimals();
        storage::init(&env, &owner, &price_feed, &token, token_decimals);
    }

    /// Contribute `amount` base units of the funding token.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        funder.require_auth();

        let usd = Self::get_conversion_rate(env.clone(), amount)?;
        if usd < MINIMUM_USD {
            return Err(FundMeError::InsufficientValue);
        }

        let token = token::Client::new(&env, &storage::get_token(&env));
        token.transfer(&funder, &env.current_contract_address(), &amount);

        let previous = storage::get_amount_funded(&env, &funder);
        let total = previous
            .checked_add(amount)
            .ok_or(FundMeError::ArithmeticOverflow)?;
        storage::set_amount_funded(&env, &funder, total);

        // Records and the funder sequence are cleared together, so a zero
        // record means the funder is not tracked yet.
        if previous == 0 {
            storage::push_funder(&env, &funder);
        }

        #[cfg(feature = "logging")]
        soroban_sdk::log!(&env, "fund", funder, amount, total);

        Events::funded(&env, funder, amount, total);
        Ok(())
    }

    /// Send the whole balance to the owner and reset every funder record.
    ///
    /// The funder count is read back from storage on every iteration.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        require_owner(&env, &caller)?;

        let mut index = 0;
        while index < storage::get_funder_count(&env) {
            clear_funder(&env, index);
            index += 1;
        }
        storage::set_funder_count(&env, 0);

        Ok(payout(&env, index))
    }

    /// Same outcome as [`FundMe::withdraw`], reading the funder count once.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        require_owner(&env, &caller)?;

        let count = storage::get_funder_count(&env);
        for index in 0..count {
            clear_funder(&env, index);
        }
        storage::set_funder_count(&env, 0);

        Ok(payout(&env, count))
    }

    pub fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn get_price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    pub fn get_token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Version reported by the price feed.
    pub fn get_version(env: Env) -> u32 {
        PriceFeedClient::new(&env, &storage::get_price_feed(&env)).version()
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&env, &funder)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        if index >= storage::get_funder_count(&env) {
            return Err(FundMeError::FunderIndexOutOfBounds);
        }
        storage::get_funder(&env, index).ok_or(FundMeError::FunderIndexOutOfBounds)
    }

    pub fn get_funders(env: Env) -> Vec<Address> {
        storage::get_funders(&env)
    }

    /// USD value of `amount` token base units, with [`USD_DECIMALS`] decimals.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundMeError> {
        price_converter::get_conversion_rate(
            &env,
            &storage::get_price_feed(&env),
            amount,
            storage::get_token_decimals(&env),
        )
    }

    pub fn minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Funding token held by the contract.
    pub fn balance(env: Env) -> i128 {
        token::Client::new(&env, &storage::get_token(&env)).balance(&env.current_contract_address())
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), FundMeError> {
    caller.require_auth();
    if *caller != storage::get_owner(env) {
        return Err(FundMeError::Unauthorized);
    }
    Ok(())
}

fn clear_funder(env: &Env, index: u32) {
    if let Some(funder) = storage::get_funder(env, index) {
        storage::clear_amount_funded(env, &funder);
    }
    storage::remove_funder(env, index);
}

fn payout(env: &Env, funders_cleared: u32) -> i128 {
    let owner = storage::get_owner(env);
    let token = token::Client::new(env, &storage::get_token(env));
    let contract = env.current_contract_address();

    let amount = token.balance(&contract);
    if amount > 0 {
        token.transfer(&contract, &owner, &amount);
    }

    #[cfg(feature = "logging")]
    soroban_sdk::log!(env, "withdraw", owner, amount, funders_cleared);

    Events::withdrawn(env, owner, amount, funders_cleared);
    amount
}
