use soroban_sdk::{symbol_short, Address, Env};

pub struct Events;

impl Events {
    pub fn funded(env: &Env, funder: Address, amount: i128, total_funded: i128) {
        env.events()
            .publish((symbol_short!("funded"), funder), (amount, total_funded));
    }

    pub fn withdrawn(env: &Env, owner: Address, amount: i128, funders_cleared: u32) {
        env.events()
            .publish((symbol_short!("withdrawn"), owner), (amount, funders_cleared));
    }
}
