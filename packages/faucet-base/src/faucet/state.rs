use cosmwasm_std::Addr;
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use crate::faucet::types::Config;

pub const CONTRACT_NAME: &str = "crates.io:test-token-faucet";

pub const DEFAULT_WITHDRAWAL_AMOUNT: u128 = 10_000_000;
pub const DEFAULT_WAIT_TIME: u64 = 3_600;

pub const CONFIG: Item<Config> = Item::new("config");

pub const UNLOCK_TIME: Map<&Addr, u64> = Map::new("unlock time");

pub const OWNER: Admin = Admin::new("owner");
