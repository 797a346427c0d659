use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct Config {
    /// cw20 token dispensed by the faucet
    pub token: Addr,
    pub withdrawal_amount: Uint128,
    /// claim cooldown in seconds
    pub wait_time: u64,
}

/// Point-in-time read of the faucet parameters and the caller's unlock time.
/// Immutable once fetched and replaced wholesale on each refetch.
#[cw_serde]
pub struct FaucetSnapshot {
    pub token: Addr,
    pub withdrawal_amount: Uint128,
    pub wait_time: u64,
    pub faucet_balance: Uint128,
    /// UNIX timestamp after which the user may claim again, zero if the
    /// user has never claimed
    pub unlock_time: u64,
}
