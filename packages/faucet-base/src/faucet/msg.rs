use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::faucet::types::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// cw20 token dispensed by the faucet
    pub token: String,
    pub withdrawal_amount: Uint128,
    /// claim cooldown in seconds
    pub wait_time: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Claim the withdrawal amount once per cooldown window
    Mint {},

    SetWithdrawalAmount { amount: Uint128 },

    SetWaitTime { wait_time: u64 },

    WithdrawAllBalance { recipient: String },

    UpdateOwner { owner: Addr },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(Uint128)]
    WithdrawalAmount {},

    #[returns(u64)]
    WaitTime {},

    /// Zero unlock time means the user has never claimed
    #[returns(UnlockTimeResponse)]
    UnlockTime { user: String },

    #[returns(Uint128)]
    FaucetBalance {},

    #[returns(Addr)]
    TokenAddress {},

    #[returns(Addr)]
    Owner {},
}

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
pub struct UnlockTimeResponse {
    pub unlock_time: u64,
}
