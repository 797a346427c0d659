use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use faucet_base::{
    error::ContractError,
    faucet::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

use crate::actions::{
    execute as e, instantiate::try_instantiate, migrate::migrate_contract, query as q,
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {} => e::try_mint(deps, env, info),

        ExecuteMsg::SetWithdrawalAmount { amount } => {
            e::try_set_withdrawal_amount(deps, env, info, amount)
        }

        ExecuteMsg::SetWaitTime { wait_time } => e::try_set_wait_time(deps, env, info, wait_time),

        ExecuteMsg::WithdrawAllBalance { recipient } => {
            e::try_withdraw_all_balance(deps, env, info, recipient)
        }

        ExecuteMsg::UpdateOwner { owner } => e::try_update_owner(deps, env, info, owner),
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::WithdrawalAmount {} => to_json_binary(&q::query_withdrawal_amount(deps, env)?),

        QueryMsg::WaitTime {} => to_json_binary(&q::query_wait_time(deps, env)?),

        QueryMsg::UnlockTime { user } => to_json_binary(&q::query_unlock_time(deps, env, user)?),

        QueryMsg::FaucetBalance {} => to_json_binary(&q::query_faucet_balance(deps, env)?),

        QueryMsg::TokenAddress {} => to_json_binary(&q::query_token_address(deps, env)?),

        QueryMsg::Owner {} => to_json_binary(&q::query_owner(deps, env)?),
    }
}

/// Used for contract migration
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
