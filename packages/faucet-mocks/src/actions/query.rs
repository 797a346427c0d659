use cosmwasm_std::{Addr, Deps, Env, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

use faucet_base::faucet::{
    msg::UnlockTimeResponse,
    state::{CONFIG, OWNER, UNLOCK_TIME},
    types::Config,
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_withdrawal_amount(deps: Deps, _env: Env) -> StdResult<Uint128> {
    Ok(CONFIG.load(deps.storage)?.withdrawal_amount)
}

pub fn query_wait_time(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.wait_time)
}

pub fn query_unlock_time(deps: Deps, _env: Env, user: String) -> StdResult<UnlockTimeResponse> {
    Ok(UnlockTimeResponse {
        unlock_time: UNLOCK_TIME
            .may_load(deps.storage, &deps.api.addr_validate(&user)?)?
            .unwrap_or_default(),
    })
}

pub fn query_faucet_balance(deps: Deps, env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;

    let BalanceResponse { balance } = deps.querier.query_wasm_smart(
        config.token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    Ok(balance)
}

pub fn query_token_address(deps: Deps, _env: Env) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.token)
}

/// query owner
pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Addr> {
    let owner = OWNER.get(deps)?;
    Ok(owner.unwrap_or_else(|| Addr::unchecked("")))
}
