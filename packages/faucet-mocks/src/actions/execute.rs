use cosmwasm_std::{
    ensure, to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_utils::nonpayable;

use faucet_base::{
    error::ContractError,
    faucet::state::{CONFIG, OWNER, UNLOCK_TIME},
};

pub fn try_mint(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;

    let sender_address = &info.sender;
    let now_in_seconds = env.block.time.seconds();

    let unlock_time = UNLOCK_TIME
        .load(deps.storage, sender_address)
        .unwrap_or_default();

    ensure!(unlock_time <= now_in_seconds, ContractError::ClaimCooldown);

    let faucet_balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    ensure!(
        faucet_balance.balance >= config.withdrawal_amount,
        ContractError::InsufficientFaucetBalance
    );

    UNLOCK_TIME.save(
        deps.storage,
        sender_address,
        &(now_in_seconds + config.wait_time),
    )?;

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: sender_address.to_string(),
            amount: config.withdrawal_amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_attributes([("action", "try_mint")]))
}

pub fn try_set_withdrawal_amount(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    ensure!(!amount.is_zero(), ContractError::ZeroAmount);

    let mut config = CONFIG.load(deps.storage)?;
    config.withdrawal_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes([("action", "try_set_withdrawal_amount")]))
}

pub fn try_set_wait_time(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    wait_time: u64,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.wait_time = wait_time;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes([("action", "try_set_wait_time")]))
}

pub fn try_withdraw_all_balance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let faucet_balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    ensure!(!faucet_balance.balance.is_zero(), ContractError::ZeroAmount);

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: faucet_balance.balance,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_attributes([("action", "try_withdraw_all_balance")]))
}

pub fn try_update_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: Addr,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    OWNER.set(deps.branch(), Some(new_owner.clone()))?;

    Ok(Response::new().add_attributes([("action", "try_update_owner"), ("to", new_owner.as_str())]))
}
