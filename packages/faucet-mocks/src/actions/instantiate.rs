use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use faucet_base::{
    error::ContractError,
    faucet::{
        msg::InstantiateMsg,
        state::{CONFIG, CONTRACT_NAME, OWNER},
        types::Config,
    },
};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    if msg.withdrawal_amount.is_zero() {
        Err(ContractError::ZeroAmount)?;
    }

    let token = deps.api.addr_validate(&msg.token)?;

    OWNER.set(deps.branch(), Some(info.sender))?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            token,
            withdrawal_amount: msg.withdrawal_amount,
            wait_time: msg.wait_time,
        },
    )?;

    Ok(Response::new().add_attributes([("action", "try_instantiate")]))
}
