use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

impl From<StdError> for ContractError {
    fn from(std_error: StdError) -> Self {
        Self::CustomError {
            val: std_error.to_string(),
        }
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}

pub fn parse_err(err: anyhow::Error) -> StdError {
    let context = format!("{}", err);
    let source = err.source().map(|x| x.to_string()).unwrap_or_default();

    StdError::GenericErr {
        msg: format!("{}\n{}", context, source),
    }
}

/// Never is a placeholder to ensure we don't return any errors
#[derive(Error, Debug)]
pub enum Never {}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },

    // ------------------------------ common ----------------------------------------
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Parsing previous version error!")]
    ParsingPrevVersion,

    #[error("Parsing new version error!")]
    ParsingNewVersion,

    #[error("Msg version is not equal contract new version!")]
    ImproperMsgVersion,

    #[error("Amount can not be equal zero!")]
    ZeroAmount,

    // ------------------------------ faucet ----------------------------------------
    #[error("Come back later!")]
    ClaimCooldown,

    #[error("Faucet balance is not enough to cover the withdrawal!")]
    InsufficientFaucetBalance,
}
