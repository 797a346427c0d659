use thiserror::Error;

/// `Read` and `Submit` are the only remote failure kinds; everything else
/// is a local precondition rejected before any call leaves the client.
#[derive(Error, Debug, PartialEq)]
pub enum ClientError {
    // ------------------------------ remote ----------------------------------------
    #[error("Failed to read faucet state: {reason}")]
    Read { reason: String },

    #[error("Claim transaction rejected: {reason}")]
    Submit { reason: String },

    // ------------------------------ local ----------------------------------------
    #[error("Wallet connection rejected: {reason}")]
    WalletRejected { reason: String },

    #[error("Wallet is not connected!")]
    NotConnected,

    #[error("Faucet information is not loaded!")]
    SnapshotNotLoaded,

    #[error("It's required to wait {remaining} more seconds before claiming again!")]
    CooldownActive { remaining: u64 },

    #[error("Faucet balance is not enough to cover the withdrawal!")]
    InsufficientFaucetBalance,
}

pub type ClientResult<T> = Result<T, ClientError>;
