use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::error::ClientResult;

/// Options forwarded to the wallet connector on connect.
#[cw_serde]
pub struct ConnectOptions {
    pub app_name: String,
    pub app_url: String,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            app_name: "test-token-faucet".to_string(),
            app_url: "localhost".to_string(),
        }
    }
}

#[cw_serde]
pub struct WalletAccount {
    pub address: Addr,
}

/// Wallet capability provided by the embedding application. The client
/// never talks to a wallet extension directly.
pub trait WalletConnector {
    /// Establishes a wallet session; a user cancel is an error
    fn connect(&mut self, options: &ConnectOptions) -> ClientResult<WalletAccount>;

    /// Silently restores a previously established session, if any
    fn restore(&mut self) -> Option<WalletAccount>;

    fn disconnect(&mut self);
}

/// Wallet connection state machine.
#[cw_serde]
#[derive(Default)]
pub enum WalletSession {
    #[default]
    Disconnected,
    Connected(WalletAccount),
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn address(&self) -> Option<&Addr> {
        match self {
            Self::Connected(account) => Some(&account.address),
            Self::Disconnected => None,
        }
    }
}
