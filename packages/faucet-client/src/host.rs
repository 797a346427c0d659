use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::error::ClientResult;

/// Handle of an accepted claim transaction.
#[cw_serde]
pub struct TxHandle {
    pub tx_hash: String,
}

/// Access to the faucet contract on the test network: the read entry points
/// and the single state-changing call. Implementations wrap a node
/// connection or, in tests, a multi-test application.
pub trait FaucetHost {
    fn query_withdrawal_amount(&self) -> ClientResult<Uint128>;

    fn query_wait_time(&self) -> ClientResult<u64>;

    /// Zero means the user has never claimed
    fn query_unlock_time(&self, user: &Addr) -> ClientResult<u64>;

    fn query_faucet_balance(&self) -> ClientResult<Uint128>;

    fn query_token_address(&self) -> ClientResult<Addr>;

    fn submit_mint(&mut self, sender: &Addr) -> ClientResult<TxHandle>;
}
