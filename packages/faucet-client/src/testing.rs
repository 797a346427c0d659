use std::{cell::Cell, rc::Rc};

use cosmwasm_std::{Addr, Uint128};

use crate::{
    error::{ClientError, ClientResult},
    host::{FaucetHost, TxHandle},
    scheduler::Clock,
    session::{ConnectOptions, WalletAccount, WalletConnector},
};

/// Manually driven clock; clones share the same time source so a test
/// harness and the client under test always agree on the current time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn advance(&self, seconds: u64) {
        self.0.set(self.0.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> u64 {
        self.0.get()
    }
}

/// Wallet connector stub: connects to a fixed address, rejects, or
/// restores a previous session.
#[derive(Debug)]
pub struct MockConnector {
    address: Option<Addr>,
    restorable: bool,
}

impl MockConnector {
    pub fn new(address: &str) -> Self {
        Self {
            address: Some(Addr::unchecked(address)),
            restorable: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            address: None,
            restorable: false,
        }
    }

    pub fn with_restorable_session(address: &str) -> Self {
        Self {
            address: Some(Addr::unchecked(address)),
            restorable: true,
        }
    }
}

impl WalletConnector for MockConnector {
    fn connect(&mut self, _options: &ConnectOptions) -> ClientResult<WalletAccount> {
        match &self.address {
            Some(address) => Ok(WalletAccount {
                address: address.clone(),
            }),
            None => Err(ClientError::WalletRejected {
                reason: "user rejected the connection".to_string(),
            }),
        }
    }

    fn restore(&mut self) -> Option<WalletAccount> {
        if !self.restorable {
            return None;
        }

        self.address.as_ref().map(|address| WalletAccount {
            address: address.clone(),
        })
    }

    fn disconnect(&mut self) {}
}

/// In-memory faucet host serving canned values. Reads and submissions can
/// be told to fail to drive the error paths without a chain.
#[derive(Debug)]
pub struct StubHost {
    pub token: Addr,
    pub withdrawal_amount: Uint128,
    pub wait_time: u64,
    pub faucet_balance: Uint128,
    pub unlock_time: u64,
    pub reject_submit: bool,
    pub submissions: u64,
    failing_reads: Cell<u64>,
}

impl StubHost {
    pub fn new(withdrawal_amount: u128, wait_time: u64, faucet_balance: u128) -> Self {
        Self {
            token: Addr::unchecked("wasm1_token"),
            withdrawal_amount: Uint128::new(withdrawal_amount),
            wait_time,
            faucet_balance: Uint128::new(faucet_balance),
            unlock_time: 0,
            reject_submit: false,
            submissions: 0,
            failing_reads: Cell::new(0),
        }
    }

    /// Makes the next `amount` read calls fail. A failed read aborts the
    /// whole snapshot fetch, so this is also the amount of failed fetches.
    pub fn fail_next_reads(&mut self, amount: u64) {
        self.failing_reads.set(amount);
    }

    fn read<T>(&self, value: T) -> ClientResult<T> {
        let left = self.failing_reads.get();

        if left > 0 {
            self.failing_reads.set(left - 1);

            return Err(ClientError::Read {
                reason: "node is unreachable".to_string(),
            });
        }

        Ok(value)
    }
}

impl FaucetHost for StubHost {
    fn query_withdrawal_amount(&self) -> ClientResult<Uint128> {
        self.read(self.withdrawal_amount)
    }

    fn query_wait_time(&self) -> ClientResult<u64> {
        self.read(self.wait_time)
    }

    fn query_unlock_time(&self, _user: &Addr) -> ClientResult<u64> {
        self.read(self.unlock_time)
    }

    fn query_faucet_balance(&self) -> ClientResult<Uint128> {
        self.read(self.faucet_balance)
    }

    fn query_token_address(&self) -> ClientResult<Addr> {
        self.read(self.token.clone())
    }

    fn submit_mint(&mut self, _sender: &Addr) -> ClientResult<TxHandle> {
        if self.reject_submit {
            return Err(ClientError::Submit {
                reason: "Come back later!".to_string(),
            });
        }

        self.submissions += 1;

        Ok(TxHandle {
            tx_hash: format!("{:064x}", self.submissions),
        })
    }
}
