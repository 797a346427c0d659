use cosmwasm_std::Addr;

use faucet_base::faucet::types::FaucetSnapshot;

use crate::{error::ClientResult, host::FaucetHost};

/// Reads the faucet parameters and the caller's unlock time in one pass.
/// The snapshot is assembled only if every read succeeds; any failure
/// surfaces as a single `Read` error and nothing is stored.
pub fn fetch_snapshot(host: &dyn FaucetHost, user: &Addr) -> ClientResult<FaucetSnapshot> {
    let token = host.query_token_address()?;
    let withdrawal_amount = host.query_withdrawal_amount()?;
    let wait_time = host.query_wait_time()?;
    let faucet_balance = host.query_faucet_balance()?;
    let unlock_time = host.query_unlock_time(user)?;

    Ok(FaucetSnapshot {
        token,
        withdrawal_amount,
        wait_time,
        faucet_balance,
        unlock_time,
    })
}

/// Snapshot holder with a monotonic version. A fetch records the version it
/// started from; a result from before a newer local write is rejected
/// instead of overwriting it.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshot: Option<FaucetSnapshot>,
    version: u64,
    fetched_at: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&FaucetSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn fetched_at(&self) -> u64 {
        self.fetched_at
    }

    /// Version observed when a fetch starts; pass it back to `apply_fetched`
    pub fn begin_fetch(&self) -> u64 {
        self.version
    }

    /// Stores a fetched snapshot unless the store advanced since the fetch
    /// started. Returns whether the snapshot was applied.
    pub fn apply_fetched(
        &mut self,
        snapshot: FaucetSnapshot,
        started_version: u64,
        now: u64,
    ) -> bool {
        if started_version < self.version {
            return false;
        }

        self.snapshot = Some(snapshot);
        self.version += 1;
        self.fetched_at = now;

        true
    }

    /// Locally advances the unlock time after an accepted claim, ahead of
    /// the authoritative refetch.
    pub fn apply_optimistic_unlock(&mut self, unlock_time: u64) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.unlock_time = unlock_time;
            self.version += 1;
        }
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
        self.version += 1;
        self.fetched_at = 0;
    }
}
