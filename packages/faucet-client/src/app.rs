use cosmwasm_schema::cw_serde;

use faucet_base::{converters::amount_to_str, utils::shorten_address};

use crate::{
    eligibility::{format_duration, is_eligible, seconds_remaining},
    error::{ClientError, ClientResult},
    host::{FaucetHost, TxHandle},
    scheduler::{CancellationToken, Clock, Scheduler, Ticker},
    session::{ConnectOptions, WalletConnector, WalletSession},
    snapshot::{fetch_snapshot, SnapshotStore},
};

/// Delay between an accepted claim and the authoritative snapshot refresh
pub const REFRESH_DELAY: u64 = 3;
/// Bounded retries of the post-claim refresh; the submission itself is
/// never retried
pub const REFRESH_RETRIES: u8 = 5;
pub const RETRY_INTERVAL: u64 = 2;
pub const COUNTDOWN_PERIOD: u64 = 1;

pub const DEFAULT_DECIMALS: u8 = 6;

#[cw_serde]
pub struct ClientConfig {
    pub options: ConnectOptions,
    /// display precision of the dispensed token
    pub decimals: u8,
    /// silently restore a previous wallet session on startup
    pub restore_session: bool,
    pub refresh_delay: u64,
    pub refresh_retries: u8,
    pub retry_interval: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            options: ConnectOptions::default(),
            decimals: DEFAULT_DECIMALS,
            restore_session: true,
            refresh_delay: REFRESH_DELAY,
            refresh_retries: REFRESH_RETRIES,
            retry_interval: RETRY_INTERVAL,
        }
    }
}

#[cw_serde]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user notification drained by the embedding UI.
#[cw_serde]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

/// What changed during a `tick`.
#[cw_serde]
pub enum AppEvent {
    CountdownTick {
        countdown: String,
        seconds_remaining: u64,
    },
    SnapshotRefreshed,
    RefreshFailed {
        attempts_left: u8,
    },
}

/// Render-ready view of the application state.
#[cw_serde]
pub struct FaucetStatus {
    pub connected: bool,
    /// truncated address of the connected wallet
    pub address: Option<String>,
    pub loaded: bool,
    pub can_claim: bool,
    pub seconds_remaining: u64,
    pub countdown: String,
    pub withdrawal_amount: Option<String>,
    pub faucet_balance: Option<String>,
}

/// Deferred work drained by `tick`.
#[derive(Debug, Clone, PartialEq)]
enum AppTask {
    Refresh { attempts_left: u8 },
}

/// The claim application: wallet session, faucet snapshot, eligibility and
/// the claim flow, driven by a cooperative single-threaded event loop. The
/// wallet, the chain and the clock are injected capabilities.
pub struct FaucetApp<C: WalletConnector, K: Clock> {
    connector: C,
    clock: K,
    config: ClientConfig,
    session: WalletSession,
    store: SnapshotStore,
    scheduler: Scheduler<AppTask>,
    countdown: Option<Ticker>,
    countdown_token: CancellationToken,
    notifications: Vec<Notification>,
}

impl<C: WalletConnector, K: Clock> FaucetApp<C, K> {
    pub fn new(mut connector: C, clock: K, config: ClientConfig) -> Self {
        let mut session = WalletSession::Disconnected;

        if config.restore_session {
            if let Some(account) = connector.restore() {
                session = WalletSession::Connected(account);
            }
        }

        let mut app = Self {
            connector,
            clock,
            config,
            session,
            store: SnapshotStore::new(),
            scheduler: Scheduler::new(),
            countdown: None,
            countdown_token: CancellationToken::new(),
            notifications: vec![],
        };

        if app.session.is_connected() {
            app.start_countdown();
        }

        app
    }

    /// Establishes a wallet session and loads the first snapshot. A failed
    /// initial load keeps the session, the user may retry manually.
    pub fn connect(&mut self, host: &mut dyn FaucetHost) -> ClientResult<()> {
        let options = self.config.options.clone();

        let account = match self.connector.connect(&options) {
            Ok(account) => account,
            Err(err) => {
                self.notify_error("Failed to connect wallet");
                return Err(err);
            }
        };

        if self.session.address().is_some_and(|x| *x != account.address) {
            // switching addresses discards the snapshot of the previous one
            self.store.clear();
            self.scheduler.clear();
        }

        self.session = WalletSession::Connected(account);
        self.start_countdown();
        self.notify_success("Wallet connected");

        let _ = self.refresh(host);

        Ok(())
    }

    /// Always returns to `Disconnected`. The snapshot and any refresh
    /// pending for the dropped address are discarded.
    pub fn disconnect(&mut self) {
        self.connector.disconnect();
        self.session = WalletSession::Disconnected;
        self.store.clear();
        self.scheduler.clear();
        self.countdown_token.cancel();
        self.countdown = None;
        self.notify_success("Wallet disconnected");
    }

    /// Fetches a fresh snapshot. Read failures are surfaced and never
    /// retried automatically.
    pub fn refresh(&mut self, host: &mut dyn FaucetHost) -> ClientResult<()> {
        let address = self
            .session
            .address()
            .cloned()
            .ok_or(ClientError::NotConnected)?;

        let started_version = self.store.begin_fetch();

        match fetch_snapshot(host, &address) {
            Ok(snapshot) => {
                self.store
                    .apply_fetched(snapshot, started_version, self.clock.now_seconds());
                Ok(())
            }
            Err(err) => {
                self.notify_error("Failed to load faucet information");
                Err(err)
            }
        }
    }

    /// Submits the claim. The eligibility and balance pre-checks run
    /// against the local snapshot and are advisory only: a stale snapshot
    /// that still reads eligible lets the submission through, and the
    /// contract's own revert is the authoritative answer.
    pub fn claim(&mut self, host: &mut dyn FaucetHost) -> ClientResult<TxHandle> {
        let address = self
            .session
            .address()
            .cloned()
            .ok_or(ClientError::NotConnected)?;

        let snapshot = self
            .store
            .get()
            .cloned()
            .ok_or(ClientError::SnapshotNotLoaded)?;

        let now = self.clock.now_seconds();

        if !is_eligible(snapshot.unlock_time, now) {
            let remaining = seconds_remaining(snapshot.unlock_time, now);
            self.notify_error(format!(
                "It's required to wait {} before claiming again",
                format_duration(remaining)
            ));

            return Err(ClientError::CooldownActive { remaining });
        }

        if snapshot.faucet_balance < snapshot.withdrawal_amount {
            self.notify_error("Faucet balance is not enough to cover the withdrawal");

            return Err(ClientError::InsufficientFaucetBalance);
        }

        match host.submit_mint(&address) {
            Ok(tx_handle) => {
                self.notify_success("Claim transaction submitted");
                self.store
                    .apply_optimistic_unlock(now + snapshot.wait_time);
                self.scheduler.schedule_at(
                    now + self.config.refresh_delay,
                    AppTask::Refresh {
                        attempts_left: self.config.refresh_retries,
                    },
                );

                Ok(tx_handle)
            }
            Err(err) => {
                self.notify_error("Failed to claim tokens");
                Err(err)
            }
        }
    }

    /// Drains due scheduled work: post-claim refreshes and the one-second
    /// countdown recomputation.
    pub fn tick(&mut self, host: &mut dyn FaucetHost) -> Vec<AppEvent> {
        let now = self.clock.now_seconds();
        let mut events = vec![];

        for task in self.scheduler.pop_due(now) {
            match task {
                AppTask::Refresh { attempts_left } => {
                    let Some(address) = self.session.address().cloned() else {
                        continue;
                    };

                    let started_version = self.store.begin_fetch();

                    match fetch_snapshot(host, &address) {
                        Ok(snapshot) => {
                            self.store.apply_fetched(snapshot, started_version, now);
                            events.push(AppEvent::SnapshotRefreshed);
                        }
                        Err(_) if attempts_left != 0 => {
                            self.scheduler.schedule_at(
                                now + self.config.retry_interval,
                                AppTask::Refresh {
                                    attempts_left: attempts_left - 1,
                                },
                            );
                            events.push(AppEvent::RefreshFailed {
                                attempts_left: attempts_left - 1,
                            });
                        }
                        Err(_) => {
                            self.notify_error("Failed to load faucet information");
                            events.push(AppEvent::RefreshFailed { attempts_left: 0 });
                        }
                    }
                }
            }
        }

        let ticked = self
            .countdown
            .as_mut()
            .is_some_and(|ticker| ticker.poll(now) != 0);

        if ticked {
            let status = self.status();
            events.push(AppEvent::CountdownTick {
                countdown: status.countdown,
                seconds_remaining: status.seconds_remaining,
            });
        }

        events
    }

    /// Render-ready state derived from the session, the snapshot and the
    /// current time.
    pub fn status(&self) -> FaucetStatus {
        let now = self.clock.now_seconds();
        let snapshot = self.store.get();

        let unlock_time = snapshot.map(|x| x.unlock_time).unwrap_or_default();
        let remaining = seconds_remaining(unlock_time, now);

        FaucetStatus {
            connected: self.session.is_connected(),
            address: self.session.address().map(shorten_address),
            loaded: snapshot.is_some(),
            can_claim: self.session.is_connected()
                && snapshot.is_some_and(|x| {
                    is_eligible(x.unlock_time, now) && x.faucet_balance >= x.withdrawal_amount
                }),
            seconds_remaining: remaining,
            countdown: format_duration(remaining),
            withdrawal_amount: snapshot
                .map(|x| amount_to_str(x.withdrawal_amount, self.config.decimals)),
            faucet_balance: snapshot.map(|x| amount_to_str(x.faucet_balance, self.config.decimals)),
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn start_countdown(&mut self) {
        self.countdown_token.cancel();
        self.countdown_token = CancellationToken::new();
        self.countdown = Some(Ticker::new(
            COUNTDOWN_PERIOD,
            self.clock.now_seconds(),
            self.countdown_token.clone(),
        ));
    }

    fn notify_success(&mut self, text: impl ToString) {
        self.notifications.push(Notification {
            kind: NotificationKind::Success,
            text: text.to_string(),
        });
    }

    fn notify_error(&mut self, text: impl ToString) {
        self.notifications.push(Notification {
            kind: NotificationKind::Error,
            text: text.to_string(),
        });
    }
}
