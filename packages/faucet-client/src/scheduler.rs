use std::{
    cell::Cell,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Wall-clock capability. Injected everywhere time is read so tests can
/// simulate the passage of time without real delays.
pub trait Clock {
    fn now_seconds(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Cooperative cancellation flag shared between a task owner and the timer
/// holding it. The client is single-threaded, one clone per side is enough.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Fixed-period interval timer polled from the event loop.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: u64,
    next_due: u64,
    token: CancellationToken,
}

impl Ticker {
    pub fn new(period: u64, now: u64, token: CancellationToken) -> Self {
        Self {
            period,
            next_due: now + period,
            token,
        }
    }

    /// Amount of periods elapsed since the last poll, zero once cancelled.
    pub fn poll(&mut self, now: u64) -> u64 {
        if self.token.is_cancelled() || now < self.next_due {
            return 0;
        }

        let elapsed = 1 + (now - self.next_due) / self.period;
        self.next_due += elapsed * self.period;

        elapsed
    }
}

#[derive(Debug)]
struct Scheduled<T> {
    due: u64,
    task: T,
}

/// Ordered queue of deferred tasks drained cooperatively with `pop_due`.
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self { tasks: vec![] }
    }

    pub fn schedule_at(&mut self, due: u64, task: T) {
        let position = self.tasks.iter().take_while(|x| x.due <= due).count();
        self.tasks.insert(position, Scheduled { due, task });
    }

    /// Removes and returns every task whose due time has passed, in order.
    pub fn pop_due(&mut self, now: u64) -> Vec<T> {
        let due_amount = self.tasks.iter().take_while(|x| x.due <= now).count();

        self.tasks.drain(..due_amount).map(|x| x.task).collect()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
