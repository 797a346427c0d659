use itertools::Itertools;

use faucet_base::utils::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

pub const READY_TO_CLAIM: &str = "Ready to claim!";

/// A claim is allowed exactly when the unlock timestamp is not in the future.
pub fn is_eligible(unlock_time: u64, now: u64) -> bool {
    unlock_time <= now
}

pub fn seconds_remaining(unlock_time: u64, now: u64) -> u64 {
    unlock_time.saturating_sub(now)
}

/// Renders a countdown as `{h}h {m}m {s}s` dropping leading zero units.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return READY_TO_CLAIM.to_string();
    }

    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;

    let units = [(hours, "h"), (minutes, "m"), (seconds, "s")];
    let leading_zeros = units.iter().take_while(|(value, _)| *value == 0).count();

    units[leading_zeros..]
        .iter()
        .map(|(value, unit)| format!("{value}{unit}"))
        .join(" ")
}
