use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Returns a process-unique token.
///
/// Seconds and microseconds are hex-encoded like PHP's `uniqid`; the counter
/// suffix keeps tokens distinct when several are minted within one microsecond.
#[must_use]
pub fn next_unique_token() -> String {
    let now = Utc::now();
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "{:08x}{:05x}{:x}",
        now.timestamp(),
        now.timestamp_subsec_micros(),
        sequence
    )
}
