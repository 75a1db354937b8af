//! ID and timestamp generation utilities
//!
//! Provides fresh entity identifiers and the assignment clock.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Last timestamp handed out by `assignment_timestamp`, in ns since the epoch
static LAST_ASSIGNMENT_NANOS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Generate a fresh 128-bit random identifier
pub fn new_entity_id() -> Uuid {
    Uuid::new_v4()
}

/// Current UTC time for a new label assignment.
///
/// Strictly increasing within the process: when the wall clock has not
/// advanced past the previous value, the previous value plus one
/// nanosecond is returned instead.
pub fn assignment_timestamp() -> DateTime<Utc> {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX - 1);

    let mut last = LAST_ASSIGNMENT_NANOS.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last.saturating_add(1) };
        match LAST_ASSIGNMENT_NANOS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return DateTime::from_timestamp_nanos(next),
            Err(observed) => last = observed,
        }
    }
}
