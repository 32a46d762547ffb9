//! Time-related utilities with clock abstraction for testability.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current instant (UTC)
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given instant
    pub fn new(fixed_time: DateTime<Utc>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.fixed_time
    }
}

/// Manually driven clock for testing expiry.
///
/// Holds the current instant as Unix milliseconds, so it can be shared behind an
/// `Arc` and advanced from the test body while other components read it.
#[derive(Debug)]
pub struct ManualClock {
    now_millis: AtomicI64,
}

impl ManualClock {
    /// Create a new manual clock starting at the given instant
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now_millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// Move the clock forward by `delta`
    pub fn advance(&self, delta: TimeDelta) {
        self.now_millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }

    /// Jump the clock to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        self.now_millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis.load(Ordering::SeqCst))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Format an instant as RFC 3339 in UTC with millisecond precision (e.g. `2023-11-14T22:13:20.000Z`)
pub fn to_utc_rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
