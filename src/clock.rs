//! Time sources for the timestamp plausibility check

use chrono::{DateTime, Utc};

/// Source of the current time
///
/// The decoder asks its clock for the current time once per decode, to
/// decide whether a timestamp lies too far in the future.
pub trait Clock {
    /// The current time
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Reads the system wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Always reports the same instant
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to a unix timestamp in seconds.
    ///
    /// Returns `None` if chrono can't represent the timestamp.
    pub fn from_timestamp(unix_seconds: i64) -> Option<FixedClock> {
        DateTime::from_timestamp(unix_seconds, 0).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
