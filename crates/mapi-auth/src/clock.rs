//! Timestamp sources for the signed strategy.

use std::fmt;

use chrono::NaiveDateTime;

/// Source of the wall-clock time stamped into `X-Mcash-Timestamp`.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current time, without a timezone.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock.
///
/// No timezone normalization is applied: a client and server in different
/// timezones will disagree on the timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
