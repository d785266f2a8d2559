//! Sources of the current instant.

use chrono::{DateTime, Utc};

/// The host could not supply the current time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Clock unavailable: {0}")]
pub struct ClockError(pub String);

/// Supplies "now" to the converter, so conversions can be pinned in tests
/// or driven by a host-specific time source.
pub trait Clock {
    /// Current instant in UTC
    ///
    /// # Errors
    /// Returns `ClockError` if no trustworthy time is available.
    fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.0)
    }
}

impl<F> Clock for F
where
    F: Fn() -> Result<DateTime<Utc>, ClockError>,
{
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        self()
    }
}
