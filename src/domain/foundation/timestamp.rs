//! UTC timestamps.
//!
//! Assessment history is ordered by `Timestamp`; streaks count whole UTC
//! calendar days between timestamps.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC. Serializes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Shifts by whole days. Negative values move into the past.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// The UTC calendar day this timestamp falls on.
    pub fn utc_day(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Calendar days from `earlier` to `self`; negative if `earlier` is later.
    pub fn days_since(&self, earlier: &Timestamp) -> i64 {
        (self.utc_day() - earlier.utc_day()).num_days()
    }
}
