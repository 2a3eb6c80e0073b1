use std::cmp;

use serde::{Deserialize, Serialize};

const MINUTE_TO_SEC: f64 = 60.0;
const HOUR_TO_SEC: f64 = 60.0 * 60.0;

/// Travel time in seconds. Routing engines report fractional seconds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Duration {
    pub const fn from_seconds(secs: f64) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes * MINUTE_TO_SEC)
    }

    pub const fn from_hours(hours: f64) -> Self {
        Self(hours * HOUR_TO_SEC)
    }

    pub const fn as_seconds(&self) -> f64 {
        self.0
    }

    /// Whole hours and the whole minutes left over, both rounded down.
    pub fn to_hours_minutes(&self) -> (u64, u64) {
        let secs = self.0.max(0.0);
        let hours = (secs / HOUR_TO_SEC).floor();
        let minutes = ((secs % HOUR_TO_SEC) / MINUTE_TO_SEC).floor();
        (hours as u64, minutes as u64)
    }
}

#[test]
fn hours_minutes_split() {
    assert_eq!(Duration::from_seconds(600.0).to_hours_minutes(), (0, 10));
    assert_eq!(Duration::from_seconds(3660.0).to_hours_minutes(), (1, 1));
    assert_eq!(Duration::from_seconds(7199.9).to_hours_minutes(), (1, 59));
}

#[test]
fn negative_duration_clamps_to_zero() {
    assert_eq!(Duration::from_seconds(-5.0).to_hours_minutes(), (0, 0));
}

#[test]
fn duration_units() {
    assert_eq!(Duration::from_hours(1.5), Duration::from_minutes(90.0));
    assert_eq!(Duration::from_minutes(1.0).as_seconds(), 60.0);
}
