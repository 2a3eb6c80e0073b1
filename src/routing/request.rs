use std::fmt::Display;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

/// Tags one route computation so its result can be matched when it comes back.
/// Issued from a per-controller counter, so ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub id: RequestId,
    pub from: Coordinate,
    pub to: Coordinate,
    pub issued_at: DateTime<Utc>,
}

impl RouteRequest {
    pub fn new(id: RequestId, from: Coordinate, to: Coordinate) -> Self {
        Self {
            id,
            from,
            to,
            issued_at: Utc::now(),
        }
    }

    /// How long the request has been waiting as of `now`.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.issued_at
    }

    pub fn waiting(&self) -> TimeDelta {
        self.age(Utc::now())
    }
}

#[test]
fn request_id_display() {
    assert_eq!(RequestId::new(7).to_string(), "#7");
}

#[test]
fn request_age() {
    let request = RouteRequest::new(
        RequestId::new(1),
        Coordinate::from((1.0, 1.0)),
        Coordinate::from((2.0, 2.0)),
    );
    let later = request.issued_at + TimeDelta::seconds(3);
    assert_eq!(request.age(later), TimeDelta::seconds(3));
}
