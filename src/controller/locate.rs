use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::geo::Coordinate;

/// Why the device position lookup failed. Codes follow the browser
/// geolocation API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateError {
    #[error("Could not get your location: permission denied")]
    PermissionDenied,
    #[error("Could not get your location: position unavailable")]
    PositionUnavailable,
    #[error("Could not get your location: timed out")]
    Timeout,
}

impl LocateError {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocateError::PermissionDenied,
            3 => LocateError::Timeout,
            _ => LocateError::PositionUnavailable,
        }
    }
}

/// Tracks a running "use my location" lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locator {
    locating: bool,
    last_error: Option<LocateError>,
}

impl Locator {
    pub fn is_locating(&self) -> bool {
        self.locating
    }

    pub fn last_error(&self) -> Option<LocateError> {
        self.last_error
    }

    pub(crate) fn begin(&mut self) -> bool {
        if self.locating {
            return false;
        }
        self.locating = true;
        self.last_error = None;
        true
    }

    pub(crate) fn finish(&mut self, outcome: Result<Coordinate, LocateError>) -> Option<Coordinate> {
        self.locating = false;
        match outcome {
            Ok(coordinate) => Some(coordinate),
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }
}

#[test]
fn codes_map_to_errors() {
    assert_eq!(LocateError::from_code(1), LocateError::PermissionDenied);
    assert_eq!(LocateError::from_code(2), LocateError::PositionUnavailable);
    assert_eq!(LocateError::from_code(3), LocateError::Timeout);
    assert_eq!(LocateError::from_code(42), LocateError::PositionUnavailable);
}

#[test]
fn begin_twice_is_refused() {
    let mut locator = Locator::default();
    assert!(locator.begin());
    assert!(!locator.begin());
    assert!(locator.finish(Err(LocateError::Timeout)).is_none());
    assert_eq!(locator.last_error(), Some(LocateError::Timeout));
    assert!(locator.begin());
    assert_eq!(locator.last_error(), None);
}

#[test]
fn messages_keep_alert_text_and_name_cause() {
    assert_eq!(
        LocateError::PermissionDenied.to_string(),
        "Could not get your location: permission denied"
    );
    assert_eq!(
        LocateError::PositionUnavailable.to_string(),
        "Could not get your location: position unavailable"
    );
    assert_eq!(
        LocateError::Timeout.to_string(),
        "Could not get your location: timed out"
    );
}
