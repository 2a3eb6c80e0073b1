use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Road distance is longer than the great-circle distance between two points.
pub const CIRCUITY_FACTOR: f64 = 1.3;
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("Coordinate is not a finite number")]
    NotFinite,
    #[error("Latitude {0} is outside of -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside of -180..=180")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    /// Builds a coordinate, rejecting values no map could have produced.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, self::Error> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(self::Error::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(self::Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(self::Error::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn great_circle_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }

    pub fn network_distance(&self, coord: &Self) -> Distance {
        Distance::from_meters(self.great_circle_distance(coord).as_meters() * CIRCUITY_FACTOR)
    }
}

#[test]
fn distance_test() {
    let paris = Coordinate {
        latitude: 48.85800943005911,
        longitude: 2.3514350059357927,
    };

    let london = Coordinate {
        latitude: 51.5052389927712,
        longitude: -0.12495407345099824,
    };
    let d = paris.great_circle_distance(&london);
    assert!((d.as_kilometers() - 343.0).abs() < 5.0);
}

#[test]
fn network_distance_is_longer() {
    let a = Coordinate::from((51.0, 0.0));
    let b = Coordinate::from((52.0, 1.0));
    assert!(a.network_distance(&b) > a.great_circle_distance(&b));
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn coordinate_rejects_out_of_range() {
    assert_eq!(
        Coordinate::new(91.0, 0.0),
        Err(Error::LatitudeOutOfRange(91.0))
    );
    assert_eq!(
        Coordinate::new(0.0, -180.5),
        Err(Error::LongitudeOutOfRange(-180.5))
    );
    assert_eq!(Coordinate::new(f64::NAN, 0.0), Err(Error::NotFinite));
    assert!(Coordinate::new(-90.0, 180.0).is_ok());
}
