use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{Config, CoordinateFormatter, SmallestUnit};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of an ellipsoid, represented as the pair (latitude, longitude)
/// of signed decimal degrees.
///
/// No range checks are made: the values are only formatted, never validated.
pub struct Coordinate {
    /// Positive to the North, negative to the South
    pub latitude: f64,
    /// Positive to the East, negative to the West
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a point from the given latitude and longitude
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Are both latitude and longitude finite numbers?
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        let (latitude, longitude) = value;
        Self::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        let [latitude, longitude] = value;
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(point: Coordinate) -> Self {
        (point.latitude, point.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatter = if f.alternate() {
            // DMS
            CoordinateFormatter::new(Config::default().with_smallest_unit(SmallestUnit::Seconds))
        } else {
            CoordinateFormatter::default()
        };
        write!(
            f,
            "{}",
            formatter.format_coordinate(self.latitude, self.longitude)
        )
    }
}
