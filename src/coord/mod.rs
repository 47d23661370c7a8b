use std::{fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::point::Coordinate;

mod point;

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; display as $true_ch:literal:$false_ch:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    Self::$falsy => Self::$truthy,
                    Self::$truthy => Self::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

bool_enum!(
    /// The half of the globe for a latitude
    Pole: North and South; display as 'N':'S'
);
bool_enum!(
    /// The half of the globe for a longitude
    RotationalDirection: East and West; display as 'E':'W'
);

/// The hemisphere letter to put after a formatted value
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hemisphere {
    /// Northern or southern
    Latitudal(Pole),
    /// Eastern or western
    Longitudal(RotationalDirection),
}

/// What is the formatted number: a latitude, a longitude or just an angle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// A plain number, no hemisphere can be detected
    #[default]
    Undefined,
    /// Angle from the equator: positive to the North, negative to the South
    Latitudal,
    /// Angle from the prime meridian: positive to the East, negative to the West
    Longitudal,
}

impl Axis {
    /// The hemisphere selected by the sign of the value.
    /// Zero belongs to the northern (eastern) hemisphere.
    pub fn hemisphere(self, negative: bool) -> Option<Hemisphere> {
        match self {
            Self::Undefined => None,
            Self::Latitudal => Some(Hemisphere::Latitudal(Pole::from(!negative))),
            Self::Longitudal => Some(Hemisphere::Longitudal(RotationalDirection::from(
                !negative,
            ))),
        }
    }
}
