use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{Hemisphere, Pole, RotationalDirection},
    errors::ParseUnitError,
    locale::Locale,
};

use super::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, COMPONENT_SEPARATOR, DEFAULT_FRACTIONAL_DIGITS,
    DEGREE_SIGN, EAST, INTEGER_DIGITS_PER_UNIT, MINUS_SIGN, NORTH, SOUTH, WEST,
};

/// The finest component of the sexagesimal notation to show.
/// All the coarser components are always shown too.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SmallestUnit {
    /// `56.246°`
    Degrees,
    /// `56° 14.76′`
    #[default]
    Minutes,
    /// `56° 14′ 45.6″`
    Seconds,
}

impl SmallestUnit {
    /// How many digits of the fractional budget are taken by
    /// the whole minutes and whole seconds components
    pub const fn integer_digits(self) -> i16 {
        match self {
            Self::Degrees => 0,
            Self::Minutes => INTEGER_DIGITS_PER_UNIT,
            Self::Seconds => INTEGER_DIGITS_PER_UNIT * 2,
        }
    }
}

impl FromStr for SmallestUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" => Ok(Self::Degrees),
            "minutes" | "minute" | "min" => Ok(Self::Minutes),
            "seconds" | "second" | "sec" => Ok(Self::Seconds),
            _ => Err(ParseUnitError {
                failed: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SmallestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// All the knobs of the coordinate formatting.
///
/// No consistency checks are made: empty glyphs,
/// zero precision and so on are used exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Used to render the decimal separator
    pub locale: Locale,
    /// The finest component to show
    pub smallest_unit: SmallestUnit,
    /// Total count of digits after the decimal point.
    ///
    /// Whole minutes and whole seconds are thought of as two digits each,
    /// so the smallest unit gets only the rest of the budget:
    /// with the default `2` and minutes, the minutes are rendered as integers.
    pub fractional_digits: u8,
    /// Put after the degrees
    pub degree_string: String,
    /// Put after the minutes
    pub minute_string: String,
    /// Put after the seconds
    pub second_string: String,
    /// Joins the components and the hemisphere letter
    pub component_separator: String,
    /// Show the hemisphere letter instead of the minus sign
    pub uses_hemisphere_suffixes: bool,
    /// Prepended to the degrees of a negative value if the hemisphere letters are disabled
    pub minus_sign: String,
    /// Latitude >= 0
    pub north_string: String,
    /// Latitude < 0
    pub south_string: String,
    /// Longitude >= 0
    pub east_string: String,
    /// Longitude < 0
    pub west_string: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            smallest_unit: SmallestUnit::default(),
            fractional_digits: DEFAULT_FRACTIONAL_DIGITS,
            degree_string: DEGREE_SIGN.to_string(),
            minute_string: ARC_MINUTE_SIGN.to_string(),
            second_string: ARC_SECOND_SIGN.to_string(),
            component_separator: COMPONENT_SEPARATOR.to_string(),
            uses_hemisphere_suffixes: true,
            minus_sign: MINUS_SIGN.to_string(),
            north_string: NORTH.to_string(),
            south_string: SOUTH.to_string(),
            east_string: EAST.to_string(),
            west_string: WEST.to_string(),
        }
    }
}

impl Config {
    /// Set the rendering locale
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the finest component to show
    #[must_use]
    pub fn with_smallest_unit(mut self, unit: SmallestUnit) -> Self {
        self.smallest_unit = unit;
        self
    }

    /// Set the total fractional digits budget
    #[must_use]
    pub fn with_fractional_digits(mut self, digits: u8) -> Self {
        self.fractional_digits = digits;
        self
    }

    /// Set the glyphs put after degrees, minutes and seconds
    #[must_use]
    pub fn with_unit_strings(
        mut self,
        degree: impl Into<String>,
        minute: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.degree_string = degree.into();
        self.minute_string = minute.into();
        self.second_string = second.into();
        self
    }

    /// Set the string between the components
    #[must_use]
    pub fn with_component_separator(mut self, separator: impl Into<String>) -> Self {
        self.component_separator = separator.into();
        self
    }

    /// Choose between the hemisphere letters and the minus sign
    #[must_use]
    pub fn with_hemisphere_suffixes(mut self, enabled: bool) -> Self {
        self.uses_hemisphere_suffixes = enabled;
        self
    }

    /// Set the negative sign glyph
    #[must_use]
    pub fn with_minus_sign(mut self, minus: impl Into<String>) -> Self {
        self.minus_sign = minus.into();
        self
    }

    /// Set the four cardinal direction letters
    #[must_use]
    pub fn with_cardinal_strings(
        mut self,
        north: impl Into<String>,
        south: impl Into<String>,
        east: impl Into<String>,
        west: impl Into<String>,
    ) -> Self {
        self.north_string = north.into();
        self.south_string = south.into();
        self.east_string = east.into();
        self.west_string = west.into();
        self
    }

    /// The budget left for the fraction of the smallest unit,
    /// can be negative when the whole minutes and seconds take more than is available
    pub fn remaining_digits(&self) -> i16 {
        i16::from(self.fractional_digits) - self.smallest_unit.integer_digits()
    }

    /// Fractional digits of the smallest unit
    pub fn precision(&self) -> usize {
        usize::try_from(self.remaining_digits()).unwrap_or(0)
    }

    /// The letter(s) for the given hemisphere
    pub fn hemisphere_string(&self, hemisphere: Hemisphere) -> &str {
        match hemisphere {
            Hemisphere::Latitudal(Pole::North) => &self.north_string,
            Hemisphere::Latitudal(Pole::South) => &self.south_string,
            Hemisphere::Longitudal(RotationalDirection::East) => &self.east_string,
            Hemisphere::Longitudal(RotationalDirection::West) => &self.west_string,
        }
    }
}
