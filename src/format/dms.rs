//! Splitting of a decimal degree value into the sexagesimal components

use log::trace;

use crate::utils::{round_to, trunc_fract, ToUnsigned};

use super::{
    config::{Config, SmallestUnit},
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
};

/// Degrees, minutes and seconds of an angle, ready to be rendered.
///
/// All the components are non-negative, except for the degrees:
/// they keep the sign of the value whenever the sign
/// could not be shown with the hemisphere letter.
/// The component finer than the smallest unit is always zero.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Dms {
    /// Whole degrees, or the full value if the smallest unit is degrees
    pub degrees: f64,
    /// Whole or rounded fractional minutes, `0 <= min < 60`
    pub minutes: f64,
    /// Rounded fractional seconds, `0 <= sec < 60`
    pub seconds: f64,
}

impl Dms {
    /// Decompose the value according to the smallest unit and the digits budget.
    ///
    /// The smallest unit is rounded (half away from zero) and any overflow
    /// to 60 is carried into the coarser units, so the result never contains `60′` or `60″`.
    pub fn decompose(value: f64, config: &Config) -> Self {
        if value == 0.0 {
            // get rid of the negative zero
            return Self::default();
        }

        let precision = config.precision();
        let (magnitude, non_negative) = value.unsigned_abs();
        let mut dms = match config.smallest_unit {
            SmallestUnit::Degrees => {
                return Self {
                    degrees: value,
                    ..Self::default()
                };
            }
            SmallestUnit::Minutes => Self::with_minutes(magnitude, precision),
            SmallestUnit::Seconds => Self::with_seconds(magnitude, precision),
        };

        if !config.uses_hemisphere_suffixes && !non_negative {
            dms.degrees = -dms.degrees;
        }

        trace!("{value} decomposed into {dms:?} (precision={precision})");
        dms
    }

    fn with_minutes(magnitude: f64, precision: usize) -> Self {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);

        let (mut degrees, fraction) = trunc_fract(magnitude);
        let mut minutes = round_to(fraction * min_in_deg, precision);
        if minutes >= min_in_deg {
            trace!("carry of {minutes} minutes into degrees");
            minutes -= min_in_deg;
            degrees += 1.0;
        }

        Self {
            degrees,
            minutes,
            seconds: 0.0,
        }
    }

    fn with_seconds(magnitude: f64, precision: usize) -> Self {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_min = f64::from(SECONDS_IN_MINUTE);

        let (mut degrees, fraction) = trunc_fract(magnitude);
        let (mut minutes, fraction) = trunc_fract(fraction * min_in_deg);
        let mut seconds = round_to(fraction * sec_in_min, precision);

        // seconds first, they can overflow the minutes
        if seconds >= sec_in_min {
            trace!("carry of {seconds} seconds into minutes");
            seconds -= sec_in_min;
            minutes += 1.0;
        }
        if minutes >= min_in_deg {
            trace!("carry of {minutes} minutes into degrees");
            minutes -= min_in_deg;
            degrees += 1.0;
        }

        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// The absolute value of the angle represented by components
    pub fn magnitude(&self) -> f64 {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_deg = min_in_deg * f64::from(SECONDS_IN_MINUTE);
        self.degrees.abs() + self.minutes / min_in_deg + self.seconds / sec_in_deg
    }

    /// Does the sign of the value stay with the degrees?
    pub fn is_negative(&self) -> bool {
        self.degrees.is_sign_negative()
    }
}
