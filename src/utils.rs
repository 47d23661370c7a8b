//! Utilities functions which do not linked to domain

use std::ops::Neg;

use num_traits::Float;

/// Allow conversion of a signed value into its unsigned equivalent
/// by dropping the sign away
pub(crate) trait ToUnsigned<U>: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// represent the source (signed) type as target (unsigned) type
    fn as_type(self) -> U;

    /// Converts to unsigned absolute value
    fn unsigned_abs(self) -> (U, bool) {
        if self >= Self::default() {
            (self.as_type(), true)
        } else {
            ((-self).as_type(), false)
        }
    }
}

macro_rules! impl_unsigned_abs {
    ($same: ty) => {
        impl ToUnsigned<$same> for $same {
            fn as_type(self) -> Self {
                self
            }
        }
    };
}

impl_unsigned_abs!(f64);

/// Round the number to the given count of fractional digits.
///
/// Ties are rounded away from zero (`0.125` -> `0.13`, `-0.125` -> `-0.13`).
/// If the scaled value cannot be represented, the number is returned as is:
/// it already has less significant digits than requested.
pub(crate) fn round_to<F: Float>(x: F, digits: usize) -> F {
    let Ok(exp) = i32::try_from(digits) else {
        return x;
    };

    let factor = num_traits::cast::<u8, F>(10).map_or_else(F::one, |ten| ten.powi(exp));
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }

    scaled.round() / factor
}

/// Split into integer and fractional parts, both with the sign of the argument
pub(crate) fn trunc_fract<F: Float>(x: F) -> (F, F) {
    (x.trunc(), x.fract())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(7.5_f64.unsigned_abs(), (7.5, true));
        assert_eq!((-7.5_f64).unsigned_abs(), (7.5, false));
        assert_eq!(0.0_f64.unsigned_abs(), (0.0, true));
    }

    #[test]
    fn round_half_away_from_zero() {
        assert!((round_to(0.125_f64, 2) - 0.13).abs() < 1e-12);
        assert!((round_to(-0.125_f64, 2) + 0.13).abs() < 1e-12);
        assert!((round_to(2.5_f64, 0) - 3.0).abs() < f64::EPSILON);
        assert!((round_to(-2.5_f64, 0) + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_to_integer() {
        assert!((round_to(59.6_f64, 0) - 60.0).abs() < f64::EPSILON);
        assert!((round_to(59.4_f64, 0) - 59.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_too_precise_is_identity() {
        let x = 1.234_567_f64;
        assert!((round_to(x, 400) - x).abs() < f64::EPSILON);
        assert!((round_to(x, usize::MAX) - x).abs() < f64::EPSILON);
    }

    #[test]
    fn split_parts() {
        let (int, fract) = trunc_fract(27.75_f64);
        assert!((int - 27.0).abs() < f64::EPSILON);
        assert!((fract - 0.75).abs() < f64::EPSILON);
    }
}
