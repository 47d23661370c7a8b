//! Sexagesimal rendering of decimal degrees.
//!
//! The pipeline for a single value is:
//! validate -> [decompose](Dms::decompose) -> [render](RenderNumber) components -> assemble.
//!
//! The functions here are pure: everything that affects the output
//! is the value, its [`Axis`] and the [`Config`].

use log::debug;

use crate::coord::Axis;

pub use self::{
    config::{Config, SmallestUnit},
    dms::Dms,
    formatter::{CoordinateFormatter, FormatValue, Formatted},
    render::{LocaleRenderer, NumberStyle, RenderNumber},
};

mod config;
mod consts;
mod dms;
mod formatter;
mod render;

use self::consts::COORDINATE_SEPARATOR;

/// Format a single value as a latitude, longitude or plain number.
///
/// Non-finite values produce an empty string.
pub fn format_value<R>(value: f64, axis: Axis, config: &Config, renderer: &R) -> String
where
    R: RenderNumber + ?Sized,
{
    if !value.is_finite() {
        debug!("Cannot format non-finite value {value} ({axis:?})");
        return String::new();
    }

    let dms = Dms::decompose(value, config);
    let precision = config.precision();
    let render = |number: f64, fraction_digits: usize, unit: &str| {
        let style = NumberStyle {
            locale: &config.locale,
            minus_sign: &config.minus_sign,
            fraction_digits,
        };
        let mut rendered = renderer.render(number, &style);
        rendered.push_str(unit);
        rendered
    };

    let mut parts = Vec::with_capacity(4);
    match config.smallest_unit {
        SmallestUnit::Degrees => {
            parts.push(render(dms.degrees, precision, &config.degree_string));
        }
        SmallestUnit::Minutes => {
            parts.push(render(dms.degrees, 0, &config.degree_string));
            parts.push(render(dms.minutes, precision, &config.minute_string));
        }
        SmallestUnit::Seconds => {
            parts.push(render(dms.degrees, 0, &config.degree_string));
            parts.push(render(dms.minutes, 0, &config.minute_string));
            parts.push(render(dms.seconds, precision, &config.second_string));
        }
    }

    if config.uses_hemisphere_suffixes {
        if let Some(hemisphere) = axis.hemisphere(value < 0.0) {
            parts.push(config.hemisphere_string(hemisphere).to_owned());
        }
    }

    parts.join(&config.component_separator)
}

/// Format the latitude and the longitude independently and join them with `", "`.
///
/// An invalid side is rendered empty while the other one is still shown.
pub fn format_pair<R>(latitude: f64, longitude: f64, config: &Config, renderer: &R) -> String
where
    R: RenderNumber + ?Sized,
{
    let lat = format_value(latitude, Axis::Latitudal, config, renderer);
    let lon = format_value(longitude, Axis::Longitudal, config, renderer);
    format!("{lat}{COORDINATE_SEPARATOR}{lon}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn fmt(value: f64, axis: Axis, config: &Config) -> String {
        format_value(value, axis, config, &LocaleRenderer)
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_is_empty(#[case] value: f64) {
        for axis in [Axis::Undefined, Axis::Latitudal, Axis::Longitudal] {
            assert_eq!(fmt(value, axis, &Config::default()), "");
        }
    }

    #[rstest]
    #[case(SmallestUnit::Degrees, 3, "56.246°")]
    #[case(SmallestUnit::Degrees, 0, "56°")]
    #[case(SmallestUnit::Minutes, 2, "56° 15′")]
    #[case(SmallestUnit::Minutes, 4, "56° 14.76′")]
    #[case(SmallestUnit::Seconds, 4, "56° 14′ 46″")]
    #[case(SmallestUnit::Seconds, 5, "56° 14′ 45.6″")]
    fn plain_number(#[case] unit: SmallestUnit, #[case] digits: u8, #[case] expected: &str) {
        let config = Config::default()
            .with_smallest_unit(unit)
            .with_fractional_digits(digits);
        assert_eq!(fmt(56.246, Axis::Undefined, &config), expected);
    }

    #[test]
    fn longitude_minutes_fraction() {
        let config = Config::default().with_fractional_digits(4);
        assert_eq!(
            fmt(-27.729_083_3, Axis::Longitudal, &config),
            "27° 43.74′ W"
        );
    }

    #[test]
    fn longitude_default_budget() {
        assert_eq!(
            fmt(-27.729_083_3, Axis::Longitudal, &Config::default()),
            "27° 44′ W"
        );
    }

    #[test]
    fn zero_latitude() {
        assert_eq!(fmt(0.0, Axis::Latitudal, &Config::default()), "0° 0′ N");
        assert_eq!(fmt(-0.0, Axis::Longitudal, &Config::default()), "0° 0′ E");
    }

    #[test]
    fn pair_in_seconds() {
        let config = Config::default()
            .with_smallest_unit(SmallestUnit::Seconds)
            .with_fractional_digits(0);
        assert_eq!(
            format_pair(-49.937_888, 15.628_472, &config, &LocaleRenderer),
            "49° 56′ 16″ S, 15° 37′ 42″ E"
        );
    }

    #[test]
    fn pair_ignores_component_separator() {
        let config = Config::default().with_component_separator("");
        assert_eq!(
            format_pair(10.0, -20.0, &config, &LocaleRenderer),
            "10°0′N, 20°0′W"
        );
    }

    #[test]
    fn pair_with_invalid_side() {
        let config = Config::default();
        assert_eq!(
            format_pair(f64::NAN, 15.628_472, &config, &LocaleRenderer),
            ", 15° 38′ E"
        );
        assert_eq!(
            format_pair(-49.937_888, f64::INFINITY, &config, &LocaleRenderer),
            "49° 56′ S, "
        );
    }

    #[test]
    fn hemisphere_instead_of_sign() {
        let result = fmt(-12.5, Axis::Latitudal, &Config::default());
        assert_eq!(result, "12° 30′ S");
        assert!(!result.contains('−'));
    }

    #[test]
    fn sign_instead_of_hemisphere() {
        let config = Config::default().with_hemisphere_suffixes(false);
        let result = fmt(-12.5, Axis::Latitudal, &config);
        assert_eq!(result, "−12° 30′");
        assert!(!result.contains('S'));
    }

    #[test]
    fn sign_of_less_than_degree() {
        let config = Config::default()
            .with_hemisphere_suffixes(false)
            .with_minus_sign("-");
        assert_eq!(fmt(-0.5, Axis::Longitudal, &config), "-0° 30′");
    }

    #[test]
    fn undefined_axis_never_has_suffix() {
        let config = Config::default();
        assert_eq!(fmt(12.5, Axis::Undefined, &config), "12° 30′");
        assert_eq!(fmt(-12.5, Axis::Undefined, &config), "12° 30′");
    }

    #[test]
    fn degrees_keep_the_sign() {
        let config = Config::default()
            .with_smallest_unit(SmallestUnit::Degrees)
            .with_fractional_digits(1);
        assert_eq!(fmt(-12.5, Axis::Undefined, &config), "−12.5°");
        assert_eq!(fmt(-12.5, Axis::Latitudal, &config), "−12.5° S");

        let config = config.with_hemisphere_suffixes(false);
        assert_eq!(fmt(-12.5, Axis::Latitudal, &config), "−12.5°");
    }

    #[test]
    fn never_sixty() {
        let config = Config::default().with_smallest_unit(SmallestUnit::Seconds);
        let result = fmt(12.0 + 59.0 / 60.0 + 59.8 / 3600.0, Axis::Latitudal, &config);
        assert_eq!(result, "13° 0′ 0″ N");
    }

    #[test]
    fn out_of_range_is_formatted() {
        let config = Config::default();
        assert_eq!(fmt(-100.25, Axis::Latitudal, &config), "100° 15′ S");
        assert_eq!(fmt(400.5, Axis::Longitudal, &config), "400° 30′ E");
    }

    #[test]
    fn custom_glyphs() {
        let config = Config::default()
            .with_smallest_unit(SmallestUnit::Seconds)
            .with_fractional_digits(5)
            .with_unit_strings("d", "m", "s")
            .with_component_separator(":")
            .with_cardinal_strings("north", "south", "east", "west");
        assert_eq!(
            fmt(56.246, Axis::Latitudal, &config),
            "56d:14m:45.6s:north"
        );
    }

    #[test]
    fn empty_glyphs() {
        let config = Config::default()
            .with_unit_strings("", "", "")
            .with_cardinal_strings("", "", "", "");
        assert_eq!(fmt(1.5, Axis::Latitudal, &config), "1 30 ");
    }

    #[test]
    fn localized_fraction() {
        let config = Config::default()
            .with_locale("fr_FR".parse().unwrap())
            .with_fractional_digits(4);
        assert_eq!(fmt(-27.729_083_3, Axis::Longitudal, &config), "27° 43,74′ W");
    }

    #[test]
    fn idempotent() {
        let config = Config::default().with_smallest_unit(SmallestUnit::Seconds);
        let first = fmt(-49.937_888, Axis::Latitudal, &config);
        let second = fmt(-49.937_888, Axis::Latitudal, &config);
        assert_eq!(first, second);
    }
}
