//! Rendering of a single number with the fixed count of fractional digits

use crate::{locale::Locale, utils::round_to};

/// How to render a single component of a coordinate
#[derive(Debug, Copy, Clone)]
pub struct NumberStyle<'a> {
    /// Defines the decimal separator
    pub locale: &'a Locale,
    /// Replaces the ASCII hyphen-minus
    pub minus_sign: &'a str,
    /// Exact number of digits after the decimal separator
    pub fraction_digits: usize,
}

/// Render a real number as a plain decimal: no grouping,
/// at least one integer digit, exactly the requested count of fractional digits.
pub trait RenderNumber {
    /// Render the value with the given style
    fn render(&self, value: f64, style: &NumberStyle<'_>) -> String;
}

impl<T: RenderNumber + ?Sized> RenderNumber for &T {
    fn render(&self, value: f64, style: &NumberStyle<'_>) -> String {
        (**self).render(value, style)
    }
}

/// The [`Locale`]-aware renderer rounding half away from zero
#[derive(Debug, Default, Copy, Clone)]
pub struct LocaleRenderer;

impl RenderNumber for LocaleRenderer {
    fn render(&self, value: f64, style: &NumberStyle<'_>) -> String {
        let rounded = round_to(value, style.fraction_digits);
        let digits = format!("{:.*}", style.fraction_digits, rounded.abs());

        let separator = style.locale.decimal_separator();
        let digits = if separator == '.' {
            digits
        } else {
            digits.replace('.', separator.encode_utf8(&mut [0; 4]))
        };

        if rounded.is_sign_negative() {
            format!("{}{}", style.minus_sign, digits)
        } else {
            digits
        }
    }
}
