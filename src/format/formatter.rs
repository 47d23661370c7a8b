use std::fmt;

use crate::coord::{Axis, Coordinate};

use super::{
    config::Config,
    format_pair, format_value,
    render::{LocaleRenderer, RenderNumber},
};

/// Any value the [`CoordinateFormatter::format_any`] can try to format
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    /// A number without any hemisphere
    Number(f64),
    /// A (latitude, longitude) pair
    Coordinate(Coordinate),
    /// The sequence is formatted only if it has exactly two items: `[latitude, longitude]`
    Sequence(Vec<f64>),
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for FormatValue {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for FormatValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<Coordinate> for FormatValue {
    fn from(value: Coordinate) -> Self {
        Self::Coordinate(value)
    }
}

impl From<(f64, f64)> for FormatValue {
    fn from(value: (f64, f64)) -> Self {
        Self::Coordinate(value.into())
    }
}

impl From<[f64; 2]> for FormatValue {
    fn from(value: [f64; 2]) -> Self {
        Self::Sequence(value.to_vec())
    }
}

impl From<&[f64]> for FormatValue {
    fn from(value: &[f64]) -> Self {
        Self::Sequence(value.to_vec())
    }
}

impl From<Vec<f64>> for FormatValue {
    fn from(value: Vec<f64>) -> Self {
        Self::Sequence(value)
    }
}

/// Long-living formatter holding the [`Config`] and the number renderer.
///
/// ```
/// use geod_format::{Config, CoordinateFormatter, SmallestUnit};
///
/// let formatter = CoordinateFormatter::new(
///     Config::default()
///         .with_smallest_unit(SmallestUnit::Seconds)
///         .with_fractional_digits(0),
/// );
/// assert_eq!(
///     formatter.format_coordinate(-49.937888, 15.628472),
///     "49° 56′ 16″ S, 15° 37′ 42″ E"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateFormatter<R = LocaleRenderer> {
    config: Config,
    renderer: R,
}

impl CoordinateFormatter {
    /// Construct the formatter with the default renderer
    pub fn new(config: Config) -> Self {
        Self::with_renderer(config, LocaleRenderer)
    }
}

impl Default for CoordinateFormatter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<R: RenderNumber> CoordinateFormatter<R> {
    /// Construct the formatter with a custom renderer of the numbers
    pub fn with_renderer(config: Config, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// The current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Change the configuration in place
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Replace the configuration returning the old one
    pub fn set_config(&mut self, config: Config) -> Config {
        std::mem::replace(&mut self.config, config)
    }

    /// Modify the configuration with a closure
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(&mut Config)) -> Self {
        f(&mut self.config);
        self
    }

    /// The renderer of the numbers
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Format the value along the given axis
    pub fn format(&self, value: f64, axis: Axis) -> String {
        format_value(value, axis, &self.config, &self.renderer)
    }

    /// Format the number without any hemisphere letter.
    ///
    /// With the hemisphere letters enabled (default) the sign is lost
    /// unless the smallest unit is degrees.
    pub fn format_number(&self, value: f64) -> String {
        self.format(value, Axis::Undefined)
    }

    /// Format the value as a latitude (N/S)
    pub fn format_latitude(&self, value: f64) -> String {
        self.format(value, Axis::Latitudal)
    }

    /// Format the value as a longitude (E/W)
    pub fn format_longitude(&self, value: f64) -> String {
        self.format(value, Axis::Longitudal)
    }

    /// Format both values and join them with `", "`
    pub fn format_coordinate(&self, latitude: f64, longitude: f64) -> String {
        format_pair(latitude, longitude, &self.config, &self.renderer)
    }

    /// Try to format the value of any supported kind.
    ///
    /// Returns `None` for the values that cannot be interpreted as a number
    /// or a coordinate, so the caller can fall back to own rendering.
    pub fn format_any(&self, value: impl Into<FormatValue>) -> Option<String> {
        match value.into() {
            FormatValue::Number(value) => Some(self.format_number(value)),
            FormatValue::Coordinate(point) => {
                Some(self.format_coordinate(point.latitude, point.longitude))
            }
            FormatValue::Sequence(values) => match values.as_slice() {
                &[latitude, longitude] => Some(self.format_coordinate(latitude, longitude)),
                _ => None,
            },
        }
    }

    /// The value ready to be used with `write!` or `format!`
    pub fn display(&self, value: f64, axis: Axis) -> Formatted<'_, R> {
        Formatted {
            formatter: self,
            value,
            axis,
        }
    }
}

/// [`fmt::Display`] adapter produced by [`CoordinateFormatter::display`]
#[derive(Debug, Copy, Clone)]
pub struct Formatted<'a, R> {
    formatter: &'a CoordinateFormatter<R>,
    value: f64,
    axis: Axis,
}

impl<R: RenderNumber> fmt::Display for Formatted<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatter.format(self.value, self.axis))
    }
}
