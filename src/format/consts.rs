pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';
pub(crate) const MINUS_SIGN: char = '\u{2212}';

pub(crate) const NORTH: &str = "N";
pub(crate) const SOUTH: &str = "S";
pub(crate) const EAST: &str = "E";
pub(crate) const WEST: &str = "W";

pub(crate) const COMPONENT_SEPARATOR: &str = " ";
// latitude and longitude are always joined with this, whatever the component separator is
pub(crate) const COORDINATE_SEPARATOR: &str = ", ";

pub(crate) const DEFAULT_FRACTIONAL_DIGITS: u8 = 2;
// whole minutes and whole seconds always take two digits of the budget
pub(crate) const INTEGER_DIGITS_PER_UNIT: i16 = 2;
