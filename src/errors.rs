use thiserror::Error;

/// The locale tag cannot be recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLocaleError {
    /// Nothing to parse
    #[error("Cannot parse locale: empty tag")]
    Empty,
    /// The tag does not follow the `language[_REGION][_variant]` scheme
    #[error("Cannot parse locale: {0:?} is not a valid locale tag")]
    Malformed(String),
}

/// The name of the smallest formatted unit is unknown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot parse unit from {failed:?}: expected one of degrees, minutes, seconds")]
pub struct ParseUnitError {
    pub(crate) failed: String,
}
