//! Sexagesimal (degree-minute-second) formatting of geographic coordinates
//!
//! ```
//! use geod_format::CoordinateFormatter;
//!
//! let formatter = CoordinateFormatter::default();
//! assert_eq!(formatter.format_latitude(0.0), "0° 0′ N");
//! assert_eq!(formatter.format_longitude(-27.7290833), "27° 44′ W");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
// #![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]

pub use coord::{Axis, Coordinate, Hemisphere, Pole, RotationalDirection};
pub use errors::{ParseLocaleError, ParseUnitError};
pub use format::{
    format_pair, format_value, Config, CoordinateFormatter, Dms, FormatValue, Formatted,
    LocaleRenderer, NumberStyle, RenderNumber, SmallestUnit,
};
pub use locale::Locale;

mod coord;
mod errors;
mod format;
mod locale;
mod utils;
