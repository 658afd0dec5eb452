//! Marker location module
//!
//! Finds the null-terminated `IlluminationColor1` string inside an asset and
//! reports where the color record that follows it begins.

mod finder;
mod marker_locator;

pub use finder::PatternLocator;
pub use marker_locator::{locate, MarkerLocator, ILLUMINATION_COLOR_MARKER};
