//! Color record module
//!
//! Decoding and encoding of the 16-byte RGBA float record, plus the display
//! policy used to preview HDR intensities inside the standard 0-1 range.

mod codec;
mod display;
pub mod types;

pub use codec::{decode, encode, COLOR_RECORD_LEN};
pub use display::{clamp01, from_base_and_intensity, hdr_status, manual_normalize, to_display};
pub use types::{parse_hex_rgb8, BaseColor, DisplayColor, HdrStatus, NormalizationMode, RawColor};
