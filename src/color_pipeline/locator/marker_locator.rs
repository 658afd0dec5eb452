//! Locator for the `IlluminationColor1` color record.
//!
//! The marker is stored in the asset as a null-terminated string. The color
//! data starts on the byte after the terminator, not on the byte after the
//! marker text.

use tracing::debug;
use crate::color_pipeline::common::error::{EditorError, Result};
use crate::color_pipeline::locator::finder::PatternLocator;

/// ASCII `IlluminationColor1`.
pub const ILLUMINATION_COLOR_MARKER: &[u8; 18] = b"IlluminationColor1";

/// Locator bound to the fixed `IlluminationColor1` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerLocator;

impl PatternLocator for MarkerLocator {
    fn locate_field(&self, buffer: &[u8]) -> Result<usize> {
        locate(buffer, ILLUMINATION_COLOR_MARKER)
    }
}

/// Returns the offset of the data following the first occurrence of `marker`
/// and its null terminator.
///
/// # Errors
///
/// * `MarkerNotFound` - `marker` does not occur in `buffer`
/// * `TerminatorNotFound` - no `0x00` byte follows the first occurrence
pub fn locate(buffer: &[u8], marker: &[u8]) -> Result<usize> {
    let start = find_subsequence(buffer, marker).ok_or(EditorError::MarkerNotFound)?;
    let marker_end = start + marker.len();

    debug!("Marker found at byte {}, scanning for terminator from {}", start, marker_end);

    let terminator = buffer[marker_end..]
        .iter()
        .position(|&b| b == 0)
        .ok_or(EditorError::TerminatorNotFound { marker_end })?;

    let offset = marker_end + terminator + 1;
    debug!("Color field offset: {}", offset);
    Ok(offset)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    // windows(0) panics; an empty needle matches at the start like str::find
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
