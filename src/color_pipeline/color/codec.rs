//! Binary codec for the color record.
//!
//! The record is four IEEE-754 binary32 values in little-endian byte order,
//! red at `+0`, green at `+4`, blue at `+8` and alpha at `+12`.

use tracing::debug;
use crate::color_pipeline::color::types::RawColor;
use crate::color_pipeline::common::error::{EditorError, Result};

/// Size of the RGBA record in bytes.
pub const COLOR_RECORD_LEN: usize = 16;

const CHANNEL_LEN: usize = 4;

fn record_range(len: usize, offset: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(COLOR_RECORD_LEN) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(EditorError::Truncated {
            offset,
            required: COLOR_RECORD_LEN,
            len,
        }),
    }
}

/// Reads the record at `offset`. Values are returned as stored, NaN and
/// infinities included.
pub fn decode(buffer: &[u8], offset: usize) -> Result<RawColor> {
    let record = &buffer[record_range(buffer.len(), offset)?];

    let mut channels = [0f32; 4];
    for (value, bytes) in channels.iter_mut().zip(record.chunks_exact(CHANNEL_LEN)) {
        *value = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    let [red, green, blue, alpha] = channels;

    let color = RawColor { red, green, blue, alpha };
    debug!("Decoded color at offset {}: {}", offset, color);
    Ok(color)
}

/// Overwrites exactly the 16 bytes at `offset`. Nothing is written when the
/// buffer is too short.
pub fn encode(buffer: &mut [u8], offset: usize, color: &RawColor) -> Result<()> {
    let range = record_range(buffer.len(), offset)?;

    for (chunk, value) in buffer[range]
        .chunks_exact_mut(CHANNEL_LEN)
        .zip(color.channels())
    {
        chunk.copy_from_slice(&value.to_le_bytes());
    }

    debug!("Encoded color at offset {}: {}", offset, color);
    Ok(())
}
