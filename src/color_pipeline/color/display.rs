//! Display normalization policy.
//!
//! Everything here is pure: the preview is a function of the stored color
//! and the normalization mode only.

use crate::color_pipeline::color::types::{
    BaseColor, DisplayColor, HdrStatus, NormalizationMode, RawColor,
};

/// Clamps to `[0, 1]`. NaN maps to 0.
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Maps a stored color to its clamped preview.
///
/// In `Auto` mode an HDR color (brightest channel above 1.0) is divided by
/// that channel, so the brightest channel lands on 1.0 and the channel ratios
/// are kept. Otherwise each channel is clamped on its own. An infinite
/// maximum is never used as a divisor.
pub fn to_display(raw: &RawColor, mode: NormalizationMode) -> DisplayColor {
    let m = raw.max_rgb();
    let scale_factor = if m > 1.0 { m } else { 1.0 };
    let normalized = mode == NormalizationMode::Auto && m > 1.0 && m.is_finite();

    let divisor = if normalized { m } else { 1.0 };
    DisplayColor {
        r: clamp01(raw.red / divisor),
        g: clamp01(raw.green / divisor),
        b: clamp01(raw.blue / divisor),
        scale_factor,
        normalized,
    }
}

/// Permanently rescales an HDR color into the standard range. Alpha is kept.
/// Colors whose brightest channel is at most 1.0 are returned unchanged.
pub fn manual_normalize(raw: &RawColor) -> RawColor {
    let m = raw.max_rgb();
    if m > 1.0 {
        RawColor {
            red: raw.red / m,
            green: raw.green / m,
            blue: raw.blue / m,
            alpha: raw.alpha,
        }
    } else {
        *raw
    }
}

/// Builds an HDR color from a standard-range base and a multiplier. The
/// intensity is not bounded. Alpha is 1.0; use [`RawColor::with_alpha`] to
/// keep an existing one.
pub fn from_base_and_intensity(base: &BaseColor, intensity: f32) -> RawColor {
    RawColor {
        red: base.r * intensity,
        green: base.g * intensity,
        blue: base.b * intensity,
        alpha: 1.0,
    }
}

/// "Auto" only when the preview was actually rescaled, so an infinite
/// maximum in `Auto` mode reports as raw.
pub fn hdr_status(raw: &RawColor, mode: NormalizationMode) -> HdrStatus {
    let display = to_display(raw, mode);
    if display.normalized {
        HdrStatus::HdrAuto(display.scale_factor)
    } else if display.scale_factor > 1.0 {
        HdrStatus::HdrRaw(display.scale_factor)
    } else {
        HdrStatus::Sdr
    }
}
