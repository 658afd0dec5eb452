//! Color value types

use std::fmt;

/// The four channels exactly as stored in the asset, unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl RawColor {
    pub const CHANNEL_NAMES: [&'static str; 4] = ["red", "green", "blue", "alpha"];

    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self { red, green, blue, alpha }
    }

    pub fn channels(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Largest of the three color channels. NaN channels are ignored unless
    /// all three are NaN.
    pub fn max_rgb(&self) -> f32 {
        self.red.max(self.green).max(self.blue)
    }

    pub fn is_hdr(&self) -> bool {
        self.max_rgb() > 1.0
    }

    /// Compares the stored bit patterns, so NaN payloads and signed zeros count.
    pub fn bits_eq(&self, other: &RawColor) -> bool {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// Upper-case hex of each channel's little-endian encoding, in RGBA order.
    pub fn channel_hex(&self) -> [String; 4] {
        self.channels().map(|value| {
            value
                .to_le_bytes()
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect()
        })
    }

    /// First channel that is NaN or infinite, with its name.
    pub fn first_non_finite(&self) -> Option<(&'static str, f32)> {
        Self::CHANNEL_NAMES
            .iter()
            .zip(self.channels())
            .find(|(_, value)| !value.is_finite())
            .map(|(name, value)| (*name, value))
    }
}

impl fmt::Display for RawColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R:{:.3} G:{:.3} B:{:.3} A:{:.3}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// A standard-range color as produced by a color picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BaseColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let map = |c: u8| c as f32 / 255.0;
        Self {
            r: map(r),
            g: map(g),
            b: map(b),
        }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let [r, g, b] = parse_hex_rgb8(hex)?;
        Some(Self::from_rgb8(r, g, b))
    }
}

/// Parses `#RRGGBB` or `RRGGBB` into its three bytes.
pub fn parse_hex_rgb8(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim();
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Clamped preview of a [`RawColor`]. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Largest color channel when it exceeds 1.0, otherwise 1.0. Reported even
    /// when the scale was not applied.
    pub scale_factor: f32,
    /// Whether the channels were divided by `scale_factor`.
    pub normalized: bool,
}

impl DisplayColor {
    pub fn to_rgb8(&self) -> [u8; 3] {
        // Truncation matches the hex shown next to the preview swatch
        [self.r, self.g, self.b].map(|c| (c * 255.0) as u8)
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// How a [`RawColor`] is mapped to its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationMode {
    /// Scale HDR colors down by their brightest channel
    #[default]
    Auto,
    /// Clamp each channel independently
    Raw,
}

impl NormalizationMode {
    pub fn toggled(self) -> Self {
        match self {
            NormalizationMode::Auto => NormalizationMode::Raw,
            NormalizationMode::Raw => NormalizationMode::Auto,
        }
    }
}

/// Intensity indicator shown beside the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HdrStatus {
    Sdr,
    HdrAuto(f32),
    HdrRaw(f32),
}

impl fmt::Display for HdrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdrStatus::Sdr => write!(f, "SDR (1.0x)"),
            HdrStatus::HdrAuto(scale) => write!(f, "HDR ({:.2}x) - Auto", scale),
            HdrStatus::HdrRaw(scale) => write!(f, "HDR ({:.2}x) - Raw", scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_hex_is_little_endian() {
        let color = RawColor::new(0.5, 1.0, 0.0, -2.0);
        assert_eq!(
            color.channel_hex(),
            [
                "0000003F".to_string(),
                "0000803F".to_string(),
                "00000000".to_string(),
                "000000C0".to_string(),
            ]
        );
    }

    #[test]
    fn test_base_color_from_hex() {
        let base = BaseColor::from_hex("#FF8000").unwrap();
        assert_eq!(base.r, 1.0);
        assert_eq!(base.g, 128.0 / 255.0);
        assert_eq!(base.b, 0.0);
        assert_eq!(BaseColor::from_hex("00ff00"), Some(BaseColor::new(0.0, 1.0, 0.0)));
        assert_eq!(BaseColor::from_hex("#FFF"), None);
        assert_eq!(BaseColor::from_hex("#GG0000"), None);
        assert_eq!(BaseColor::from_hex("#ÿÿÿ"), None);
        assert_eq!(parse_hex_rgb8(" #10a0Ff "), Some([0x10, 0xA0, 0xFF]));
    }

    #[test]
    fn test_display_hex_truncates() {
        let display = DisplayColor {
            r: 1.0,
            g: 0.5,
            b: 0.25,
            scale_factor: 2.0,
            normalized: true,
        };
        // 127.5 -> 7F, 63.75 -> 3F
        assert_eq!(display.to_hex(), "#FF7F3F");
    }

    #[test]
    fn test_first_non_finite() {
        assert_eq!(RawColor::new(1.0, 2.0, 3.0, 1.0).first_non_finite(), None);
        let (channel, value) = RawColor::new(1.0, f32::INFINITY, f32::NAN, 1.0)
            .first_non_finite()
            .unwrap();
        assert_eq!(channel, "green");
        assert_eq!(value, f32::INFINITY);
    }

    #[test]
    fn test_hdr_status_text() {
        assert_eq!(HdrStatus::Sdr.to_string(), "SDR (1.0x)");
        assert_eq!(HdrStatus::HdrAuto(2.0).to_string(), "HDR (2.00x) - Auto");
        assert_eq!(HdrStatus::HdrRaw(3.456).to_string(), "HDR (3.46x) - Raw");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(NormalizationMode::default(), NormalizationMode::Auto);
        assert_eq!(NormalizationMode::Auto.toggled(), NormalizationMode::Raw);
        assert_eq!(NormalizationMode::Raw.toggled(), NormalizationMode::Auto);
    }
}
