//! IlluminationColor1 editing pipeline
//!
//! This module locates the `IlluminationColor1` RGBA record inside an asset,
//! decodes it, previews it and writes edits back without touching any other
//! byte of the file.

pub mod color;
pub mod common;
pub mod locator;
pub mod session;

pub use common::{
    EditorError,
    Result,
};

pub use locator::{
    locate,
    MarkerLocator,
    PatternLocator,
    ILLUMINATION_COLOR_MARKER,
};

pub use color::{
    BaseColor,
    DisplayColor,
    HdrStatus,
    NormalizationMode,
    RawColor,
};

pub use session::{
    ColorSession,
    EditorConfig,
    EditorConfigBuilder,
    NonFinitePolicy,
    SessionSummary,
};
