use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::color_pipeline::{
    color::{
        self, BaseColor, DisplayColor, HdrStatus, NormalizationMode, RawColor,
    },
    common::error::{EditorError, Result},
    locator::{MarkerLocator, PatternLocator},
    session::types::{EditorConfig, NonFinitePolicy},
};

/// A file that has been located and decoded.
#[derive(Debug, Clone)]
struct LoadedFile {
    buffer: Vec<u8>,
    source: Option<PathBuf>,
    offset: usize,
    original: RawColor,
    current: RawColor,
}

/// Everything a front end needs to render the current state.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub file_name: Option<String>,
    pub file_size: usize,
    pub offset: usize,
    pub original: RawColor,
    pub current: RawColor,
    pub display: DisplayColor,
    pub status: HdrStatus,
    pub mode: NormalizationMode,
}

/// Editing session for a single asset.
///
/// The session owns the file contents. Edits only change the in-memory
/// current color until [`ColorSession::to_bytes`] or one of the save methods
/// encodes it back into the buffer.
pub struct ColorSession<L: PatternLocator = MarkerLocator> {
    locator: L,
    config: EditorConfig,
    mode: NormalizationMode,
    file: Option<LoadedFile>,
}

impl ColorSession<MarkerLocator> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_custom(MarkerLocator, config)
    }
}

impl<L: PatternLocator> ColorSession<L> {
    pub fn with_custom(locator: L, config: EditorConfig) -> Self {
        let mode = config.normalization;
        Self {
            locator,
            config,
            mode,
            file: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    fn loaded(&self) -> Result<&LoadedFile> {
        self.file.as_ref().ok_or(EditorError::NotLoaded)
    }

    fn loaded_mut(&mut self) -> Result<&mut LoadedFile> {
        self.file.as_mut().ok_or(EditorError::NotLoaded)
    }

    /// Locates and decodes the color record. On failure the session keeps
    /// whatever file it had before.
    #[instrument(skip(self, buffer), fields(buffer_size = buffer.len()))]
    pub fn load_bytes(&mut self, buffer: Vec<u8>) -> Result<RawColor> {
        self.load(buffer, None)
    }

    #[instrument(skip(self, path))]
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<RawColor> {
        let path = path.as_ref();
        info!(input = %path.display(), "Opening file");

        let buffer = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                EditorError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        self.load(buffer, Some(path.to_path_buf()))
    }

    fn load(&mut self, buffer: Vec<u8>, source: Option<PathBuf>) -> Result<RawColor> {
        let offset = {
            let _span = tracing::info_span!("locate_marker").entered();
            self.locator.locate_field(&buffer).inspect_err(|e| {
                warn!("Rejecting file: {}", e);
            })?
        };

        let color = {
            let _span = tracing::info_span!("decode_color", offset).entered();
            color::decode(&buffer, offset)?
        };

        if let Some((channel, value)) = color.first_non_finite() {
            match self.config.non_finite {
                NonFinitePolicy::Reject => {
                    return Err(EditorError::NonFiniteChannel { channel, value });
                }
                NonFinitePolicy::PassThrough => {
                    warn!("Non-finite {} channel ({}) kept as stored", channel, value);
                }
            }
        }

        info!(offset, size = buffer.len(), "IlluminationColor1 located");
        info!(
            "Loaded {} color - {}",
            if color.is_hdr() { "HDR" } else { "SDR" },
            color
        );
        if color.is_hdr() {
            info!("HDR detected with scale factor: {:.3}x", color.max_rgb());
        }

        self.file = Some(LoadedFile {
            buffer,
            source,
            offset,
            original: color,
            current: color,
        });
        Ok(color)
    }

    pub fn is_loaded(&self) -> bool {
        self.file.is_some()
    }

    pub fn offset(&self) -> Result<usize> {
        Ok(self.loaded()?.offset)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.file.as_ref()?.source.as_deref()
    }

    pub fn original(&self) -> Result<RawColor> {
        Ok(self.loaded()?.original)
    }

    pub fn current(&self) -> Result<RawColor> {
        Ok(self.loaded()?.current)
    }

    pub fn set_color(&mut self, color: RawColor) -> Result<()> {
        self.loaded_mut()?.current = color;
        Ok(())
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: NormalizationMode) {
        if mode != self.mode {
            info!("Normalization mode: {:?}", mode);
        }
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> NormalizationMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn display(&self) -> Result<DisplayColor> {
        Ok(color::to_display(&self.loaded()?.current, self.mode))
    }

    pub fn hdr_status(&self) -> Result<HdrStatus> {
        Ok(color::hdr_status(&self.loaded()?.current, self.mode))
    }

    /// Restores the color decoded at load time.
    pub fn reset(&mut self) -> Result<RawColor> {
        let file = self.loaded_mut()?;
        file.current = file.original;
        info!("Reset to original values: {}", file.current);
        Ok(file.current)
    }

    /// Commits [`color::manual_normalize`] to the current color. Returns the
    /// factor divided out, or `None` when the color was already in range.
    pub fn normalize(&mut self) -> Result<Option<f32>> {
        let file = self.loaded_mut()?;
        let m = file.current.max_rgb();
        if m <= 1.0 {
            info!("No manual normalization needed (max value <= 1.0)");
            return Ok(None);
        }
        file.current = color::manual_normalize(&file.current);
        info!("Normalized by factor of {:.3} (was HDR, now SDR)", m);
        Ok(Some(m))
    }

    /// Stores a color chosen from a standard 0-255 picker. While the preview
    /// is auto-normalized the pick is taken relative to that preview, so the
    /// current HDR scale is multiplied back in.
    pub fn apply_standard_pick(&mut self, rgb: [u8; 3]) -> Result<RawColor> {
        let display = self.display()?;
        let scale = if display.normalized && self.config.preserve_hdr_scale_on_pick {
            display.scale_factor
        } else {
            1.0
        };

        let base = BaseColor::from_rgb8(rgb[0], rgb[1], rgb[2]);
        let file = self.loaded_mut()?;
        file.current = color::from_base_and_intensity(&base, scale).with_alpha(file.current.alpha);
        if scale > 1.0 {
            info!("Applied HDR scale {:.3}x: {}", scale, file.current);
        }
        Ok(file.current)
    }

    /// Starting intensity for an HDR pick: the current brightest channel when
    /// it is a finite HDR value, otherwise 1.0.
    pub fn default_hdr_intensity(&self) -> Result<f32> {
        let m = self.loaded()?.current.max_rgb();
        Ok(if m > 1.0 && m.is_finite() { m } else { 1.0 })
    }

    /// Stores `base * intensity`, keeping alpha.
    pub fn apply_hdr_pick(&mut self, base: BaseColor, intensity: f32) -> Result<RawColor> {
        let file = self.loaded_mut()?;
        file.current =
            color::from_base_and_intensity(&base, intensity).with_alpha(file.current.alpha);
        info!("Intensity multiplier: {:.1}x, new color {}", intensity, file.current);
        Ok(file.current)
    }

    /// Encodes the current color into the buffer and returns the whole file.
    pub fn to_bytes(&mut self) -> Result<&[u8]> {
        let file = self.loaded_mut()?;
        {
            let _span = tracing::info_span!("encode_color", offset = file.offset).entered();
            color::encode(&mut file.buffer, file.offset, &file.current)?;
        }
        Ok(file.buffer.as_slice())
    }

    /// Commits and writes the whole buffer to `path`, which may differ from
    /// the file the session was loaded from.
    #[instrument(skip(self, path))]
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let current = self.current()?;

        let bytes = self.to_bytes()?;
        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(path, bytes).map_err(|e| {
                EditorError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?;
        }

        info!(output = %path.display(), "File saved, final raw values - {}", current);
        if current.is_hdr() {
            info!("HDR values preserved: {:.3}x intensity", current.max_rgb());
        }
        Ok(())
    }

    /// Saves back over the file the session was loaded from.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .source_path()
            .map(Path::to_path_buf)
            .ok_or_else(|| EditorError::OutputWriteError("session has no source path".to_string()))?;
        self.save_to(path)
    }

    pub fn summary(&self) -> Result<SessionSummary> {
        let file = self.loaded()?;
        Ok(SessionSummary {
            file_name: file
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned()),
            file_size: file.buffer.len(),
            offset: file.offset,
            original: file.original,
            current: file.current,
            display: color::to_display(&file.current, self.mode),
            status: color::hdr_status(&file.current, self.mode),
            mode: self.mode,
        })
    }
}
