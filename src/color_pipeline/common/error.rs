use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IlluminationColor1 marker not found in buffer")]
    MarkerNotFound,

    #[error("Marker found but no null terminator follows it (searched from byte {marker_end})")]
    TerminatorNotFound { marker_end: usize },

    #[error("Buffer too short for color field: need {required} bytes from offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        required: usize,
        len: usize,
    },

    #[error("Non-finite {channel} channel value: {value}")]
    NonFiniteChannel { channel: &'static str, value: f32 },

    #[error("No file loaded")]
    NotLoaded,

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EditorError {
    /// Both "not found" kinds reject the file the same way.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EditorError::MarkerNotFound | EditorError::TerminatorNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
