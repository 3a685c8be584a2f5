use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemosaicError {
    #[error("Invalid CFA pattern: expected 1 red, 2 green, 1 blue cells, found {red} red, {green} green, {blue} blue")]
    InvalidPattern { red: usize, green: usize, blue: usize },

    #[error("Unknown CFA pattern name: {0}")]
    UnknownPattern(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample buffer length mismatch: expected {expected}, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Demosaicing cancelled after {rows_completed} rows")]
    Cancelled { rows_completed: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemosaicError {
    /// The CFA pattern itself is unusable.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. } | Self::UnknownPattern(_))
    }

    /// The sensor image handed to the engine is malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDimensions(..) | Self::BufferSizeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, DemosaicError>;
