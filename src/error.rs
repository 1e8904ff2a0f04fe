use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum OcrError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Empty image")]
    EmptyImage,

    #[error("Invalid size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Empty database")]
    EmptyDatabase,

    #[error("Feature dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid database: {0}")]
    InvalidDatabase(String),
}

pub type Result<T> = std::result::Result<T, OcrError>;
