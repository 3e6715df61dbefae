use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParrotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height} (expected {expected_width}x{expected_height})")]
    InvalidDimensions {
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    #[error("No foreground contour found in edge map")]
    NoForeground,

    #[error("Animation requires at least 2 frames (got {count})")]
    TooFewFrames { count: usize },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Face detection model error: {0}")]
    FaceModel(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, ParrotError>;
