pub mod array;
pub mod geometry;
pub mod image;

pub use array::*;
pub use geometry::*;
pub use self::image::*;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Incompatible numpy array dimensions: expected 2 or 3, got {0}")]
    IncompatibleDimensions(usize),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
