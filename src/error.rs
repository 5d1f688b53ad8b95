use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Inverse requested for a matrix whose determinant is exactly zero.
    #[error("matrix is singular (determinant is zero) and cannot be inverted")]
    SingularMatrix,

    #[error("vector divided by zero")]
    DivisionByZero,

    #[error("expected {expected} matrix elements, got {actual}")]
    InvalidMatrixData { expected: usize, actual: usize },

    #[error("cell ({row}, {col}) is out of bounds for {size}x{size} matrix")]
    MatrixIndexOutOfBounds { row: usize, col: usize, size: usize },

    #[error("pixel ({x}, {y}) is out of bounds for {width}x{height} canvas")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid dimensions {width}x{height}, both sides must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("required field `{0}` was not set")]
    UninitializedField(&'static str),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode png: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(err.field_name())
    }
}
