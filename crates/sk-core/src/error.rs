use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel buffer length does not match `rows * cols`.
    SizeMismatch { expected: usize, actual: usize },
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} pixels, got {actual}")
            }
            Self::OutOfBounds { row, col } => {
                write!(f, "pixel ({row}, {col}) is out of bounds")
            }
        }
    }
}

impl std::error::Error for Error {}
