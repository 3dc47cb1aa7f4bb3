//! Error types for projection operations.

use thiserror::Error;

use crate::{Anglef32, Intensityf32};

/// Errors that can occur while building a sinogram.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Input image has a zero dimension.
    #[error("image has a zero dimension: {height}x{width}")]
    EmptyImage {
        /// Number of rows in the offending image
        height: usize,
        /// Number of columns in the offending image
        width: usize,
    },

    /// A non-finite intensity entered (or came out of) the interpolation.
    #[error("non-finite intensity {value} at pixel ({row}, {col})")]
    NonFiniteInput {
        row: usize,
        col: usize,
        value: Intensityf32,
    },

    /// A projection angle was NaN or infinite.
    #[error("non-finite projection angle {angle} degrees")]
    NonFiniteAngle { angle: Anglef32 },
}

/// The two failure categories: malformed shape/parameter vs numeric trouble
/// during interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Numeric,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyImage     { .. } => ErrorKind::InvalidInput,
            Error::NonFiniteInput { .. } => ErrorKind::Numeric,
            Error::NonFiniteAngle { .. } => ErrorKind::Numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(Error::EmptyImage { height: 0, width: 9 }.kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::NonFiniteInput { row: 1, col: 2, value: f32::NAN }.kind(), ErrorKind::Numeric);
        assert_eq!(Error::NonFiniteAngle { angle: f32::INFINITY }.kind(), ErrorKind::Numeric);
    }

    #[test]
    fn messages_name_the_location() {
        let msg = Error::NonFiniteInput { row: 3, col: 7, value: f32::INFINITY }.to_string();
        assert!(msg.contains("(3, 7)"));
    }
}
