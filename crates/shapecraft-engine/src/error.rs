use std::fmt;

use crate::paint::ColorParseError;

/// Errors raised while configuring a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Gradient angle is not a multiple of 45 degrees.
    InvalidAngle(i32),
    /// Textual color could not be parsed (strict stroke setter only).
    ParseColor(ColorParseError),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidAngle(angle) => {
                write!(f, "gradient angle must be a multiple of 45, got {}", angle)
            }
            ShapeError::ParseColor(err) => write!(f, "stroke color: {}", err),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::InvalidAngle(_) => None,
            ShapeError::ParseColor(err) => Some(err),
        }
    }
}

impl From<ColorParseError> for ShapeError {
    fn from(err: ColorParseError) -> Self {
        ShapeError::ParseColor(err)
    }
}
