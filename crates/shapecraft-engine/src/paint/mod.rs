//! Paint model handed to backends.
//!
//! Scope:
//! - color representation (packed ARGB, text parsing)
//! - fill sources (solid, two-stop linear gradient)
//! - stroke outline and dash pattern
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod stroke;

pub use color::{Color, ColorParseError};
pub use gradient::{LinearGradient, ORIENTATIONS, Orientation};
pub use stroke::{Dash, Stroke};

/// Fill source for a shape's interior.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}
