//! Geometry types shared by the paint model and shape descriptors.
//!
//! Canonical space:
//! - Device pixels (density already applied)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
