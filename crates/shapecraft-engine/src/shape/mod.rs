//! Shape descriptors and the builder that produces them.
//!
//! Responsibilities:
//! - collect density-scaled shape parameters (`ShapeBuilder`)
//! - resolve precedence between competing settings at build time
//! - hand backends an immutable, renderer-agnostic `ShapeDescriptor`

mod builder;
mod descriptor;

pub use builder::ShapeBuilder;
pub use descriptor::{Corners, ShapeDescriptor};

/// Closed set of outlines a descriptor can describe.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Rectangle, optionally with rounded corners.
    #[default]
    Rectangle,
    /// Ellipse inscribed in the bounds.
    Oval,
    /// Horizontal line through the vertical center of the bounds.
    Line,
    /// Annulus.
    Ring,
}
