//! Environment collaborators the shape builder depends on.
//!
//! The builder never looks anything up globally. Screen density and color
//! resource resolution are injected through the two traits below.

mod metrics;
mod palette;

pub use metrics::DisplayMetrics;
pub use palette::Palette;

use crate::paint::Color;

/// Opaque reference to a color resource (palette slot, theme attribute, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorRef(pub u32);

/// Supplies the device-pixels-per-logical-unit scale factor.
///
/// Contract: returns a positive value that does not change while builders
/// created from it are alive.
pub trait DensityProvider {
    fn density(&self) -> f32;
}

/// Maps a [`ColorRef`] to a concrete color.
///
/// Behavior for ids the resolver does not know is up to the resolver.
pub trait ColorResolver {
    fn resolve(&self, color: ColorRef) -> Color;
}

impl<F> ColorResolver for F
where
    F: Fn(ColorRef) -> Color,
{
    #[inline]
    fn resolve(&self, color: ColorRef) -> Color {
        self(color)
    }
}

impl DensityProvider for f32 {
    #[inline]
    fn density(&self) -> f32 {
        *self
    }
}
