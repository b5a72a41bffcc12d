//! Backend seam.
//!
//! A descriptor is renderer-agnostic; backends implement [`ShapeBackend`] and
//! receive the calls a descriptor expands into. [`DrawOp`] is the same call
//! sequence as plain data, so it can be recorded, compared or replayed later.
//!
//! Extending the seam:
//! - add a method to `ShapeBackend`
//! - add a matching `DrawOp` variant and its `apply` arm
//! - emit it from `ShapeDescriptor::to_ops`

mod op;
mod recorder;

pub use op::DrawOp;
pub use recorder::OpRecorder;

use crate::paint::{Color, Dash, LinearGradient};
use crate::shape::ShapeKind;

/// Receiver for the calls a [`ShapeDescriptor`](crate::shape::ShapeDescriptor) expands into.
///
/// Calls arrive in a fixed order: fill, then stroke (if any), then corners
/// (if any), then the shape kind.
pub trait ShapeBackend {
    /// Solid interior fill.
    fn set_color(&mut self, color: Color);

    /// Gradient interior fill.
    fn set_gradient(&mut self, gradient: LinearGradient);

    /// Solid outline of `width` whole device pixels.
    fn set_stroke(&mut self, width: i32, color: Color);

    /// Dashed outline. Backends without dash support may fall back to a solid stroke.
    fn set_dashed_stroke(&mut self, width: i32, color: Color, dash: Dash) {
        let _ = dash;
        self.set_stroke(width, color);
    }

    fn set_corner_radius(&mut self, radius: f32);

    /// Eight floats, `(x, y)` pairs clockwise from the top-left corner.
    fn set_corner_radii(&mut self, radii: [f32; 8]);

    fn set_shape(&mut self, kind: ShapeKind);
}
