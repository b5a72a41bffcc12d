use crate::paint::{Color, Dash, LinearGradient};
use crate::shape::ShapeKind;

use super::ShapeBackend;

/// One backend call, recorded as data.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawOp {
    Color(Color),
    Gradient(LinearGradient),
    Stroke { width: i32, color: Color },
    DashedStroke { width: i32, color: Color, dash: Dash },
    CornerRadius(f32),
    CornerRadii([f32; 8]),
    Shape(ShapeKind),
}

impl DrawOp {
    /// Issues this op against `backend`.
    pub fn apply<B: ShapeBackend + ?Sized>(self, backend: &mut B) {
        match self {
            DrawOp::Color(color) => backend.set_color(color),
            DrawOp::Gradient(gradient) => backend.set_gradient(gradient),
            DrawOp::Stroke { width, color } => backend.set_stroke(width, color),
            DrawOp::DashedStroke { width, color, dash } => backend.set_dashed_stroke(width, color, dash),
            DrawOp::CornerRadius(radius) => backend.set_corner_radius(radius),
            DrawOp::CornerRadii(radii) => backend.set_corner_radii(radii),
            DrawOp::Shape(kind) => backend.set_shape(kind),
        }
    }
}
