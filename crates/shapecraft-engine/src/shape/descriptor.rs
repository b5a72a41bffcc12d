use crate::coords::CornerRadii;
use crate::paint::{Paint, Stroke};
use crate::render::{DrawOp, ShapeBackend};

use super::ShapeKind;

/// Corner rounding that survived build-time precedence.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Corners {
    /// No rounding configured.
    #[default]
    Square,
    /// Same radius on every corner (device pixels).
    Uniform(f32),
    /// Individual radii (device pixels).
    PerCorner(CornerRadii),
}

/// Immutable description of a shape, produced by [`ShapeBuilder::build`].
///
/// [`ShapeBuilder::build`]: super::ShapeBuilder::build
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub(crate) kind: ShapeKind,
    pub(crate) fill: Paint,
    pub(crate) stroke: Option<Stroke>,
    pub(crate) corners: Corners,
}

impl ShapeDescriptor {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn fill(&self) -> &Paint {
        &self.fill
    }

    /// `None` when no stroke width was configured.
    #[inline]
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    #[inline]
    pub fn corners(&self) -> Corners {
        self.corners
    }

    /// Backend call sequence for this descriptor: fill, stroke, corners, shape.
    pub fn to_ops(&self) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(4);

        ops.push(match self.fill {
            Paint::Solid(color) => DrawOp::Color(color),
            Paint::LinearGradient(gradient) => DrawOp::Gradient(gradient),
        });

        if let Some(stroke) = self.stroke {
            ops.push(match stroke.dash {
                Some(dash) => DrawOp::DashedStroke { width: stroke.width, color: stroke.color, dash },
                None => DrawOp::Stroke { width: stroke.width, color: stroke.color },
            });
        }

        match self.corners {
            Corners::Square => {}
            Corners::Uniform(radius) => ops.push(DrawOp::CornerRadius(radius)),
            Corners::PerCorner(radii) => ops.push(DrawOp::CornerRadii(radii.to_array())),
        }

        ops.push(DrawOp::Shape(self.kind));
        ops
    }

    /// Replays [`to_ops`](Self::to_ops) into `backend`.
    pub fn apply<B: ShapeBackend + ?Sized>(&self, backend: &mut B) {
        for op in self.to_ops() {
            op.apply(backend);
        }
    }
}
