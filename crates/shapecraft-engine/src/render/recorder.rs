use crate::paint::{Color, Dash, LinearGradient};
use crate::shape::ShapeKind;

use super::{DrawOp, ShapeBackend};

/// Backend that records every call it receives.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OpRecorder {
    ops: Vec<DrawOp>,
}

impl OpRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in arrival order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Clears recorded ops. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Replays everything recorded so far into another backend.
    pub fn replay<B: ShapeBackend + ?Sized>(&self, backend: &mut B) {
        for op in &self.ops {
            op.apply(backend);
        }
    }
}

impl ShapeBackend for OpRecorder {
    fn set_color(&mut self, color: Color) {
        self.ops.push(DrawOp::Color(color));
    }

    fn set_gradient(&mut self, gradient: LinearGradient) {
        self.ops.push(DrawOp::Gradient(gradient));
    }

    fn set_stroke(&mut self, width: i32, color: Color) {
        self.ops.push(DrawOp::Stroke { width, color });
    }

    fn set_dashed_stroke(&mut self, width: i32, color: Color, dash: Dash) {
        self.ops.push(DrawOp::DashedStroke { width, color, dash });
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.ops.push(DrawOp::CornerRadius(radius));
    }

    fn set_corner_radii(&mut self, radii: [f32; 8]) {
        self.ops.push(DrawOp::CornerRadii(radii));
    }

    fn set_shape(&mut self, kind: ShapeKind) {
        self.ops.push(DrawOp::Shape(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ColorRef, Palette};
    use crate::paint::Orientation;
    use crate::shape::ShapeBuilder;

    fn palette() -> Palette {
        Palette::new()
            .with_color(ColorRef(1), Color(0xFFFF_0000))
            .with_color(ColorRef(2), Color(0xFF00_00FF))
    }

    // ── call order ────────────────────────────────────────────────────────

    #[test]
    fn solid_shape_emits_fill_then_shape() {
        let p = palette();
        let mut rec = OpRecorder::new();
        ShapeBuilder::new(&1.0f32, &p).solid(ColorRef(1)).build().apply(&mut rec);
        assert_eq!(
            rec.ops(),
            &[DrawOp::Color(Color(0xFFFF_0000)), DrawOp::Shape(ShapeKind::Rectangle)]
        );
    }

    #[test]
    fn full_shape_emits_fill_stroke_corners_shape() {
        let p = palette();
        let shape = ShapeBuilder::new(&2.0f32, &p)
            .gradient(ColorRef(1), ColorRef(2), 270)
            .unwrap()
            .stroke(ColorRef(2), 1.0)
            .dash(2.0, 4.0)
            .corners(1.0, 2.0, 3.0, 4.0)
            .shape(ShapeKind::Oval)
            .build();

        let mut rec = OpRecorder::new();
        shape.apply(&mut rec);

        assert_eq!(
            rec.ops(),
            &[
                DrawOp::Gradient(LinearGradient::new(
                    Orientation::TopBottom,
                    Color(0xFFFF_0000),
                    Color(0xFF00_00FF),
                )),
                DrawOp::DashedStroke { width: 2, color: Color(0xFF00_00FF), dash: Dash::new(8.0, 4.0) },
                DrawOp::CornerRadii([2.0, 2.0, 4.0, 4.0, 8.0, 8.0, 6.0, 6.0]),
                DrawOp::Shape(ShapeKind::Oval),
            ]
        );
        assert_eq!(rec.ops(), shape.to_ops().as_slice());
    }

    #[test]
    fn uniform_corner_emits_single_radius() {
        let p = palette();
        let ops = ShapeBuilder::new(&1.0f32, &p).corner(4.0).corners(1.0, 1.0, 1.0, 1.0).build().to_ops();
        assert!(ops.contains(&DrawOp::CornerRadius(4.0)));
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::CornerRadii(_))));
    }

    // ── default dashed fallback ───────────────────────────────────────────

    struct SolidOnly {
        strokes: Vec<(i32, Color)>,
    }

    impl ShapeBackend for SolidOnly {
        fn set_color(&mut self, _: Color) {}
        fn set_gradient(&mut self, _: LinearGradient) {}
        fn set_stroke(&mut self, width: i32, color: Color) {
            self.strokes.push((width, color));
        }
        fn set_corner_radius(&mut self, _: f32) {}
        fn set_corner_radii(&mut self, _: [f32; 8]) {}
        fn set_shape(&mut self, _: ShapeKind) {}
    }

    #[test]
    fn dashed_stroke_defaults_to_solid() {
        let mut backend = SolidOnly { strokes: Vec::new() };
        DrawOp::DashedStroke { width: 3, color: Color::black(), dash: Dash::new(1.0, 1.0) }.apply(&mut backend);
        assert_eq!(backend.strokes, vec![(3, Color::black())]);
    }

    #[test]
    fn replay_forwards_recorded_ops() {
        let mut first = OpRecorder::new();
        first.set_color(Color::white());
        first.set_shape(ShapeKind::Ring);

        let mut second = OpRecorder::new();
        first.replay(&mut second);
        assert_eq!(first, second);

        first.clear();
        assert!(first.ops().is_empty());
    }
}
