use crate::coords::{Rect, Vec2};

use super::Color;

/// One of the eight fixed directions a two-stop gradient can run in.
///
/// Names read `FROM_TO`: `BlTr` starts at the bottom-left corner and ends at
/// the top-right corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    LeftRight,
    BlTr,
    BottomTop,
    BrTl,
    RightLeft,
    TrBl,
    TopBottom,
    TlBr,
}

/// Orientation for each 45° step, indexed by `angle / 45` with `angle` in `[0, 360)`.
///
/// Angles run counter-clockwise: 0° points right, 90° points up.
pub const ORIENTATIONS: [Orientation; 8] = [
    Orientation::LeftRight,
    Orientation::BlTr,
    Orientation::BottomTop,
    Orientation::BrTl,
    Orientation::RightLeft,
    Orientation::TrBl,
    Orientation::TopBottom,
    Orientation::TlBr,
];

impl Orientation {
    /// Maps an angle in degrees onto the orientation table.
    ///
    /// The angle is reduced with a truncating `% 360`, so 405 selects the 45°
    /// entry. Any residual outside the table (negative, or not a multiple of
    /// 45) falls back to [`Orientation::LeftRight`].
    pub fn from_angle(degrees: i32) -> Self {
        let residual = degrees % 360;
        if residual < 0 || residual % 45 != 0 {
            return Orientation::LeftRight;
        }
        ORIENTATIONS
            .get((residual / 45) as usize)
            .copied()
            .unwrap_or(Orientation::LeftRight)
    }

    /// The canonical angle in `[0, 360)` for this orientation.
    pub fn angle(self) -> i32 {
        match self {
            Orientation::LeftRight => 0,
            Orientation::BlTr => 45,
            Orientation::BottomTop => 90,
            Orientation::BrTl => 135,
            Orientation::RightLeft => 180,
            Orientation::TrBl => 225,
            Orientation::TopBottom => 270,
            Orientation::TlBr => 315,
        }
    }

    /// Start and end points of the gradient axis inside `bounds`.
    ///
    /// Axis-aligned orientations run between opposite edge midpoints, diagonal
    /// ones between opposite corners.
    pub fn endpoints(self, bounds: Rect) -> (Vec2, Vec2) {
        let (l, t, r, b) = (bounds.left(), bounds.top(), bounds.right(), bounds.bottom());
        let c = bounds.center();
        match self {
            Orientation::LeftRight => (Vec2::new(l, c.y), Vec2::new(r, c.y)),
            Orientation::RightLeft => (Vec2::new(r, c.y), Vec2::new(l, c.y)),
            Orientation::TopBottom => (Vec2::new(c.x, t), Vec2::new(c.x, b)),
            Orientation::BottomTop => (Vec2::new(c.x, b), Vec2::new(c.x, t)),
            Orientation::BlTr => (Vec2::new(l, b), Vec2::new(r, t)),
            Orientation::TrBl => (Vec2::new(r, t), Vec2::new(l, b)),
            Orientation::BrTl => (Vec2::new(r, b), Vec2::new(l, t)),
            Orientation::TlBr => (Vec2::new(l, t), Vec2::new(r, b)),
        }
    }
}

/// Two-stop linear gradient running along a fixed [`Orientation`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LinearGradient {
    pub orientation: Orientation,
    pub start: Color,
    pub end: Color,
}

impl LinearGradient {
    #[inline]
    pub const fn new(orientation: Orientation, start: Color, end: Color) -> Self {
        Self { orientation, start, end }
    }

    /// Gradient axis inside `bounds`; see [`Orientation::endpoints`].
    #[inline]
    pub fn endpoints(&self, bounds: Rect) -> (Vec2, Vec2) {
        self.orientation.endpoints(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── angle table ───────────────────────────────────────────────────────

    #[test]
    fn table_index_is_angle_over_45() {
        for (i, expected) in ORIENTATIONS.iter().enumerate() {
            assert_eq!(Orientation::from_angle(i as i32 * 45), *expected);
        }
    }

    #[test]
    fn angles_past_360_wrap() {
        assert_eq!(Orientation::from_angle(405), Orientation::BlTr);
        assert_eq!(Orientation::from_angle(720), Orientation::LeftRight);
    }

    #[test]
    fn negative_angles_fall_back_to_left_right() {
        for angle in [-45, -90, -270, -360, -405] {
            assert_eq!(Orientation::from_angle(angle), Orientation::LeftRight, "angle {angle}");
        }
    }

    #[test]
    fn off_table_residual_falls_back() {
        assert_eq!(Orientation::from_angle(30), Orientation::LeftRight);
    }

    #[test]
    fn angle_inverts_table() {
        for o in ORIENTATIONS {
            assert_eq!(Orientation::from_angle(o.angle()), o);
        }
    }

    // ── endpoints ─────────────────────────────────────────────────────────

    #[test]
    fn axis_aligned_endpoints_use_edge_midpoints() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            Orientation::LeftRight.endpoints(bounds),
            (Vec2::new(0.0, 25.0), Vec2::new(100.0, 25.0))
        );
        assert_eq!(
            Orientation::BottomTop.endpoints(bounds),
            (Vec2::new(50.0, 50.0), Vec2::new(50.0, 0.0))
        );
    }

    #[test]
    fn diagonal_endpoints_use_corners() {
        let bounds = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(
            Orientation::BlTr.endpoints(bounds),
            (Vec2::new(10.0, 30.0), Vec2::new(30.0, 10.0))
        );
        assert_eq!(
            Orientation::TlBr.endpoints(bounds),
            (Vec2::new(10.0, 10.0), Vec2::new(30.0, 30.0))
        );
    }
}
