/// Per-corner radii for a rounded shape (device pixels).
///
/// Corners are listed clockwise from the top-left: top-left, top-right,
/// bottom-right, bottom-left. Negative values are passed through untouched;
/// backends decide how to treat them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Multiplies every radius by `factor`.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }

    /// Expands into the eight-float `(x, y)` layout backends take:
    /// `[tl, tl, tr, tr, br, br, bl, bl]`.
    ///
    /// Corners are circular, so both components of each pair are equal.
    #[inline]
    pub fn to_array(self) -> [f32; 8] {
        [
            self.top_left,
            self.top_left,
            self.top_right,
            self.top_right,
            self.bottom_right,
            self.bottom_right,
            self.bottom_left,
            self.bottom_left,
        ]
    }
}
