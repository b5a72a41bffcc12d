use super::Color;

/// Dash pattern for a stroked outline (device pixels).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    /// Length of each drawn segment.
    pub width: f32,
    /// Length of each gap between segments.
    pub gap: f32,
}

impl Dash {
    #[inline]
    pub const fn new(width: f32, gap: f32) -> Self {
        Self { width, gap }
    }

    /// Returns a dash only when both lengths are non-zero.
    ///
    /// A single non-zero length describes no usable pattern and yields `None`,
    /// which leaves the stroke solid.
    #[inline]
    pub fn active(width: f32, gap: f32) -> Option<Self> {
        (width != 0.0 && gap != 0.0).then_some(Self { width, gap })
    }
}

/// Outline drawn along the edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in whole device pixels.
    pub width: i32,
    pub color: Color,
    /// `None` for a solid stroke.
    pub dash: Option<Dash>,
}

impl Stroke {
    #[inline]
    pub const fn solid(width: i32, color: Color) -> Self {
        Self { width, color, dash: None }
    }

    #[inline]
    pub const fn dashed(width: i32, color: Color, dash: Dash) -> Self {
        Self { width, color, dash: Some(dash) }
    }

    /// Rounds a fractional device width to the nearest whole pixel (`floor(w + 0.5)`).
    #[inline]
    pub fn round_width(width: f32) -> i32 {
        (width + 0.5).floor() as i32
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_needs_both_lengths() {
        assert_eq!(Dash::active(3.0, 0.0), None);
        assert_eq!(Dash::active(0.0, 3.0), None);
        assert_eq!(Dash::active(2.0, 3.0), Some(Dash::new(2.0, 3.0)));
    }

    #[test]
    fn round_width_half_up() {
        assert_eq!(Stroke::round_width(6.0), 6);
        assert_eq!(Stroke::round_width(2.5), 3);
        assert_eq!(Stroke::round_width(2.49), 2);
        assert_eq!(Stroke::round_width(-2.5), -2);
        assert_eq!(Stroke::round_width(-2.6), -3);
    }

    #[test]
    fn dashed_constructor_marks_dashed() {
        let s = Stroke::dashed(2, Color::black(), Dash::new(4.0, 2.0));
        assert!(s.is_dashed());
        assert!(!Stroke::solid(2, Color::black()).is_dashed());
    }
}
