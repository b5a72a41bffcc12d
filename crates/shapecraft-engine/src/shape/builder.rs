use crate::coords::CornerRadii;
use crate::env::{ColorRef, ColorResolver, DensityProvider};
use crate::error::ShapeError;
use crate::paint::{Color, Dash, LinearGradient, Orientation, Paint, Stroke};

use super::{Corners, ShapeDescriptor, ShapeKind};

/// Fluent builder for [`ShapeDescriptor`].
///
/// Every length is given in logical units and multiplied by the density read
/// from the [`DensityProvider`] at construction. Setters consume and return the
/// builder; [`build`](Self::build) consumes it for good.
///
/// ```
/// use shapecraft_engine::env::{ColorRef, DisplayMetrics, Palette};
/// use shapecraft_engine::paint::Color;
/// use shapecraft_engine::shape::{ShapeBuilder, ShapeKind};
///
/// let palette = Palette::new().with_color(ColorRef(1), Color::from_rgb(0x33, 0x66, 0x99));
/// let shape = ShapeBuilder::new(&DisplayMetrics::new(2.0), &palette)
///     .shape(ShapeKind::Oval)
///     .solid(ColorRef(1))
///     .stroke_str("#FFFFFF", 1.0)
///     .build();
///
/// assert_eq!(shape.stroke().map(|s| s.width), Some(2));
/// ```
pub struct ShapeBuilder<'a> {
    density: f32,
    colors: &'a dyn ColorResolver,

    kind: ShapeKind,
    radius: f32,
    radii: Option<CornerRadii>,

    fill_color: Color,
    gradient: Option<[Color; 2]>,
    angle: i32,

    stroke_width: f32,
    stroke_color: Color,
    dash_width: f32,
    dash_gap: f32,
}

impl<'a> ShapeBuilder<'a> {
    pub fn new<D>(density: &D, colors: &'a dyn ColorResolver) -> Self
    where
        D: DensityProvider + ?Sized,
    {
        Self {
            density: density.density(),
            colors,
            kind: ShapeKind::default(),
            radius: 0.0,
            radii: None,
            fill_color: Color::transparent(),
            gradient: None,
            angle: 0,
            stroke_width: 0.0,
            stroke_color: Color::transparent(),
            dash_width: 0.0,
            dash_gap: 0.0,
        }
    }

    // ── corners ───────────────────────────────────────────────────────────

    /// Same radius on all four corners. Takes precedence over [`corners`](Self::corners)
    /// whenever it is non-zero.
    pub fn corner(mut self, radius: f32) -> Self {
        self.radius = radius * self.density;
        self
    }

    /// Individual corner radii. Note the argument order: both top corners,
    /// then both bottom corners.
    pub fn corners(mut self, top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        self.radii = Some(CornerRadii::new(top_left, top_right, bottom_right, bottom_left).scaled(self.density));
        self
    }

    // ── fill ──────────────────────────────────────────────────────────────

    /// Solid fill. Ignored at build time if a gradient is set.
    pub fn solid(mut self, color: ColorRef) -> Self {
        self.fill_color = self.colors.resolve(color);
        self
    }

    /// Two-stop gradient fill; replaces any solid fill.
    ///
    /// `angle` selects one of eight directions (0 = left to right, 90 = bottom
    /// to top, ...) and must be a multiple of 45. Angles of 360 and above are
    /// reduced with `% 360` at build time; negative angles select left to right.
    pub fn gradient(self, start: ColorRef, end: ColorRef, angle: i32) -> Result<Self, ShapeError> {
        check_angle(angle)?;
        let start = self.colors.resolve(start);
        let end = self.colors.resolve(end);
        self.gradient_colors(start, end, angle)
    }

    /// Like [`gradient`](Self::gradient) with already resolved colors.
    pub fn gradient_colors(mut self, start: Color, end: Color, angle: i32) -> Result<Self, ShapeError> {
        check_angle(angle)?;
        self.gradient = Some([start, end]);
        self.angle = angle;
        Ok(self)
    }

    // ── outline ───────────────────────────────────────────────────────────

    pub fn shape(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Stroke with a palette color. A width of zero disables the stroke.
    pub fn stroke(mut self, color: ColorRef, width: f32) -> Self {
        self.stroke_width = width * self.density;
        self.stroke_color = self.colors.resolve(color);
        self
    }

    /// Stroke with a textual color such as `"#RRGGBB"` or `"navy"`.
    ///
    /// The width is always applied. Blank or malformed color text leaves the
    /// previous stroke color in place; the parse failure is only logged. Use
    /// [`try_stroke_str`](Self::try_stroke_str) to observe it.
    pub fn stroke_str(mut self, color: &str, width: f32) -> Self {
        self.stroke_width = width * self.density;
        let color = color.trim();
        if !color.is_empty() {
            match Color::parse(color) {
                Ok(parsed) => self.stroke_color = parsed,
                Err(err) => log::warn!("keeping previous stroke color: {}", err),
            }
        }
        self
    }

    /// Strict form of [`stroke_str`](Self::stroke_str): malformed color text is
    /// returned as [`ShapeError::ParseColor`] and nothing is applied.
    pub fn try_stroke_str(mut self, color: &str, width: f32) -> Result<Self, ShapeError> {
        let color = color.trim();
        let parsed = if color.is_empty() { None } else { Some(Color::parse(color)?) };
        self.stroke_width = width * self.density;
        if let Some(parsed) = parsed {
            self.stroke_color = parsed;
        }
        Ok(self)
    }

    /// Stroke with an already resolved color.
    pub fn stroke_color(mut self, width: f32, color: Color) -> Self {
        self.stroke_width = width * self.density;
        self.stroke_color = color;
        self
    }

    /// Dash pattern for the stroke. Only takes effect when both lengths are non-zero.
    pub fn dash(mut self, gap: f32, width: f32) -> Self {
        self.dash_gap = gap * self.density;
        self.dash_width = width * self.density;
        self
    }

    // ── build ─────────────────────────────────────────────────────────────

    /// Resolves precedence and produces the descriptor.
    ///
    /// - a gradient beats the solid fill
    /// - a non-zero stroke width enables the stroke, dashed only if both dash
    ///   lengths are non-zero
    /// - a non-zero uniform radius beats per-corner radii
    pub fn build(self) -> ShapeDescriptor {
        let fill = match self.gradient {
            Some([start, end]) => {
                Paint::LinearGradient(LinearGradient::new(Orientation::from_angle(self.angle), start, end))
            }
            None => Paint::Solid(self.fill_color),
        };

        let stroke = (self.stroke_width != 0.0).then(|| {
            let width = Stroke::round_width(self.stroke_width);
            match Dash::active(self.dash_width, self.dash_gap) {
                Some(dash) => Stroke::dashed(width, self.stroke_color, dash),
                None => Stroke::solid(width, self.stroke_color),
            }
        });

        let corners = if self.radius != 0.0 {
            Corners::Uniform(self.radius)
        } else if let Some(radii) = self.radii {
            Corners::PerCorner(radii)
        } else {
            Corners::Square
        };

        let descriptor = ShapeDescriptor { kind: self.kind, fill, stroke, corners };
        log::debug!("built shape {:?}", descriptor);
        descriptor
    }
}

fn check_angle(angle: i32) -> Result<(), ShapeError> {
    if angle % 45 != 0 {
        return Err(ShapeError::InvalidAngle(angle));
    }
    Ok(())
}
