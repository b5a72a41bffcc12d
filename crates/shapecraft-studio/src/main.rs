use anyhow::Context;
use shapecraft_engine::coords::Rect;
use shapecraft_engine::env::{ColorRef, DisplayMetrics, Palette};
use shapecraft_engine::logging::{LoggingConfig, init_logging};
use shapecraft_engine::paint::{Color, Dash, LinearGradient};
use shapecraft_engine::render::ShapeBackend;
use shapecraft_engine::shape::{ShapeBuilder, ShapeKind};

const ACCENT: ColorRef = ColorRef(1);
const SURFACE: ColorRef = ColorRef(2);
const OUTLINE: ColorRef = ColorRef(3);
const SUNSET: ColorRef = ColorRef(4);

/// Backend that narrates every call through the logger.
struct LogBackend {
    name: &'static str,
    /// Device-pixel bounds the shape would be laid out in.
    bounds: Rect,
}

impl LogBackend {
    fn new(name: &'static str, bounds: Rect) -> Self {
        Self { name, bounds }
    }
}

impl ShapeBackend for LogBackend {
    fn set_color(&mut self, color: Color) {
        log::info!("[{}] fill       {}", self.name, color);
    }

    fn set_gradient(&mut self, gradient: LinearGradient) {
        let (from, to) = gradient.endpoints(self.bounds);
        log::info!(
            "[{}] gradient   {} -> {} ({:?}, {} deg) from ({}, {}) to ({}, {})",
            self.name,
            gradient.start,
            gradient.end,
            gradient.orientation,
            gradient.orientation.angle(),
            from.x,
            from.y,
            to.x,
            to.y
        );
    }

    fn set_stroke(&mut self, width: i32, color: Color) {
        log::info!("[{}] stroke     {}px {}", self.name, width, color);
    }

    fn set_dashed_stroke(&mut self, width: i32, color: Color, dash: Dash) {
        log::info!(
            "[{}] stroke     {}px {} dashed {}/{}",
            self.name,
            width,
            color,
            dash.width,
            dash.gap
        );
    }

    fn set_corner_radius(&mut self, radius: f32) {
        log::info!("[{}] radius     {}", self.name, radius);
    }

    fn set_corner_radii(&mut self, radii: [f32; 8]) {
        log::info!("[{}] radii      {:?}", self.name, radii);
    }

    fn set_shape(&mut self, kind: ShapeKind) {
        log::info!("[{}] shape      {:?}", self.name, kind);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let metrics = DisplayMetrics::new(2.0);
    let palette = Palette::new()
        .with_color(ACCENT, Color::from_rgb_u32(0x3D5AFE))
        .with_color(SURFACE, Color::from_rgb_u32(0xFAFAFA))
        .with_color(OUTLINE, Color::from_rgb_u32(0xBDBDBD))
        .with_color(SUNSET, Color::from_rgb_u32(0xFF7043));

    log::info!("density {}, {} palette entries", metrics.density, palette.len());

    // ── button: solid fill, rounded ───────────────────────────────────────
    let button = ShapeBuilder::new(&metrics, &palette)
        .solid(ACCENT)
        .corner(6.0)
        .build();
    button.apply(&mut LogBackend::new("button", Rect::new(0.0, 0.0, 240.0, 96.0)));

    // ── card: outlined, top corners rounded only ──────────────────────────
    let card = ShapeBuilder::new(&metrics, &palette)
        .solid(SURFACE)
        .stroke(OUTLINE, 1.0)
        .corners(12.0, 12.0, 0.0, 0.0)
        .build();
    card.apply(&mut LogBackend::new("card", Rect::new(0.0, 0.0, 640.0, 400.0)));

    // ── badge: gradient oval with a dashed text-specified outline ─────────
    let badge = ShapeBuilder::new(&metrics, &palette)
        .shape(ShapeKind::Oval)
        .gradient(ACCENT, SUNSET, 315)
        .context("badge gradient")?
        .try_stroke_str("#80FFFFFF", 1.5)
        .context("badge outline")?
        .dash(2.0, 4.0)
        .build();
    badge.apply(&mut LogBackend::new("badge", Rect::new(0.0, 0.0, 64.0, 64.0)));

    // ── divider: line with a malformed color, kept for the warning ────────
    let divider = ShapeBuilder::new(&metrics, &palette)
        .shape(ShapeKind::Line)
        .stroke(OUTLINE, 0.5)
        .stroke_str("#GGGGGG", 0.5)
        .build();
    divider.apply(&mut LogBackend::new("divider", Rect::new(0.0, 0.0, 640.0, 2.0)));

    Ok(())
}
