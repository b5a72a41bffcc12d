//! Shapecraft engine crate.
//!
//! Builds immutable 2D shape descriptors (rectangle, oval, line, ring) with
//! fill, stroke, dash, corner radii and two-stop linear gradients, scaled for
//! the display density and handed to a rendering backend.
//!
//! ```
//! use shapecraft_engine::env::{ColorRef, DisplayMetrics, Palette};
//! use shapecraft_engine::paint::Color;
//! use shapecraft_engine::render::OpRecorder;
//! use shapecraft_engine::shape::ShapeBuilder;
//!
//! # fn main() -> Result<(), shapecraft_engine::ShapeError> {
//! let palette = Palette::new()
//!     .with_color(ColorRef(1), Color::from_rgb(0xFF, 0x80, 0x00))
//!     .with_color(ColorRef(2), Color::from_rgb(0x80, 0x00, 0xFF));
//!
//! let shape = ShapeBuilder::new(&DisplayMetrics::new(2.0), &palette)
//!     .corner(8.0)
//!     .gradient(ColorRef(1), ColorRef(2), 45)?
//!     .build();
//!
//! let mut backend = OpRecorder::new();
//! shape.apply(&mut backend);
//! # Ok(())
//! # }
//! ```

pub mod coords;
pub mod env;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shape;

mod error;

pub use error::ShapeError;
