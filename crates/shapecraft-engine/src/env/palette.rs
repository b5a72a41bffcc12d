use std::collections::HashMap;

use crate::paint::Color;

use super::{ColorRef, ColorResolver};

/// Table-backed [`ColorResolver`].
///
/// Unknown references resolve to transparent and are reported at `warn`.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: HashMap<ColorRef, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, id: ColorRef, color: Color) -> Self {
        self.colors.insert(id, color);
        self
    }

    pub fn get(&self, id: ColorRef) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, color: ColorRef) -> Color {
        self.get(color).unwrap_or_else(|| {
            log::warn!("palette has no entry for {:?}; using transparent", color);
            Color::transparent()
        })
    }
}

impl FromIterator<(ColorRef, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (ColorRef, Color)>>(iter: I) -> Self {
        Self { colors: iter.into_iter().collect() }
    }
}
