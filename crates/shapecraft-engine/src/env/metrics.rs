use super::DensityProvider;

/// Display configuration for a builder.
///
/// Keep this structure minimal; only the scale factor is consumed today.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per logical unit (1.0 = baseline, 2.0 = "xhdpi", ...).
    pub density: f32,
}

impl DisplayMetrics {
    #[inline]
    pub fn new(density: f32) -> Self {
        debug_assert!(
            density.is_finite() && density > 0.0,
            "DisplayMetrics::new: density must be positive and finite, got {density}"
        );
        Self { density }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DensityProvider for DisplayMetrics {
    #[inline]
    fn density(&self) -> f32 {
        self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_baseline_density() {
        assert_eq!(DisplayMetrics::default().density(), 1.0);
    }
}
