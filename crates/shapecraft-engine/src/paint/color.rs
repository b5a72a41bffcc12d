use std::fmt;
use std::str::FromStr;

/// Packed 32-bit ARGB color, straight (non-premultiplied) alpha.
///
/// Layout is `0xAARRGGBB`, the integer form color resources and hex literals
/// resolve to. Backends convert to whatever float/premultiplied form they need.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self(0x0000_0000)
    }

    #[inline]
    pub const fn black() -> Self {
        Self(0xFF00_0000)
    }

    #[inline]
    pub const fn white() -> Self {
        Self(0xFFFF_FFFF)
    }

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Opaque color from a `0xRRGGBB` value; any alpha bits in `rgb` are replaced.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses a textual color.
    ///
    /// Accepted forms:
    /// - `#RRGGBB` (opaque) and `#AARRGGBB`
    /// - a named color (`red`, `grey`, `navy`, ...), case-insensitive
    ///
    /// Surrounding whitespace is not stripped; callers trim first if needed.
    pub fn parse(src: &str) -> Result<Self, ColorParseError> {
        if let Some(hex) = src.strip_prefix('#') {
            return parse_hex(src, hex);
        }
        named(src).ok_or_else(|| ColorParseError::new(src, "unknown color name"))
    }
}

fn parse_hex(src: &str, hex: &str) -> Result<Color, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(src, "non-hex digit in color literal"));
    }
    // Validated above, and at most 8 hex digits fit in u32.
    let value = match hex.len() {
        6 | 8 => u32::from_str_radix(hex, 16)
            .map_err(|_| ColorParseError::new(src, "invalid hex color"))?,
        n => {
            return Err(ColorParseError::new(
                src,
                if n == 0 { "empty color literal" } else { "color literal must be #rrggbb or #aarrggbb" },
            ));
        }
    };
    Ok(if hex.len() == 6 { Color::from_rgb_u32(value) } else { Color(value) })
}

fn named(name: &str) -> Option<Color> {
    const NAMED: &[(&str, u32)] = &[
        ("black", 0xFF00_0000),
        ("darkgray", 0xFF44_4444),
        ("darkgrey", 0xFF44_4444),
        ("gray", 0xFF88_8888),
        ("grey", 0xFF88_8888),
        ("lightgray", 0xFFCC_CCCC),
        ("lightgrey", 0xFFCC_CCCC),
        ("white", 0xFFFF_FFFF),
        ("red", 0xFFFF_0000),
        ("green", 0xFF00_FF00),
        ("blue", 0xFF00_00FF),
        ("yellow", 0xFFFF_FF00),
        ("cyan", 0xFF00_FFFF),
        ("magenta", 0xFFFF_00FF),
        ("aqua", 0xFF00_FFFF),
        ("fuchsia", 0xFFFF_00FF),
        ("lime", 0xFF00_FF00),
        ("maroon", 0xFF80_0000),
        ("navy", 0xFF00_0080),
        ("olive", 0xFF80_8000),
        ("purple", 0xFF80_0080),
        ("silver", 0xFFC0_C0C0),
        ("teal", 0xFF00_8080),
    ];
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, argb)| Color(argb))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// A malformed textual color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self { input: input.into(), reason }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    // ── channels ──────────────────────────────────────────────────────────

    #[test]
    fn channels_unpack_argb() {
        let c = Color(0x80FF_4020);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0xFF);
        assert_eq!(c.green(), 0x40);
        assert_eq!(c.blue(), 0x20);
        assert_eq!(Color::from_argb(0x80, 0xFF, 0x40, 0x20), c);
    }

    #[test]
    fn from_rgb_u32_forces_opaque() {
        assert_eq!(Color::from_rgb_u32(0xFF0000), Color(0xFFFF_0000));
        assert_eq!(Color::from_rgb_u32(0x12FF_0000), Color(0xFFFF_0000));
    }

    // ── parse: hex ────────────────────────────────────────────────────────

    #[test]
    fn parse_rrggbb_is_opaque() {
        assert_eq!(Color::parse("#FF0000").unwrap(), Color(0xFFFF_0000));
        assert_eq!(Color::parse("#00ff7f").unwrap(), Color(0xFF00_FF7F));
    }

    #[test]
    fn parse_aarrggbb_keeps_alpha() {
        assert_eq!(Color::parse("#80112233").unwrap(), Color(0x8011_2233));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Color::parse("#FFF").is_err());
        assert!(Color::parse("#").is_err());
        assert!(Color::parse("#1234567").is_err());
    }

    #[test]
    fn parse_rejects_sign_prefix() {
        // from_str_radix would accept a leading '+'.
        assert!(Color::parse("#+FF0000").is_err());
    }

    // ── parse: names ──────────────────────────────────────────────────────

    #[test]
    fn parse_named_case_insensitive() {
        assert_eq!(Color::parse("Red").unwrap(), Color(0xFFFF_0000));
        assert_eq!(Color::parse("LIGHTGREY").unwrap(), Color(0xFFCC_CCCC));
        assert_eq!(Color::parse("teal").unwrap(), Color(0xFF00_8080));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert_eq!(err.input, "not-a-color");
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let c: Color = "#0000FF".parse().unwrap();
        assert_eq!(c, Color(0xFF00_00FF));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color(0xFF00_00FF).to_string(), "#FF0000FF");
    }
}
