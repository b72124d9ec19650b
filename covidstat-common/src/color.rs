//! Hex color parsing.

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback for hex strings of the wrong length.
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// Parse a `#rrggbb` color.
///
/// Surrounding whitespace and one leading `#` are ignored. Anything that is
/// not six characters long becomes [`Rgb::RED`]. Otherwise an optional `0x`
/// prefix is skipped and the leading run of hex digits is used, so `"12zzzz"`
/// reads as `0x12`, `"0x1234"` as `0x1234` and `"zzzzzz"` as black.
pub fn parse_hex_color(hex: &str) -> Rgb {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.chars().count() != 6 {
        return Rgb::RED;
    }

    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    let value = digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| (acc << 4) | d);

    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}
