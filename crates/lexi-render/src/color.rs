//! Color

/// Straight-alpha RGBA8 color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(digits, 16).ok()?;
        let byte = |shift: u32| (v >> shift) as u8;
        match digits.len() {
            // Each nibble doubles up: "f80" -> ff8800
            3 => {
                let nibble = |shift: u32| ((v >> shift) & 0xf) as u8 * 0x11;
                Some(Self::rgb(nibble(8), nibble(4), nibble(0)))
            }
            6 => Some(Self::rgb(byte(16), byte(8), byte(0))),
            8 => Some(Self::rgba(byte(24), byte(16), byte(8), byte(0))),
            _ => None,
        }
    }

    /// Same color with alpha scaled by `opacity` (0.0 - 1.0)
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}
