use core::fmt;
use core::str::FromStr;

use crate::EngineError;

/// Straight (non-premultiplied) sRGB color with 8-bit channels.
///
/// Opacity is deliberately not part of the color. Gradient stops and solid
/// fills carry their own opacity, matching how vector documents express it
/// (`stop-color` + `stop-opacity`, `fill` + `fill-opacity`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |src: &str| u8::from_str_radix(src, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                // #abc == #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
