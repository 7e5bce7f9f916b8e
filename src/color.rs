//! Byte-channel RGB color with hex parsing, HSL construction, and linear
//! interpolation. Opacity is not stored; it is supplied where materials are
//! built, via [`Color::srgba`].

use crate::ArticleError;
use error_stack::{Report, ResultExt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn parse(s: &str) -> crate::Result<Color> {
        let well_formed =
            s.len() == 7 && s.starts_with('#') && s[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(Report::new(ArticleError)
                .attach_printable(format!("malformed hex color {s:?}, expected #rrggbb")));
        }
        let r = u8::from_str_radix(&s[1..3], 16).change_context(ArticleError)?;
        let g = u8::from_str_radix(&s[3..5], 16).change_context(ArticleError)?;
        let b = u8::from_str_radix(&s[5..7], 16).change_context(ArticleError)?;
        Ok(Color::rgb(r, g, b))
    }

    /// Standard HSL to RGB conversion. All of `h`, `s`, `l` are in [0, 1].
    pub fn hsl(h: f64, s: f64, l: f64) -> Color {
        fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let (r, g, b) = if s == 0.0 {
            // achromatic
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Color::rgb(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Blend each channel independently, rounding half away from zero when
    /// quantizing back to bytes.
    pub fn lerp(&self, other: Color, t: f64) -> Color {
        let channel = |a: u8, b: u8| -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t).round() as u8
        };
        Color::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Bevy material color with an explicit alpha.
    pub fn srgba(&self, alpha: f32) -> bevy::prelude::Color {
        bevy::prelude::Color::srgba(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        )
    }
}

impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::srgb_u8(c.r, c.g, c.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Colors travel through JSON as "#rrggbb" strings rather than channel
// structs, so article documents stay hand-editable.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        for hex in ["#b5c5c9", "#403e39", "#e3ddcc", "#000000", "#ffffff"] {
            let c = Color::parse(hex).unwrap();
            assert_eq!(c.to_string(), hex);
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Color::parse("b5c5c9").is_err());
        assert!(Color::parse("#b5c5").is_err());
        assert!(Color::parse("#b5c5c9aa").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_rounds_half_up() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(128, 128, 128));
    }

    #[test]
    fn hsl_achromatic() {
        assert_eq!(Color::hsl(0.37, 0.0, 0.5), Color::rgb(128, 128, 128));
        assert_eq!(Color::hsl(0.0, 0.0, 1.0), Color::WHITE);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::hsl(1.0 / 3.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsl(2.0 / 3.0, 1.0, 0.5), Color::rgb(0, 0, 255));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c = Color::rgb(0xb5, 0xc5, 0xc9);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#b5c5c9\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Color>("\"b5c5c9\"").is_err());
    }
}
