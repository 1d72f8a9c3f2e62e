// color.rs - RGB colors shared by the charts and the particle encoder
//
// Colors serialize as CSS hex strings so chart marks can be handed to
// the page as-is.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB` -> color
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` or `#rgb`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        match s.len() {
            6 => u32::from_str_radix(s, 16).ok().map(Self::hex),
            3 => {
                let v = u32::from_str_radix(s, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Some(Self::new((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            _ => None,
        }
    }

    /// Linear interpolation in RGB space
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Rgb::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_display() {
        let c = Rgb::hex(0x1a1a2e);
        assert_eq!(c, Rgb::new(0x1a, 0x1a, 0x2e));
        assert_eq!(c.to_string(), "#1a1a2e");
        assert_eq!(Rgb::parse("#1A1A2E"), Some(c));
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(Rgb::parse("#ccc"), Some(Rgb::hex(0xcccccc)));
        assert_eq!(Rgb::parse("ccc"), None);
        assert_eq!(Rgb::parse("#12345"), None);
    }

    #[test]
    fn serde_uses_css_hex() {
        let json = serde_json::to_string(&Rgb::hex(0xef4444)).unwrap();
        assert_eq!(json, "\"#ef4444\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::hex(0xef4444));
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }

    #[test]
    fn mix_endpoints() {
        let a = Rgb::hex(0x000000);
        let b = Rgb::hex(0xffffff);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb::new(128, 128, 128));
    }
}
