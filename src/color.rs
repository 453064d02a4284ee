// color.rs - Packed ARGB colors
//
// Colors are stored as 0xAARRGGBB in a single u32, the same encoding the
// host drawing toolkit uses for its integer colors.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub fn a(self) -> u8 { (self.0 >> 24) as u8 }
    #[inline]
    pub fn r(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline]
    pub fn g(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline]
    pub fn b(self) -> u8 { self.0 as u8 }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Linear interpolation between two colors, channel by channel.
    /// `t` is clamped to [0, 1]; each channel is rounded to nearest.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::argb(
            mix(self.a(), other.a()),
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r(), c.g(), c.b()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_opaque_argb() {
        let c = Color::rgb(23, 141, 235);
        assert_eq!(c.0, 0xFF17_8DEB);
        assert_eq!(c.to_rgb(), (23, 141, 235));
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let start = Color::rgb(23, 141, 235);
        let end = Color::rgb(23, 200, 255);
        assert_eq!(start.lerp(end, 0.0), start);
        assert_eq!(start.lerp(end, 1.0), end);
    }

    #[test]
    fn lerp_rounds_midpoint() {
        let c = Color::rgb(0, 141, 235).lerp(Color::rgb(1, 200, 255), 0.5);
        // 0.5 rounds away from zero, 170.5 -> 171, 245 stays
        assert_eq!(c.to_rgb(), (1, 171, 245));
    }

    #[test]
    fn lerp_clamps_fraction() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, -2.0), a);
        assert_eq!(a.lerp(b, 7.5), b);
    }

    #[test]
    fn converts_through_channel_array() {
        let c: Color = [253, 245, 230].into();
        let back: [u8; 3] = c.into();
        assert_eq!(back, [253, 245, 230]);
    }
}
