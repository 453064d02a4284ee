// render.rs - Drawing surface and software canvas
//
// The simulation only ever talks to a `Surface`. `Canvas` is the stock
// implementation: an RGBA8 framebuffer the browser can blit straight into
// an ImageData, or the native runner can hand to the PNG encoder.
//
// Pixel layout: row-major, 4 bytes per pixel (r, g, b, a).

use crate::color::Color;
use crate::error::{FountainError, Result};

/// Drawing primitives the fountain needs from its host.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with an opaque color
    fn background(&mut self, color: Color);

    /// Draw a sprite centred on (x, y)
    fn image(&mut self, sprite: &Sprite, x: f32, y: f32);

    /// Set color and alpha for subsequent shapes
    fn fill(&mut self, color: Color, alpha: u8);

    /// Filled circle with the current fill
    fn circle(&mut self, x: f32, y: f32, diameter: f32);
}

/// RGBA8 image, e.g. the fountain graphic.
#[derive(Clone, Debug)]
pub struct Sprite {
    w: u32,
    h: u32,
    rgba: Vec<u8>,
}

impl Sprite {
    pub fn from_rgba(w: u32, h: u32, rgba: Vec<u8>) -> Result<Self> {
        if rgba.len() != (w as usize) * (h as usize) * 4 {
            return Err(FountainError::SpriteSize { width: w, height: h, len: rgba.len() });
        }
        Ok(Self { w, h, rgba })
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    #[inline]
    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.w + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

pub struct Canvas {
    out: Vec<u8>,
    w: u32,
    h: u32,

    // Current fill
    fill: Color,
    alpha: u8,
}

impl Canvas {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: vec![0; (w * h * 4) as usize],
            w,
            h,
            fill: Color::WHITE,
            alpha: 255,
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.out.clear();
        self.out.resize((w * h * 4) as usize, 0);
    }

    pub fn clear(&mut self) {
        self.out.fill(0);
    }

    pub fn pixels(&self) -> &[u8] {
        &self.out
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// RGB of the pixel at (x, y), None when off-canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.w || y >= self.h { return None; }
        let i = ((y * self.w + x) * 4) as usize;
        Some(Color::argb(self.out[i + 3], self.out[i], self.out[i + 1], self.out[i + 2]))
    }

    /// Source-over blend of (r, g, b) with coverage `a` into one pixel
    #[inline]
    fn put(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        if (x as u32) >= self.w || (y as u32) >= self.h || a == 0 { return; }

        let i = ((y as u32 * self.w + x as u32) * 4) as usize;
        let px = &mut self.out[i..i + 4];
        let a = a as u32;
        let inv = 255 - a;
        px[0] = ((r as u32 * a + px[0] as u32 * inv + 127) / 255) as u8;
        px[1] = ((g as u32 * a + px[1] as u32 * inv + 127) / 255) as u8;
        px[2] = ((b as u32 * a + px[2] as u32 * inv + 127) / 255) as u8;
        px[3] = (a + (px[3] as u32 * inv + 127) / 255) as u8;
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 { self.w }
    fn height(&self) -> u32 { self.h }

    fn background(&mut self, color: Color) {
        let (r, g, b) = color.to_rgb();
        for px in self.out.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn image(&mut self, sprite: &Sprite, x: f32, y: f32) {
        let left = (x - sprite.w as f32 / 2.0).round() as i32;
        let top = (y - sprite.h as f32 / 2.0).round() as i32;

        for sy in 0..sprite.h {
            let py = top + sy as i32;
            if py < 0 || py >= self.h as i32 { continue; }
            for sx in 0..sprite.w {
                let [r, g, b, a] = sprite.texel(sx, sy);
                self.put(left + sx as i32, py, r, g, b, a);
            }
        }
    }

    fn fill(&mut self, color: Color, alpha: u8) {
        self.fill = color;
        self.alpha = alpha;
    }

    fn circle(&mut self, cx: f32, cy: f32, diameter: f32) {
        let radius = diameter / 2.0;
        if radius <= 0.0 { return; }

        let r2 = radius * radius;
        let (r, g, b) = self.fill.to_rgb();
        let a = self.alpha;

        // Clip bounding box to canvas
        let x0 = ((cx - radius).floor() as i32).max(0);
        let x1 = ((cx + radius).ceil() as i32).min(self.w as i32 - 1);
        let y0 = ((cy - radius).floor() as i32).max(0);
        let y1 = ((cy + radius).ceil() as i32).min(self.h as i32 - 1);

        for py in y0..=y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.put(px, py, r, g, b, a);
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Draw call log, for checking what the simulation asked for
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Background(Color),
        Image(f32, f32),
        Fill(Color, u8),
        Circle(f32, f32, f32),
    }

    pub struct RecordingSurface {
        pub w: u32,
        pub h: u32,
        pub calls: Vec<Call>,
    }

    impl RecordingSurface {
        pub fn new(w: u32, h: u32) -> Self {
            Self { w, h, calls: Vec::new() }
        }

        pub fn circles(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Circle(..))).count()
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 { self.w }
        fn height(&self) -> u32 { self.h }
        fn background(&mut self, color: Color) { self.calls.push(Call::Background(color)); }
        fn image(&mut self, _sprite: &Sprite, x: f32, y: f32) { self.calls.push(Call::Image(x, y)); }
        fn fill(&mut self, color: Color, alpha: u8) { self.calls.push(Call::Fill(color, alpha)); }
        fn circle(&mut self, x: f32, y: f32, d: f32) { self.calls.push(Call::Circle(x, y, d)); }
    }

    #[test]
    fn background_is_opaque() {
        let mut c = Canvas::new(4, 3);
        c.background(Color::rgb(253, 245, 230));
        assert_eq!(c.pixel(3, 2), Some(Color::rgb(253, 245, 230)));
        assert!(c.pixels().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn opaque_circle_covers_centre_only() {
        let mut c = Canvas::new(20, 20);
        c.background(Color::WHITE);
        c.fill(Color::rgb(255, 0, 0), 255);
        c.circle(10.0, 10.0, 4.0);

        assert_eq!(c.pixel(10, 10), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.pixel(9, 9), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(c.pixel(14, 10), Some(Color::WHITE));
    }

    #[test]
    fn translucent_fill_blends() {
        let mut c = Canvas::new(8, 8);
        c.background(Color::WHITE);
        c.fill(Color::BLACK, 128);
        c.circle(4.0, 4.0, 6.0);
        let (r, g, b) = c.pixel(4, 4).unwrap().to_rgb();
        assert_eq!((r, g, b), (127, 127, 127));
    }

    #[test]
    fn circle_off_canvas_is_clipped() {
        let mut c = Canvas::new(8, 8);
        c.background(Color::WHITE);
        c.fill(Color::BLACK, 255);
        c.circle(-20.0, 30.0, 10.0);
        c.circle(0.0, 0.0, 4.0);
        assert_eq!(c.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(c.pixel(7, 7), Some(Color::WHITE));
    }

    #[test]
    fn image_is_centred_and_respects_alpha() {
        // 2x1: opaque blue, fully transparent
        let sprite = Sprite::from_rgba(2, 1, vec![0, 0, 255, 255, 9, 9, 9, 0]).unwrap();
        let mut c = Canvas::new(6, 6);
        c.background(Color::WHITE);
        c.image(&sprite, 3.0, 3.5);
        assert_eq!(c.pixel(2, 3), Some(Color::rgb(0, 0, 255)));
        assert_eq!(c.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn sprite_rejects_wrong_length() {
        let err = Sprite::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, FountainError::SpriteSize { width: 2, height: 2, len: 15 }));
    }

    #[test]
    fn resize_reallocates_buffer() {
        let mut c = Canvas::new(2, 2);
        c.resize(5, 3);
        assert_eq!(c.len(), 5 * 3 * 4);
        assert_eq!(c.width(), 5);
        assert_eq!(c.pixel(4, 2), Some(Color::argb(0, 0, 0, 0)));
    }
}
