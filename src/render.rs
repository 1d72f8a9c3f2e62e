// render.rs - Rasterize simulation state to an RGBA buffer
//
// Output layout (for `putImageData` on the page, or PNG previews):
//   row-major, 4 bytes per pixel, R G B A, alpha always 255

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Largest canvas side accepted, matching common browser canvas limits
pub const MAX_SIDE: u32 = 16_384;

/// Byte length of a `w` x `h` RGBA frame, or an error for empty,
/// oversized, or overflowing dimensions
pub fn frame_len(w: u32, h: u32) -> Result<usize> {
    if w == 0 || h == 0 || w > MAX_SIDE || h > MAX_SIDE {
        return Err(Error::InvalidDimensions { w, h });
    }
    (w as usize)
        .checked_mul(h as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::InvalidDimensions { w, h })
}

/// Anything the simulation can paint itself onto
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgb, alpha: f32);
}

pub struct Encoder {
    out: Vec<u8>,
    w: u32,
    h: u32,
}

impl Encoder {
    pub fn new(w: u32, h: u32) -> Result<Self> {
        Ok(Self {
            out: vec![0; frame_len(w, h)?],
            w,
            h,
        })
    }

    /// Leaves the encoder untouched on error
    pub fn resize(&mut self, w: u32, h: u32) -> Result<()> {
        let len = frame_len(w, h)?;
        self.w = w;
        self.h = h;
        self.out.resize(len, 0);
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.w as usize + x as usize) * 4
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

    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgb::new(self.out[i], self.out[i + 1], self.out[i + 2]))
    }

    #[inline]
    fn blend(&mut self, x: i32, y: i32, c: Rgb, a: f32) {
        if (x as u32) < self.w && (y as u32) < self.h {
            let i = self.index(x as u32, y as u32);
            let mix = |dst: u8, src: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
            self.out[i] = mix(self.out[i], c.r);
            self.out[i + 1] = mix(self.out[i + 1], c.g);
            self.out[i + 2] = mix(self.out[i + 2], c.b);
            self.out[i + 3] = 255;
        }
    }
}

impl Surface for Encoder {
    fn clear(&mut self, color: Rgb) {
        for px in self.out.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Pixels whose centres fall inside the circle, source-over blended
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        if a == 0.0 || r <= 0.0 {
            return;
        }
        let r2 = r * r;
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;

        for py in y0..=y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, a);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::hex(0x1a1a2e);

    #[test]
    fn clear_fills_every_pixel() {
        let mut e = Encoder::new(4, 3).unwrap();
        e.clear(BG);
        assert_eq!(e.len(), 48);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(e.pixel(x, y), Some(BG));
            }
        }
        assert_eq!(e.as_bytes()[3], 255);
    }

    #[test]
    fn opaque_circle_covers_centre_only() {
        let mut e = Encoder::new(20, 20).unwrap();
        e.clear(BG);
        let red = Rgb::hex(0xff0000);
        e.fill_circle(10.0, 10.0, 3.0, red, 1.0);
        assert_eq!(e.pixel(10, 10), Some(red));
        assert_eq!(e.pixel(9, 9), Some(red));
        assert_eq!(e.pixel(0, 0), Some(BG));
        assert_eq!(e.pixel(14, 10), Some(BG));
    }

    #[test]
    fn translucent_circle_blends() {
        let mut e = Encoder::new(8, 8).unwrap();
        e.clear(Rgb::hex(0x000000));
        e.fill_circle(4.0, 4.0, 2.0, Rgb::hex(0xffffff), 0.5);
        assert_eq!(e.pixel(4, 4), Some(Rgb::new(128, 128, 128)));
    }

    #[test]
    fn off_canvas_circle_is_clipped() {
        let mut e = Encoder::new(8, 8).unwrap();
        e.clear(BG);
        e.fill_circle(-1.0, 4.0, 2.0, Rgb::hex(0xffffff), 1.0);
        e.fill_circle(4.0, 500.0, 2.0, Rgb::hex(0xffffff), 1.0);
        assert_eq!(e.pixel(0, 4), Some(Rgb::hex(0xffffff)));
        assert_eq!(e.pixel(4, 7), Some(BG));
        assert_eq!(e.pixel(8, 0), None);
    }

    #[test]
    fn resize_reallocates() {
        let mut e = Encoder::new(2, 2).unwrap();
        e.resize(3, 5).unwrap();
        assert_eq!(e.len(), 60);
        assert_eq!((e.width(), e.height()), (3, 5));
    }

    #[test]
    fn frame_len_guards_dimensions() {
        assert_eq!(frame_len(3, 5).unwrap(), 60);
        assert_eq!(frame_len(MAX_SIDE, MAX_SIDE).unwrap(), MAX_SIDE as usize * MAX_SIDE as usize * 4);
        assert!(frame_len(0, 5).is_err());
        assert!(frame_len(MAX_SIDE + 1, 1).is_err());
        assert!(frame_len(40_000, 30_000).is_err());
        assert!(Encoder::new(40_000, 30_000).is_err());
    }

    #[test]
    fn failed_resize_keeps_buffer() {
        let mut e = Encoder::new(4, 4).unwrap();
        assert!(matches!(e.resize(u32::MAX, 2), Err(Error::InvalidDimensions { .. })));
        assert_eq!((e.width(), e.height(), e.len()), (4, 4, 64));
    }
}
