//! Software canvas over an RGBA8 buffer
//!
//! Nearest-neighbour scaling with inverse-mapped rotation: every destination
//! pixel inside the (rotated) destination rectangle is mapped back into the
//! source clip. Anything outside the framebuffer is clipped.

use super::{Bitmap, BlendMode, Canvas, Colour, DrawParams};
use crate::sim::{Rect, Size};

/// Window-sized RGBA8 render target
#[derive(Debug, Clone)]
pub struct Framebuffer {
    target: Bitmap,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Bitmap::new(width, height),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.target.as_bytes()
    }

    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        self.target.pixel(x, y)
    }

    fn bounds(&self) -> Rect {
        let size = self.target.size();
        Rect::new(0, 0, size.w, size.h)
    }
}

/// Multiply two 8-bit channels as fractions of 255
#[inline]
fn mul8(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

#[inline]
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let a = src[3] as u32;
    let inv = 255 - a;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (a + (dst[3] as u32 * inv + 127) / 255) as u8,
    ]
}

/// Screen-space box covering `dest` rotated by `angle` degrees about its centre
fn rotated_bounds(dest: Rect, angle: f64) -> Rect {
    if angle == 0.0 {
        return dest;
    }
    let half_w = dest.w as f64 / 2.0;
    let half_h = dest.h as f64 / 2.0;
    let (sin, cos) = angle.to_radians().sin_cos();
    let ext_x = (half_w * cos).abs() + (half_h * sin).abs();
    let ext_y = (half_w * sin).abs() + (half_h * cos).abs();
    let cx = dest.x as f64 + half_w;
    let cy = dest.y as f64 + half_h;
    let x0 = (cx - ext_x).floor() as i32;
    let y0 = (cy - ext_y).floor() as i32;
    let x1 = (cx + ext_x).ceil() as i32;
    let y1 = (cy + ext_y).ceil() as i32;
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

impl Canvas for Framebuffer {
    fn size(&self) -> Size {
        self.target.size()
    }

    fn clear(&mut self, colour: Colour) {
        let rgba = colour.to_array();
        self.target.pixels_mut().fill(rgba);
    }

    fn copy(&mut self, bitmap: &Bitmap, dest: Rect, params: &DrawParams) {
        if dest.is_empty() {
            return;
        }
        let full = Rect::new(0, 0, bitmap.width() as i32, bitmap.height() as i32);
        let src = match params.clip {
            Some(clip) => match clip.intersect(&full) {
                Some(src) => src,
                None => return,
            },
            None => full,
        };
        if src.is_empty() {
            return;
        }
        let Some(area) = rotated_bounds(dest, params.angle).intersect(&self.bounds()) else {
            return;
        };

        let half_w = dest.w as f64 / 2.0;
        let half_h = dest.h as f64 / 2.0;
        let cx = dest.x as f64 + half_w;
        let cy = dest.y as f64 + half_h;
        let (sin, cos) = params.angle.to_radians().sin_cos();
        let modulate = params.modulate;

        for py in area.y..area.bottom() {
            for px in area.x..area.right() {
                // Undo the clockwise rotation to land in dest-local space
                let fx = px as f64 + 0.5 - cx;
                let fy = py as f64 + 0.5 - cy;
                let lx = fx * cos + fy * sin + half_w;
                let ly = -fx * sin + fy * cos + half_h;
                if lx < 0.0 || ly < 0.0 || lx >= dest.w as f64 || ly >= dest.h as f64 {
                    continue;
                }

                let mut u = ((lx * src.w as f64 / dest.w as f64) as i32).min(src.w - 1);
                let mut v = ((ly * src.h as f64 / dest.h as f64) as i32).min(src.h - 1);
                if params.flip.horizontal {
                    u = src.w - 1 - u;
                }
                if params.flip.vertical {
                    v = src.h - 1 - v;
                }

                let [r, g, b, a] = bitmap.pixel(src.x + u, src.y + v);
                let texel = [
                    mul8(r, modulate.r),
                    mul8(g, modulate.g),
                    mul8(b, modulate.b),
                    mul8(a, modulate.a),
                ];
                let out = match params.blend {
                    BlendMode::None => texel,
                    BlendMode::Blend => blend_over(texel, self.target.pixel(px, py)),
                };
                self.target.put_pixel(px, py, out);
            }
        }
    }
}
