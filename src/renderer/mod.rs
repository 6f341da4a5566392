//! Sprite rendering
//!
//! Textures are CPU-side RGBA bitmaps drawn through the [`Canvas`] trait. The
//! software [`Framebuffer`] implements it; the platform presents the
//! framebuffer to the window.

pub mod bitmap;
pub mod font;
pub mod framebuffer;
pub mod texture;

pub use bitmap::Bitmap;
pub use font::Font;
pub use framebuffer::Framebuffer;
pub use texture::{TextureError, TextureHandle};

use crate::sim::{Rect, Size};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Opaque white: the identity for colour modulation
impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

/// Mirror the source image while drawing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip {
        horizontal: false,
        vertical: false,
    };
}

/// How source pixels combine with the destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Overwrite the destination
    None,
    /// Source-over alpha blending
    #[default]
    Blend,
}

/// Per-draw options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Source sub-rectangle, whole image when `None`
    pub clip: Option<Rect>,
    /// Clockwise rotation in degrees around the destination centre
    pub angle: f64,
    pub flip: Flip,
    /// Multiplied into every texel (colour and alpha modulation)
    pub modulate: Colour,
    pub blend: BlendMode,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            clip: None,
            angle: 0.0,
            flip: Flip::NONE,
            modulate: Colour::WHITE,
            blend: BlendMode::Blend,
        }
    }
}

/// Something sprites can be drawn onto
pub trait Canvas {
    fn size(&self) -> Size;

    /// Fill the whole target
    fn clear(&mut self, colour: Colour);

    /// Draw `bitmap` scaled into `dest`
    fn copy(&mut self, bitmap: &Bitmap, dest: Rect, params: &DrawParams);
}
