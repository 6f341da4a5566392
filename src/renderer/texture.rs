//! Owned, drawable images
//!
//! A [`TextureHandle`] holds at most one bitmap. Loading always releases the
//! previous bitmap first, and dropping the handle releases whatever it holds.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{Bitmap, BlendMode, Canvas, Colour, DrawParams, Flip, Font};
use crate::sim::{Rect, Size};

/// Pixels of this colour in sprite files are transparent
pub const COLOUR_KEY: [u8; 3] = [0, 255, 255];

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid font data: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("cannot render empty text")]
    EmptyText,
}

/// Exclusive owner of one drawable image
#[derive(Debug, Clone, Default)]
pub struct TextureHandle {
    bitmap: Option<Bitmap>,
    modulate: Colour,
    blend: BlendMode,
}

impl TextureHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file, keying out [`COLOUR_KEY`]
    pub fn load(&mut self, path: &Path) -> Result<(), TextureError> {
        self.free();
        let mut bitmap = Bitmap::open(path).map_err(|source| TextureError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        bitmap.apply_colour_key(COLOUR_KEY);
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            bitmap.width(),
            bitmap.height()
        );
        self.bitmap = Some(bitmap);
        Ok(())
    }

    /// Replace the image with rendered text
    pub fn load_from_text(
        &mut self,
        text: &str,
        colour: Colour,
        font: &Font,
    ) -> Result<(), TextureError> {
        self.free();
        self.bitmap = Some(font.render_solid(text, colour)?);
        Ok(())
    }

    /// Take ownership of an already decoded bitmap
    pub fn load_bitmap(&mut self, bitmap: Bitmap) {
        self.free();
        self.bitmap = Some(bitmap);
    }

    /// Release the image; calling it on an empty handle does nothing
    pub fn free(&mut self) {
        self.bitmap = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.bitmap.is_some()
    }

    /// Draw with clip, rotation and flip; an empty handle draws nothing
    pub fn draw_ex(
        &self,
        canvas: &mut impl Canvas,
        dest: Rect,
        clip: Option<Rect>,
        angle: f64,
        flip: Flip,
    ) {
        let Some(bitmap) = &self.bitmap else {
            return;
        };
        let params = DrawParams {
            clip,
            angle,
            flip,
            modulate: self.modulate,
            blend: self.blend,
        };
        canvas.copy(bitmap, dest, &params);
    }

    /// Draw the whole image stretched over `dest`
    pub fn draw(&self, canvas: &mut impl Canvas, dest: Rect) {
        self.draw_ex(canvas, dest, None, 0.0, Flip::NONE);
    }

    /// Colour modulation applied when drawing
    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) {
        self.modulate = Colour::rgba(r, g, b, self.modulate.a);
    }

    /// Alpha modulation applied when drawing
    pub fn set_alpha(&mut self, alpha: u8) {
        self.modulate.a = alpha;
    }

    pub fn set_blend_mode(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Native width in pixels, 0 when empty
    pub fn width(&self) -> u32 {
        self.bitmap.as_ref().map_or(0, Bitmap::width)
    }

    /// Native height in pixels, 0 when empty
    pub fn height(&self) -> u32 {
        self.bitmap.as_ref().map_or(0, Bitmap::height)
    }

    pub fn size(&self) -> Size {
        Size::from((self.width(), self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::font;

    /// Canvas that records what was drawn where
    #[derive(Default)]
    struct Recorder {
        draws: Vec<(Size, Rect, DrawParams)>,
    }

    impl Canvas for Recorder {
        fn size(&self) -> Size {
            Size::new(100, 100)
        }

        fn clear(&mut self, _colour: Colour) {}

        fn copy(&mut self, bitmap: &Bitmap, dest: Rect, params: &DrawParams) {
            self.draws.push((bitmap.size(), dest, *params));
        }
    }

    #[test]
    fn test_free_twice_is_a_noop() {
        let mut tex = TextureHandle::new();
        tex.load_bitmap(Bitmap::new(4, 3));
        assert_eq!((tex.width(), tex.height()), (4, 3));

        tex.free();
        assert_eq!((tex.width(), tex.height()), (0, 0));
        tex.free();
        assert_eq!((tex.width(), tex.height()), (0, 0));
        assert!(!tex.is_loaded());
    }

    #[test]
    fn test_reload_replaces_image() {
        let mut tex = TextureHandle::new();
        tex.load_bitmap(Bitmap::new(4, 3));
        tex.load_bitmap(Bitmap::new(8, 2));
        assert_eq!(tex.size(), Size::new(8, 2));
    }

    #[test]
    fn test_failed_load_leaves_handle_empty() {
        let mut tex = TextureHandle::new();
        tex.load_bitmap(Bitmap::new(4, 3));
        let err = tex.load(Path::new("textures/missing.png")).unwrap_err();
        assert!(matches!(err, TextureError::Image { .. }));
        assert!(!tex.is_loaded());
        assert_eq!(tex.width(), 0);
    }

    #[test]
    fn test_load_from_text_replaces_previous_text() {
        let font = font::fixtures::font();
        let mut tex = TextureHandle::new();
        tex.load_from_text("1", Colour::WHITE, &font).unwrap();
        let one = tex.size();
        assert!(one.w > 0 && one.h > 0);

        tex.load_from_text("10", Colour::WHITE, &font).unwrap();
        assert!(tex.width() as i32 > one.w);
        assert_eq!(tex.height() as i32, one.h);
    }

    #[test]
    fn test_load_from_empty_text_leaves_handle_empty() {
        let font = font::fixtures::font();
        let mut tex = TextureHandle::new();
        tex.load_from_text("0", Colour::WHITE, &font).unwrap();
        let err = tex.load_from_text("", Colour::WHITE, &font).unwrap_err();
        assert!(matches!(err, TextureError::EmptyText));
        assert!(!tex.is_loaded());
    }

    #[test]
    fn test_load_png_keys_out_cyan() {
        let dir = std::env::temp_dir().join(format!("pong-texture-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sprite.png");
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([0, 255, 255, 255]));
        img.put_pixel(1, 0, image::Rgba([9, 9, 9, 255]));
        img.save(&path).unwrap();

        let mut tex = TextureHandle::new();
        let loaded = tex.load(&path);
        std::fs::remove_dir_all(&dir).ok();
        loaded.unwrap();

        assert_eq!(tex.size(), Size::new(2, 1));
        let bitmap = tex.bitmap.as_ref().unwrap();
        assert_eq!(bitmap.pixel(0, 0), [0, 255, 255, 0]);
        assert_eq!(bitmap.pixel(1, 0), [9, 9, 9, 255]);
    }

    #[test]
    fn test_draw_passes_modulation() {
        let mut tex = TextureHandle::new();
        tex.load_bitmap(Bitmap::new(2, 2));
        tex.set_colour(10, 20, 30);
        tex.set_alpha(40);
        tex.set_blend_mode(BlendMode::None);

        let mut canvas = Recorder::default();
        tex.draw(&mut canvas, Rect::new(1, 2, 3, 4));
        let (size, dest, params) = canvas.draws[0];
        assert_eq!(size, Size::new(2, 2));
        assert_eq!(dest, Rect::new(1, 2, 3, 4));
        assert_eq!(params.modulate, Colour::rgba(10, 20, 30, 40));
        assert_eq!(params.blend, BlendMode::None);
    }

    #[test]
    fn test_empty_handle_draws_nothing() {
        let tex = TextureHandle::new();
        let mut canvas = Recorder::default();
        tex.draw(&mut canvas, Rect::new(0, 0, 10, 10));
        assert!(canvas.draws.is_empty());
    }
}
