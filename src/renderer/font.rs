//! TrueType text rasterisation
//!
//! Text is rendered "solid": coverage is thresholded instead of antialiased,
//! giving crisp pixel edges once the score bitmap is scaled up.

use std::fs;
use std::path::Path;

use ab_glyph::{Font as _, FontVec, PxScale, ScaleFont, point};

use super::texture::TextureError;
use super::{Bitmap, Colour};

/// Coverage at or above this becomes an opaque pixel
const SOLID_THRESHOLD: f32 = 0.5;

/// A font loaded at a fixed pixel size
pub struct Font {
    inner: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("scale", &self.scale).finish_non_exhaustive()
    }
}

impl Font {
    /// Read a TrueType/OpenType file
    pub fn open(path: &Path, size: f32) -> Result<Self, TextureError> {
        let bytes = fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, size)
    }

    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Result<Self, TextureError> {
        let inner = FontVec::try_from_vec(bytes)?;
        Ok(Self {
            inner,
            scale: PxScale::from(size),
        })
    }

    /// Pixel size the font renders at
    pub fn size(&self) -> f32 {
        self.scale.y
    }

    /// Rasterise a single line of text into a tightly sized bitmap
    pub fn render_solid(&self, text: &str, colour: Colour) -> Result<Bitmap, TextureError> {
        if text.is_empty() {
            return Err(TextureError::EmptyText);
        }

        let scaled = self.inner.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        let mut previous = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, ascent)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        let width = caret.ceil().max(0.0) as u32;
        let height = (ascent - scaled.descent()).ceil().max(0.0) as u32;
        if width == 0 || height == 0 {
            return Err(TextureError::EmptyText);
        }

        let mut bitmap = Bitmap::new(width, height);
        let rgba = colour.to_array();
        for glyph in glyphs {
            let Some(outlined) = self.inner.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|x, y, coverage| {
                if coverage >= SOLID_THRESHOLD {
                    bitmap.put_pixel(ox + x as i32, oy + y as i32, rgba);
                }
            });
        }
        Ok(bitmap)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;

    use super::Font;

    /// OFL-licensed font shipped with the tests
    pub fn font_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Cantarell-Regular.ttf")
    }

    pub fn font() -> Font {
        Font::open(&font_path(), 100.0).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_digit() {
        let font = fixtures::font();
        assert_eq!(font.size(), 100.0);
        let bitmap = font.render_solid("0", Colour::WHITE).unwrap();
        assert!(bitmap.width() > 0);
        assert!(bitmap.height() > 0);
        // Solid rendering: every pixel is either untouched or fully opaque white
        assert!(
            bitmap
                .pixels()
                .iter()
                .all(|px| *px == [0; 4] || *px == [255, 255, 255, 255])
        );
        assert!(bitmap.pixels().iter().any(|px| px[3] == 255));
    }

    #[test]
    fn test_wider_text_renders_wider() {
        let font = fixtures::font();
        let one = font.render_solid("1", Colour::WHITE).unwrap();
        let ten = font.render_solid("10", Colour::WHITE).unwrap();
        assert!(ten.width() > one.width());
        assert_eq!(ten.height(), one.height());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let font = fixtures::font();
        let err = font.render_solid("", Colour::WHITE).unwrap_err();
        assert!(matches!(err, TextureError::EmptyText));
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let err = Font::from_bytes(vec![0, 1, 2, 3], 100.0).unwrap_err();
        assert!(matches!(err, TextureError::Font(_)));
    }

    #[test]
    fn test_missing_font_file() {
        let err = Font::open(Path::new("fonts/missing.ttf"), 100.0).unwrap_err();
        assert!(matches!(err, TextureError::Io { .. }));
    }
}
