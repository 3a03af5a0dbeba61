//! Glyph measurement and drawing.
//!
//! The layout code only needs two capabilities from a rasterizer: how wide a
//! string is at a given size ([`TextMeasure`]) and drawing it at a baseline
//! position ([`TextCanvas`]). [`FontRasterizer`] provides both on top of a
//! `fontdue` font and a `tiny_skia` pixmap.

use std::path::PathBuf;
use std::sync::Arc;

use fontdue::{Font, FontSettings};
use tiny_skia::{Pixmap, PremultipliedColorU8};
use tracing::debug;

use crate::color::Rgba;
use crate::shape::CanvasSize;
use crate::Error;

/// Family looked up when no font file is given.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

// =============================================================================
// Capabilities
// =============================================================================

pub trait TextMeasure {
    /// Horizontal advance of `text` at `font_size` pixels.
    fn text_width(&self, text: &str, font_size: u32) -> f32;
}

pub trait TextCanvas: TextMeasure {
    fn canvas_size(&self) -> CanvasSize;

    /// Draws `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, font_size: u32, x: i32, y: i32, color: Rgba);
}

impl TextMeasure for Font {
    fn text_width(&self, text: &str, font_size: u32) -> f32 {
        let px = font_size as f32;
        let mut width = 0.0;
        let mut previous = None;

        for ch in text.chars() {
            if let Some(left) = previous {
                width += self.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            width += self.metrics(ch, px).advance_width;
            previous = Some(ch);
        }
        width
    }
}

// =============================================================================
// Font Loading
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk.
    File(PathBuf),
    /// Bold face of an installed family.
    System { family: String },
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::System {
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

pub struct LoadedFont {
    pub font: Font,
    pub family: String,
}

pub fn load_font(source: &FontSource) -> Result<LoadedFont, Error> {
    match source {
        FontSource::File(path) => {
            let data = std::fs::read(path)?;
            let family = extract_font_family_name(&data).unwrap_or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
            });
            let font = Font::from_bytes(data.as_slice(), FontSettings::default())
                .map_err(|e| Error::Font(e.to_string()))?;
            debug!(path = %path.display(), %family, "loaded font file");
            Ok(LoadedFont { font, family })
        }
        FontSource::System { family } => load_system_font(family),
    }
}

fn load_system_font(family: &str) -> Result<LoadedFont, Error> {
    use usvg::fontdb::{Database, Family, Query, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::Name(family), Family::SansSerif],
        weight: Weight::BOLD,
        ..Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| Error::Font(format!("no installed font matches '{family}'")))?;

    let resolved = db
        .face(id)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| family.to_string());

    let font = db
        .with_face_data(id, |data, index| {
            Font::from_bytes(
                data,
                FontSettings {
                    collection_index: index,
                    ..FontSettings::default()
                },
            )
        })
        .ok_or_else(|| Error::Font(format!("could not read font data for '{resolved}'")))?
        .map_err(|e| Error::Font(e.to_string()))?;

    debug!(requested = family, %resolved, "loaded system font");
    Ok(LoadedFont {
        font,
        family: resolved,
    })
}

fn extract_font_family_name(font_data: &[u8]) -> Option<String> {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_source(usvg::fontdb::Source::Binary(Arc::new(font_data.to_vec())));
    for face in db.faces() {
        if let Some((name, _)) = face.families.first() {
            return Some(name.clone());
        }
    }
    None
}

// =============================================================================
// Pixmap Rasterizer
// =============================================================================

/// Draws glyph coverage from a `fontdue` font straight into a pixmap.
pub struct FontRasterizer {
    font: Font,
    pixmap: Pixmap,
    size: CanvasSize,
}

impl FontRasterizer {
    /// Creates a canvas of `size` pre-filled with `background`.
    pub fn new(font: Font, size: CanvasSize, background: Rgba) -> Result<Self, Error> {
        let mut pixmap = Pixmap::new(size.width(), size.height())
            .ok_or_else(|| Error::Render("Failed to create pixel buffer".into()))?;
        pixmap.fill(background.to_skia());
        Ok(Self { font, pixmap, size })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, Error> {
        encode_jpeg(&self.pixmap, quality)
    }
}

impl TextMeasure for FontRasterizer {
    fn text_width(&self, text: &str, font_size: u32) -> f32 {
        self.font.text_width(text, font_size)
    }
}

impl TextCanvas for FontRasterizer {
    fn canvas_size(&self) -> CanvasSize {
        self.size
    }

    fn draw_text(&mut self, text: &str, font_size: u32, x: i32, y: i32, color: Rgba) {
        let px = font_size as f32;
        let mut pen_x = x as f32;
        let mut previous = None;

        for ch in text.chars() {
            if let Some(left) = previous {
                pen_x += self.font.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            let (metrics, bitmap) = self.font.rasterize(ch, px);

            let left = pen_x.round() as i32 + metrics.xmin;
            let top = y - metrics.height as i32 - metrics.ymin;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx];
                    if coverage > 0 {
                        self.blend_pixel(left + gx as i32, top + gy as i32, color, coverage);
                    }
                }
            }

            pen_x += metrics.advance_width;
            previous = Some(ch);
        }
    }
}

impl FontRasterizer {
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: u8) {
        if x < 0 || y < 0 || x >= self.pixmap.width() as i32 || y >= self.pixmap.height() as i32
        {
            return;
        }
        let idx = y as usize * self.pixmap.width() as usize + x as usize;
        let pixels = self.pixmap.pixels_mut();
        pixels[idx] = source_over(pixels[idx], color, coverage);
    }
}

/// Composites `color` scaled by `coverage` over a premultiplied pixel.
fn source_over(dst: PremultipliedColorU8, color: Rgba, coverage: u8) -> PremultipliedColorU8 {
    let src_alpha = color.opacity() * f32::from(coverage) / 255.0;
    let keep = 1.0 - src_alpha;

    let alpha = (src_alpha * 255.0 + f32::from(dst.alpha()) * keep).round();
    let channel =
        |src: u8, dst: u8| (f32::from(src) * src_alpha + f32::from(dst) * keep).round().min(alpha);

    PremultipliedColorU8::from_rgba(
        channel(color.r, dst.red()) as u8,
        channel(color.g, dst.green()) as u8,
        channel(color.b, dst.blue()) as u8,
        alpha as u8,
    )
    .unwrap_or(dst)
}

// =============================================================================
// Encoding
// =============================================================================

/// Flattens the pixmap to RGB and encodes it as JPEG.
pub fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>, Error> {
    let rgb = image::RgbImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let pixel = pixmap
            .pixel(x, y)
            .map(|p| p.demultiply())
            .map(|c| [c.red(), c.green(), c.blue()])
            .unwrap_or([255, 255, 255]);
        image::Rgb(pixel)
    });

    let mut out = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

    fn white() -> PremultipliedColorU8 {
        PremultipliedColorU8::from_rgba(255, 255, 255, 255).unwrap()
    }

    #[test]
    fn full_coverage_opaque_replaces_pixel() {
        let out = source_over(white(), Rgba::rgb(231, 76, 60), 255);
        assert_eq!((out.red(), out.green(), out.blue(), out.alpha()), (231, 76, 60, 255));
    }

    #[test]
    fn zero_coverage_keeps_pixel() {
        let out = source_over(white(), Rgba::rgb(0, 0, 0), 0);
        assert_eq!(out, white());
    }

    #[test]
    fn translucent_shadow_darkens_white() {
        let out = source_over(white(), crate::color::SHADOW, 255);
        // 255 * (1 - 80/255) = 175
        assert_eq!((out.red(), out.green(), out.blue(), out.alpha()), (175, 175, 175, 255));
    }

    #[test]
    fn jpeg_keeps_dimensions() {
        let mut pixmap = Pixmap::new(120, 100).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);

        let bytes = encode_jpeg(&pixmap, 100).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (120, 100));
        let center = decoded.get_pixel(60, 50);
        assert!(center[0] > 250 && center[1] > 250 && center[2] > 250);
    }

    #[test]
    fn family_name_read_from_font_bytes() {
        assert_eq!(extract_font_family_name(b"not a font"), None);

        let Ok(data) = std::fs::read(SYSTEM_FONT) else {
            return;
        };
        let family = extract_font_family_name(&data).unwrap();
        assert!(family.contains("DejaVu"), "{family}");
    }

    #[test]
    fn font_rasterizer_draws_and_measures() {
        let Ok(data) = std::fs::read(SYSTEM_FONT) else {
            return;
        };
        let font = Font::from_bytes(data.as_slice(), FontSettings::default()).unwrap();
        let size = CanvasSize::new(200, 100).unwrap();
        let mut canvas = FontRasterizer::new(font, size, Rgba::WHITE).unwrap();

        let narrow = canvas.text_width("ii", 20);
        let wide = canvas.text_width("WWWW", 20);
        assert!(narrow > 0.0 && wide > narrow);
        assert!(canvas.text_width("WWWW", 40) > wide);

        canvas.draw_text("Hello", 30, 20, 60, Rgba::rgb(0, 0, 0));
        let inked = canvas
            .pixmap()
            .pixels()
            .iter()
            .filter(|p| p.red() < 128)
            .count();
        assert!(inked > 0);
    }
}
