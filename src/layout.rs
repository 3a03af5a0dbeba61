//! Font sizing and placement of ranked words onto sampled positions.

use rand::Rng;
use tracing::trace;

use crate::color::{self, Rgba, SHADOW};
use crate::raster::{TextCanvas, TextMeasure};
use crate::shape::{CanvasSize, Point, Shape};
use crate::text::RankedWord;

pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 50;

/// Distance kept between a word and the left, right and bottom canvas edges.
pub const EDGE_MARGIN: i32 = 10;

/// `base + floor(frequency * multiplier / (max_frequency + 1))`, clamped to
/// [`MIN_FONT_SIZE`]..=[`MAX_FONT_SIZE`].
pub fn font_size_for(frequency: u32, max_frequency: u32, base: u32, multiplier: u32) -> u32 {
    let scaled = u64::from(frequency) * u64::from(multiplier) / (u64::from(max_frequency) + 1);
    (u64::from(base) + scaled).clamp(u64::from(MIN_FONT_SIZE), u64::from(MAX_FONT_SIZE)) as u32
}

/// A word ready to be drawn. `(x, y)` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub text: String,
    pub count: u32,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub color: Rgba,
}

/// Pairs `words[i]` with `positions[i]`, centres each word horizontally on
/// its position and keeps it inside the canvas. Overlaps between words are
/// not resolved.
pub fn place_words<M, R>(
    words: &[RankedWord],
    positions: &[Point],
    shape: Shape,
    size: CanvasSize,
    measure: &M,
    palette: &[Rgba],
    rng: &mut R,
) -> Vec<PlacedWord>
where
    M: TextMeasure + ?Sized,
    R: Rng + ?Sized,
{
    let Some(max_frequency) = words.first().map(|w| w.count) else {
        return Vec::new();
    };

    let canvas_width = size.width() as i32;
    let canvas_height = size.height() as i32;

    words
        .iter()
        .zip(positions)
        .map(|(word, position)| {
            let font_size = font_size_for(
                word.count,
                max_frequency,
                shape.base_font_size(),
                shape.font_multiplier(),
            );
            let width = measure.text_width(&word.text, font_size).ceil() as i32;
            let font_size_px = font_size as i32;

            let x = (position.x - width / 2)
                .min(canvas_width - width - EDGE_MARGIN)
                .max(EDGE_MARGIN);
            let y = (position.y + font_size_px / 3)
                .min(canvas_height - EDGE_MARGIN)
                .max(font_size_px);

            let color = color::pick(palette, rng);
            trace!(word = %word.text, font_size, x, y, "placed word");

            PlacedWord {
                text: word.text.clone(),
                count: word.count,
                font_size,
                x,
                y,
                color,
            }
        })
        .collect()
}

/// Result of laying out one frequency table on one shape.
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub size: CanvasSize,
    pub shape: Shape,
    pub font_family: String,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Issues a shadow draw then a colored draw for every word.
    pub fn paint<C: TextCanvas + ?Sized>(&self, canvas: &mut C) {
        for word in &self.words {
            canvas.draw_text(&word.text, word.font_size, word.x + 1, word.y + 1, SHADOW);
            canvas.draw_text(&word.text, word.font_size, word.x, word.y, word.color);
        }
    }
}
