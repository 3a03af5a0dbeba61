/*!
 * Shaped WordCloud Library
 *
 * Counts the words of a text and lays the most frequent ones out along a
 * geometric silhouette (spiral, circle, square, triangle, heart or star),
 * sizing each word by its relative frequency.
 */

use thiserror::Error;

pub mod color;
pub mod generator;
pub mod layout;
pub mod path;
pub mod raster;
pub mod shape;
pub mod svg;
pub mod text;

pub use color::{Rgba, DEFAULT_PALETTE, SHADOW};
pub use generator::{WordCloudBuilder, WordCloudGenerator};
pub use layout::{font_size_for, PlacedWord, WordCloud, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use path::{ClosedPolyline, PathSample};
pub use raster::{
    encode_jpeg, load_font, FontRasterizer, FontSource, LoadedFont, TextCanvas, TextMeasure,
};
pub use shape::{CanvasSize, Point, Shape, MIN_CANVAS_DIMENSION};
pub use text::{tokenize, FrequencyTable, RankedWord};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, Error)]
pub enum Error {
    #[error("Font error: {0}")]
    Font(String),
    #[error("Image error: {0}")]
    Image(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Unknown shape: {0} (available: spiral, circle, square, triangle, heart, star)")]
    UnknownShape(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
