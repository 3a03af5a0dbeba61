//! The stateful front end: keeps the counts of the last processed text and
//! the selected shape, and turns them into a laid-out [`WordCloud`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::color::{Rgba, DEFAULT_PALETTE};
use crate::layout::{place_words, WordCloud};
use crate::raster::{TextCanvas, TextMeasure, DEFAULT_FONT_FAMILY};
use crate::shape::{CanvasSize, Shape};
use crate::text::{tokenize, FrequencyTable};

// =============================================================================
// Builder
// =============================================================================

pub struct WordCloudBuilder {
    shape: Shape,
    palette: Vec<Rgba>,
    font_family: String,
    seed: Option<u64>,
}

impl Default for WordCloudBuilder {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            seed: None,
        }
    }
}

impl WordCloudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Same fallback rules as [`WordCloudGenerator::set_shape`].
    pub fn shape_name(mut self, name: &str) -> Self {
        self.shape = Shape::from_name(name);
        self
    }

    pub fn palette(mut self, colors: impl IntoIterator<Item = Rgba>) -> Self {
        self.palette = colors.into_iter().collect();
        if self.palette.is_empty() {
            self.palette = DEFAULT_PALETTE.to_vec();
        }
        self
    }

    /// Family name recorded on laid-out clouds (used by SVG export).
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Fixes the color sequence. Without a seed every generator picks
    /// colors differently.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> WordCloudGenerator {
        let rng = match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };

        WordCloudGenerator {
            frequencies: FrequencyTable::new(),
            shape: self.shape,
            palette: self.palette,
            font_family: self.font_family,
            rng,
        }
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Holds the word counts of the last processed text and the selected shape.
///
/// Not synchronised: use one instance per thread.
pub struct WordCloudGenerator {
    frequencies: FrequencyTable,
    shape: Shape,
    palette: Vec<Rgba>,
    font_family: String,
    rng: ChaCha8Rng,
}

impl Default for WordCloudGenerator {
    fn default() -> Self {
        WordCloudBuilder::default().build()
    }
}

impl WordCloudGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WordCloudBuilder {
        WordCloudBuilder::new()
    }

    /// Replaces the current counts with those of `text`.
    pub fn process_text(&mut self, text: &str) {
        self.frequencies = tokenize(text);
        debug!(distinct = self.frequencies.len(), "processed text");
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Selects a shape by name, ignoring case. Unknown names select the
    /// spiral.
    pub fn set_shape(&mut self, name: &str) {
        self.shape = Shape::from_name(name);
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Computes font sizes, positions and colors without drawing anything.
    pub fn layout<M: TextMeasure + ?Sized>(&mut self, size: CanvasSize, measure: &M) -> WordCloud {
        let mut ranked = self.frequencies.ranked();
        let positions = self.shape.sample_positions(size, ranked.len());
        ranked.truncate(positions.len());

        let words = place_words(
            &ranked,
            &positions,
            self.shape,
            size,
            measure,
            &self.palette,
            &mut self.rng,
        );
        debug!(
            shape = %self.shape,
            available = self.frequencies.len(),
            placed = words.len(),
            "laid out word cloud"
        );

        WordCloud {
            size,
            shape: self.shape,
            font_family: self.font_family.clone(),
            words,
        }
    }

    /// Lays out the current counts and paints them onto `canvas`. With no
    /// words the canvas is left untouched.
    pub fn draw<C: TextCanvas + ?Sized>(&mut self, canvas: &mut C) -> WordCloud {
        let cloud = self.layout(canvas.canvas_size(), &*canvas);
        cloud.paint(canvas);
        cloud
    }
}
