//! Word colors.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 {
        f32::from(self.a) / 255.0
    }

    pub fn to_skia(&self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Drop shadow drawn one pixel below and to the right of every word.
pub const SHADOW: Rgba = Rgba::rgba(0, 0, 0, 80);

/// Default palette: red, green, blue, purple, yellow, orange, teal.
pub const DEFAULT_PALETTE: [Rgba; 7] = [
    Rgba::rgb(231, 76, 60),
    Rgba::rgb(46, 204, 113),
    Rgba::rgb(52, 152, 219),
    Rgba::rgb(155, 89, 182),
    Rgba::rgb(241, 196, 15),
    Rgba::rgb(230, 126, 34),
    Rgba::rgb(22, 160, 133),
];

/// Uniformly picks a palette entry. An empty palette yields the first
/// default color.
pub fn pick<R: Rng + ?Sized>(palette: &[Rgba], rng: &mut R) -> Rgba {
    if palette.is_empty() {
        return DEFAULT_PALETTE[0];
    }
    palette[rng.random_range(0..palette.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn picks_come_from_the_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(DEFAULT_PALETTE.contains(&pick(&DEFAULT_PALETTE, &mut rng)));
        }
    }

    #[test]
    fn every_palette_entry_gets_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let color = pick(&DEFAULT_PALETTE, &mut rng);
            let idx = DEFAULT_PALETTE.iter().position(|c| *c == color).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        let left: Vec<_> = (0..20).map(|_| pick(&DEFAULT_PALETTE, &mut a)).collect();
        let right: Vec<_> = (0..20).map(|_| pick(&DEFAULT_PALETTE, &mut b)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(DEFAULT_PALETTE[0].to_hex(), "#e74c3c");
        assert_eq!(SHADOW.to_hex(), "#000000");
        assert!((SHADOW.opacity() - 80.0 / 255.0).abs() < f32::EPSILON);
    }
}
