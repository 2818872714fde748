//! Decorative background: floating dots and drifting code glyphs.
//!
//! Seeded once at startup with random positions, phases, and speeds; the
//! markup animates them off the animation clock. Coordinates are fractions of
//! the window so the field scales with resizes.

use crate::config::{BACKGROUND_DOT_COUNT, BACKGROUND_GLYPHS};
use rand::Rng;

pub struct Dot {
    pub x: f32,
    pub y: f32,
    /// Diameter in logical pixels.
    pub size: f32,
    /// Animation phase offset in seconds.
    pub phase: f32,
    /// Full drift cycle duration in seconds.
    pub duration: f32,
}

pub struct Glyph {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub phase: f32,
    pub duration: f32,
}

pub fn seed<R: Rng>(rng: &mut R) -> (Vec<Dot>, Vec<Glyph>) {
    let dots = (0..BACKGROUND_DOT_COUNT)
        .map(|_| Dot {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            size: rng.gen_range(2.0..5.0),
            phase: rng.gen_range(0.0..6.0),
            duration: rng.gen_range(6.0..14.0),
        })
        .collect();

    let glyphs = BACKGROUND_GLYPHS
        .iter()
        .map(|&text| Glyph {
            text,
            x: rng.gen_range(0.05..0.95),
            y: rng.gen_range(0.05..0.95),
            phase: rng.gen_range(0.0..8.0),
            duration: rng.gen_range(10.0..22.0),
        })
        .collect();

    (dots, glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeds_configured_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let (dots, glyphs) = seed(&mut rng);
        assert_eq!(dots.len(), BACKGROUND_DOT_COUNT);
        assert_eq!(glyphs.len(), BACKGROUND_GLYPHS.len());
    }

    #[test]
    fn positions_stay_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(7);
        let (dots, glyphs) = seed(&mut rng);

        for dot in &dots {
            assert!((0.0..1.0).contains(&dot.x));
            assert!((0.0..1.0).contains(&dot.y));
            assert!(dot.duration > 0.0);
        }
        for glyph in &glyphs {
            assert!((0.0..1.0).contains(&glyph.x));
            assert!((0.0..1.0).contains(&glyph.y));
        }
    }
}
