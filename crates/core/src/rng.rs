//! Uniform random piece selection.
//!
//! Every draw is an independent uniform pick among the 7 kinds; there is no
//! bag or history constraint, so runs of the same piece are possible and
//! intended. A small seedable LCG keeps games reproducible in tests.

use blockfall_types::PieceKind;

/// Linear congruential generator with the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is bumped to 1 to avoid the all-zero
    /// fixed point.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // state = state * 1664525 + 1013904223 (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws piece kinds uniformly at random.
#[derive(Debug, Clone)]
pub struct PieceSampler {
    rng: SimpleRng,
}

impl PieceSampler {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind. Independent of every previous draw.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PieceSampler::new(12345);
        let mut b = PieceSampler::new(12345);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut a = PieceSampler::new(0);
        let mut b = PieceSampler::new(1);
        for _ in 0..10 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn draws_cover_the_catalog() {
        let mut sampler = PieceSampler::new(7);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let kind = sampler.draw();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "1000 draws missed a kind: {seen:?}");
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        let mut sampler = PieceSampler::new(99);
        let mut counts = [0u32; 7];
        let draws = 7000;
        for _ in 0..draws {
            let kind = sampler.draw();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        // Loose bound; catches a broken modulus, not statistical bias.
        for count in counts {
            assert!((500..1500).contains(&count), "{counts:?}");
        }
    }
}
