use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for entity placement. Tests plug in scripted sources.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let seq_a: Vec<usize> = (0..20).map(|_| a.next_index(100)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.next_index(100)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_next_index_stays_in_range() {
        let mut rng = SessionRng::from_random();
        for _ in 0..1000 {
            assert!(rng.next_index(3) < 3);
        }
    }
}
