//! Random sources used by the password generator.
//!
//! The generator only ever asks for a uniform index, so swapping the
//! default thread RNG for the OS CSPRNG or a seeded ChaCha stream does not
//! change how passwords are assembled.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_core::OsRng;

pub trait RandomSource {
    /// Uniform index in `[0, bound)`. `bound` must be positive.
    fn uniform_index(&mut self, bound: usize) -> usize;

    /// Uniformly pick one character from a non-empty set.
    fn pick_char(&mut self, chars: &[char]) -> char {
        debug_assert!(!chars.is_empty(), "cannot pick from an empty set");
        chars[self.uniform_index(chars.len())]
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle_chars(&mut self, chars: &mut [char]) {
        for i in (1..chars.len()).rev() {
            let j = self.uniform_index(i + 1);
            chars.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform_index(&mut self, bound: usize) -> usize {
        (**self).uniform_index(bound)
    }
}

/// Thread-local, non-cryptographic RNG. Default source.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom { rng: rand::thread_rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn uniform_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Operating system CSPRNG.
#[derive(Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn uniform_index(&mut self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}

/// Deterministic ChaCha20 stream, for reproducible output.
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
