//! Format-preserving random string generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UPPERCASE_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const HEX_UPPER: &[u8] = b"0123456789ABCDEF";
const HEX_LOWER: &[u8] = b"0123456789abcdef";
const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random source for substitutes
///
/// Lengths are counted in characters, not bytes, so multi-byte input keeps
/// its visible length.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, charset: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| charset[self.rng.gen_range(0..charset.len())] as char)
            .collect()
    }

    /// Same-length uppercase alphanumeric string
    pub fn serial(&mut self, template: &str) -> String {
        self.pick(UPPERCASE_ALPHANUMERIC, template.chars().count())
    }

    /// Uppercase hex string of `len` characters
    pub fn hex_upper(&mut self, len: usize) -> String {
        self.pick(HEX_UPPER, len)
    }

    /// Replace every `-` separated segment by lowercase hex of the same length
    pub fn identifier(&mut self, template: &str) -> String {
        template
            .split('-')
            .map(|segment| self.pick(HEX_LOWER, segment.chars().count()))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Same-length mixed-case alphabetic string
    pub fn alphabetic(&mut self, template: &str) -> String {
        self.pick(ASCII_LETTERS, template.chars().count())
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a delimiter-free address into colon-separated pairs
///
/// An odd trailing character forms its own group.
pub fn group_pairs(compact: &str) -> String {
    let chars: Vec<char> = compact.chars().collect();
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
}
