use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// A source of uniform values in `[0, 1)`
///
/// Food placement only needs this much, which lets tests pin placement
/// with a fixed stream instead of a real generator.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Linear congruential generator over a single 32-bit word
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`, output `state / 2^32`.
/// Two generators built from the same seed yield identical streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Current internal word
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}
