//! Random number sources injected into tiling generation
//!
//! Each grid owns its source, so independent grids never share generator state
//! and seeded grids are reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplier of uniformly distributed small integers
pub trait RandomSource {
    /// Draw an integer uniformly from `0..=max`
    fn uniform(&mut self, max: u8) -> u8;

    /// Draw a single fair bit
    fn bit(&mut self) -> bool {
        self.uniform(1) == 1
    }
}

/// Pseudo-random source backed by a seedable `StdRng`
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source from a 64-bit seed
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self, max: u8) -> u8 {
        self.rng.random_range(0..=max)
    }
}

/// Replays a fixed script of values for golden-output tests
///
/// Values are consumed in order and the script restarts from the beginning
/// once exhausted. Each value is reduced modulo `max + 1`, so a script written
/// for 3-bit draws still yields valid single bits. An empty script yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `script`
    pub const fn new(script: Vec<u8>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, max: u8) -> u8 {
        let Some(position) = self.cursor.checked_rem(self.script.len()) else {
            return 0;
        };
        self.cursor += 1;

        let value = self.script.get(position).copied().unwrap_or(0);
        let modulus = u16::from(max) + 1;
        (u16::from(value) % modulus) as u8
    }
}
