//! Seedable random source.
//!
//! Every random draw in the simulation (event selection and the daily event
//! roll) goes through [`RngOracle`], so a session can be replayed from its
//! seed and tests can script the outcome of each draw.

/// Uniform random provider.
///
/// Implementations must be deterministic for a given seed.
pub trait RngOracle: Send {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / UNIT_SCALE
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    /// Bernoulli trial that succeeds with probability `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

const UNIT_SCALE: f64 = 4_294_967_296.0;

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Same seed, same
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: xorshift high bits, then a state-dependent rotation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Spreads low-entropy seeds (0, 1, 2, ...) across the state space.
pub fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Returns the same value on every draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl FixedRng {
    /// Generator whose [`RngOracle::unit`] always returns `unit`.
    pub fn from_unit(unit: f64) -> Self {
        Self(unit_to_raw(unit))
    }
}

impl RngOracle for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

/// Replays a fixed script of draws, cycling when exhausted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Script expressed as the values [`RngOracle::unit`] should return.
    pub fn from_units(units: &[f64]) -> Self {
        Self::new(units.iter().copied().map(unit_to_raw).collect())
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

fn unit_to_raw(unit: f64) -> u32 {
    (unit.clamp(0.0, 1.0) * UNIT_SCALE)
        .ceil()
        .min(f64::from(u32::MAX)) as u32
}
