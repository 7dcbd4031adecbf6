//! RNG oracle for injected random number generation.
//!
//! The engine never owns a random source. Callers pass one in, which keeps
//! every battle reproducible: the same seed (or the same scripted draws)
//! always yields the same sequence of hits and misses.

use std::collections::VecDeque;

/// Source of uniformly distributed integers.
pub trait RngOracle {
    /// Generate the next raw random value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.range(1, sides)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
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

    /// PCG output function using XSH-RR (xorshift high, random rotate).
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

/// Replays a fixed sequence of draws.
///
/// Each call to [`RngOracle::range`] consumes one scripted value, clamped into
/// the requested bounds. Once the script runs out every draw returns `max`,
/// which for the hit check means "hit".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    draws: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws.pop_front().unwrap_or(u32::MAX)
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        match self.draws.pop_front() {
            Some(draw) => draw.clamp(min, max.max(min)),
            None => max.max(min),
        }
    }
}
