use std::fmt::Debug;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::Prefix;

pub const SUFFIX_MIN: u16 = 1000;
pub const SUFFIX_MAX: u16 = 9999;

/// Supplies the numeric part of generated plan names.
///
/// Implementations should return values in `SUFFIX_MIN..=SUFFIX_MAX`, anything outside is
/// clamped by [`plan_name`].
pub trait SuffixSource: Debug + Send {
    fn next_suffix(&mut self) -> u16;
}

/// Draws suffixes from the thread local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSuffix;

impl SuffixSource for ThreadRngSuffix {
    fn next_suffix(&mut self) -> u16 {
        rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX)
    }
}

/// Reproducible suffixes from a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededSuffix(StdRng);

impl SeededSuffix {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl SuffixSource for SeededSuffix {
    fn next_suffix(&mut self) -> u16 {
        self.0.gen_range(SUFFIX_MIN..=SUFFIX_MAX)
    }
}

/// Hands out a fixed list of suffixes in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSuffix {
    values: Vec<u16>,
    next: usize,
}

impl SequenceSuffix {
    pub fn new(values: impl IntoIterator<Item = u16>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    pub fn fixed(value: u16) -> Self {
        Self::new([value])
    }
}

impl SuffixSource for SequenceSuffix {
    fn next_suffix(&mut self) -> u16 {
        let value = self.values.get(self.next).copied().unwrap_or(SUFFIX_MIN);

        self.next = match self.values.len() {
            0 => 0,
            len => (self.next.saturating_add(1)) % len,
        };

        value
    }
}

/// Join a prefix and a numeric suffix into a plan name, e.g. `BOG` + `4006` -> `BOG4006`.
pub fn plan_name(prefix: Prefix, suffix: u16) -> String {
    format!("{prefix}{}", suffix.clamp(SUFFIX_MIN, SUFFIX_MAX))
}
