//! Number-guessing feedback
//!
//! The secret lives in 1..=100. Each guess is classified into a warmth
//! band by absolute distance, paired with a lower/higher direction, and
//! the remaining interval narrows so the hint is always the binary-search
//! midpoint.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub const MIN_SECRET: u32 = 1;
pub const MAX_SECRET: u32 = 100;

/// How close the last guess was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warmth {
    Correct,
    /// Within 4
    Hot,
    /// Within 10
    Warm,
    /// Within 25
    Cool,
    Cold,
}

impl Warmth {
    /// Classify an absolute distance into a band
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 => Warmth::Correct,
            1..=4 => Warmth::Hot,
            5..=10 => Warmth::Warm,
            11..=25 => Warmth::Cool,
            _ => Warmth::Cold,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Warmth::Correct => "correct!",
            Warmth::Hot => "hot",
            Warmth::Warm => "warm",
            Warmth::Cool => "cool",
            Warmth::Cold => "cold",
        }
    }
}

/// Which way to adjust the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Lower,
    Higher,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Lower => "go lower",
            Direction::Higher => "go higher",
        }
    }
}

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub warmth: Warmth,
    /// None once the guess is correct
    pub direction: Option<Direction>,
    /// Midpoint of the interval still possible after this guess
    pub hint: u32,
}

/// One round of the guessing game
#[derive(Debug, Clone)]
pub struct GuessGame {
    secret: u32,
    low: u32,
    high: u32,
    pub guesses: u32,
}

impl GuessGame {
    /// New round with a seeded secret
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_secret(rng.random_range(MIN_SECRET..=MAX_SECRET))
    }

    /// New round with a known secret (clamped into range)
    pub fn with_secret(secret: u32) -> Self {
        Self {
            secret: secret.clamp(MIN_SECRET, MAX_SECRET),
            low: MIN_SECRET,
            high: MAX_SECRET,
            guesses: 0,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Classify a guess and narrow the candidate interval
    pub fn guess(&mut self, n: u32) -> Feedback {
        self.guesses += 1;

        let warmth = Warmth::from_distance(n.abs_diff(self.secret));
        let direction = if n > self.secret {
            self.high = self.high.min(n - 1);
            Some(Direction::Lower)
        } else if n < self.secret {
            self.low = self.low.max(n + 1);
            Some(Direction::Higher)
        } else {
            None
        };

        Feedback {
            warmth,
            direction,
            hint: self.low.midpoint(self.high),
        }
    }
}
