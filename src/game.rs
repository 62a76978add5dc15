//! Two players take turns throwing darts; each dart inside the unit circle
//! scores a point.

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::geometry::{Circle, Point};

pub const DEFAULT_ROUNDS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    FirstWins { first: u32, second: u32 },
    SecondWins { first: u32, second: u32 },
    Tie { score: u32 },
}

impl Outcome {
    pub fn from_scores(first: u32, second: u32) -> Self {
        if first > second {
            Outcome::FirstWins { first, second }
        } else if second > first {
            Outcome::SecondWins { first, second }
        } else {
            Outcome::Tie { score: first }
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        match *self {
            Outcome::FirstWins { first, second } |
            Outcome::SecondWins { first, second } => (first, second),
            Outcome::Tie { score } => (score, score),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Outcome::FirstWins { first, second } =>
                write!(f, "Player 1 wins {} to {}!", first, second),
            Outcome::SecondWins { first, second } =>
                write!(f, "Player 2 wins {} to {}!", second, first),
            Outcome::Tie { score } =>
                write!(f, "Tie game {} to {}!", score, score),
        }
    }
}

/// Plays `rounds` rounds, player 1 throwing before player 2 in each.
/// `visit` receives every dart and whether it scored.
pub fn play_darts<R, S, V>(rng: &mut R,
                           rounds: u32,
                           mut sampler: S,
                           mut visit: V) -> Outcome where
    R: Rng + ?Sized,
    S: FnMut(&mut R) -> Point,
    V: FnMut(&Point, bool) {
    let mut scores = [0u32; 2];
    for round in 0 .. rounds {
        for score in scores.iter_mut() {
            let dart = sampler(rng);
            let hit = Circle::UNIT.contains(&dart);
            if hit {
                *score += 1;
            }
            visit(&dart, hit);
        }
        debug!(round, first = scores[0], second = scores[1], "round played");
    }
    Outcome::from_scores(scores[0], scores[1])
}
