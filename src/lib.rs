//! Monte Carlo estimation of pi by throwing darts at a 2x2 board with an
//! inscribed unit circle.
//!
//! The circle covers `pi / 4` of the board, so four times the fraction of
//! uniformly thrown darts landing inside it approximates pi.

use std::f64::consts::PI;
use std::fmt;
use std::ops::AddAssign;

use rand::distributions::Distribution;
use rand::Rng;
use tracing::debug;

pub mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logger;
pub mod program;
pub mod utils;

use board::{Canvas, Mark};
use error::{DartsError, Result};
use geometry::{Circle, Point, Square, SquareSampler};

/// Darts thrown so far and how many landed inside the unit circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Estimate {
    pub inside: u64,
    pub total: u64,
}

impl Estimate {
    /// Fraction of darts inside the circle; `NaN` before the first dart.
    pub fn ratio(&self) -> f64 {
        self.inside as f64 / self.total as f64
    }

    pub fn pi(&self) -> f64 {
        4.0 * self.ratio()
    }

    pub fn error(&self) -> f64 {
        (self.pi() - PI).abs()
    }
}

impl AddAssign for Estimate {
    fn add_assign(&mut self, other: Estimate) {
        self.inside += other.inside;
        self.total += other.total;
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} of {} darts inside)", self.pi(), self.inside, self.total)
    }
}

/// Uniform dart distribution over the 2x2 board.
pub fn dartboard() -> SquareSampler {
    Square::dartboard().sampler()
}

/// Draws one dart uniformly from the 2x2 board.  Loops should sample a
/// single `dartboard()` instead.
pub fn random_dart<R: Rng + ?Sized>(rng: &mut R) -> Point {
    dartboard().sample(rng)
}

/// Throws a random dart, plots it on `canvas` as a hit or a miss and returns
/// whether it landed inside the unit circle.
pub fn throw_dart<R: Rng + ?Sized>(rng: &mut R, canvas: &mut Canvas) -> bool {
    let dart = random_dart(rng);
    let inside = Circle::UNIT.contains(&dart);
    canvas.plot(&dart, Mark::dart(inside));
    inside
}

/// `sampler` produces each dart; `visit` sees every dart together with its
/// classification against the unit circle.
///
/// Unlike `monte_pi` this accepts `num_darts == 0`, so that callers can
/// accumulate several batches into one `Estimate`.
pub fn throw_darts<R, S, V>(rng: &mut R,
                            num_darts: u64,
                            mut sampler: S,
                            mut visit: V) -> Estimate where
    R: Rng + ?Sized,
    S: FnMut(&mut R) -> Point,
    V: FnMut(&Point, bool) {
    let mut inside = 0;
    for _ in 0 .. num_darts {
        let dart = sampler(rng);
        let hit = Circle::UNIT.contains(&dart);
        if hit {
            inside += 1;
        }
        visit(&dart, hit);
    }
    Estimate { inside, total: num_darts }
}

/// Approximates pi as `4 * inside / num_darts`.
pub fn monte_pi<R, S, V>(rng: &mut R,
                         num_darts: u64,
                         sampler: S,
                         visit: V) -> Result<Estimate> where
    R: Rng + ?Sized,
    S: FnMut(&mut R) -> Point,
    V: FnMut(&Point, bool) {
    if num_darts == 0 {
        return Err(DartsError::NoDarts);
    }
    let estimate = throw_darts(rng, num_darts, sampler, visit);
    debug!(inside = estimate.inside, total = estimate.total, "darts thrown");
    Ok(estimate)
}
