//! The three-part dartboard session: ten test darts, a two-player game and
//! the pi estimate.

use std::io::{BufRead, Write};

use rand::distributions::Distribution;
use rand::Rng;
use tracing::{debug, info};

use crate::board::{Canvas, Mark};
use crate::error::Result;
use crate::game::{play_darts, DEFAULT_ROUNDS};
use crate::input::read_dart_count;
use crate::utils::{batches, finish_progress, report_progress};
use crate::{dartboard, throw_dart, throw_darts, Estimate};

pub const INTRO: &str = "\
This is a program that simulates throwing darts at a dartboard
in order to approximate pi: The ratio of darts in a unit circle
to the total number of darts in a 2X2 square should be
approximately  equal to pi/4";

pub const PROMPT: &str = "\nPlease input the number of darts to be thrown in the simulation:  ";

pub const TEST_DARTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Darts for the estimate; 0 reads the count from the input.
    pub darts: u64,
    pub rounds: u32,
    pub batch: u64,
    pub width: usize,
    pub height: usize,
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            darts: 0,
            rounds: DEFAULT_ROUNDS,
            batch: 5000,
            width: 61,
            height: 31,
            color: false,
        }
    }
}

/// Runs all three parts, writing boards and results to `out`.  The dart
/// count is read from `input` unless `options.darts` is set.
pub fn run<R, I, W>(rng: &mut R,
                    options: &Options,
                    input: &mut I,
                    out: &mut W) -> Result<Estimate> where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write {
    let mut canvas = Canvas::new(options.width, options.height)?;
    let board = dartboard();

    writeln!(out, "{}", INTRO)?;

    writeln!(out, "=========== Part A ===========")?;
    canvas.set_up_dartboard();
    for _ in 0 .. TEST_DARTS {
        throw_dart(rng, &mut canvas);
    }
    write!(out, "{}", canvas.render(options.color))?;
    writeln!(out, "\tPart A Complete...")?;

    writeln!(out, "=========== Part B ===========")?;
    canvas.clear();
    canvas.set_up_dartboard();
    let outcome = play_darts(rng, options.rounds, |rng| board.sample(rng),
                             |dart, hit| canvas.plot(dart, Mark::dart(hit)));
    info!(%outcome, "game over");
    write!(out, "{}", canvas.render(options.color))?;
    writeln!(out, "{}", outcome)?;
    writeln!(out, "\tPart B Complete...")?;

    writeln!(out, "=========== Part C ===========")?;
    canvas.clear();
    canvas.set_up_dartboard();
    let num_darts = if options.darts > 0 {
        options.darts
    } else {
        read_dart_count(input, out, PROMPT)?
    };
    debug!(num_darts, batch = options.batch, "starting simulation");

    let mut estimate = Estimate::default();
    for n in batches(num_darts, options.batch) {
        estimate += throw_darts(rng, n, |rng| board.sample(rng),
                                |dart, hit| canvas.plot(dart, Mark::dart(hit)));
        report_progress(out, estimate.total, num_darts)?;
    }
    finish_progress(out)?;
    info!(inside = estimate.inside, total = estimate.total,
          error = estimate.error(), "simulation finished");

    write!(out, "{}", canvas.render(options.color))?;
    writeln!(out, "\nThe estimation of pi using {} virtual darts is {}",
             num_darts, estimate.pi())?;
    writeln!(out, "\tPart C Complete...")?;
    Ok(estimate)
}
