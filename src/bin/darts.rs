use std::io;
use std::process;

use docopt::Docopt;
use serde::Deserialize;
use tracing::{debug, error};

use darts::logger;
use darts::program::{run, Options};

const USAGE: &str = "
Usage:
  darts [options]
  darts --help

Options:

  -h --help
    Show this screen.

  --darts=<n>
    Number of darts thrown to estimate pi; 0 asks on standard input.
    [default: 0]

  --rounds=<n>
    Rounds in the two-player game.
    [default: 10]

  --batch=<n>
    Darts thrown between progress updates.
    [default: 5000]

  --width=<cols>
    Board width in characters.
    [default: 61]

  --height=<rows>
    Board height in characters.
    [default: 31]

  --color
    Color hits green, misses red and the board blue.

  -v --verbose
    Log debug messages.

";

#[derive(Debug, Deserialize)]
struct Args {
    flag_darts: u64,
    flag_rounds: u32,
    flag_batch: u64,
    flag_width: usize,
    flag_height: usize,
    flag_color: bool,
    flag_verbose: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            darts: self.flag_darts,
            rounds: self.flag_rounds,
            batch: self.flag_batch,
            width: self.flag_width,
            height: self.flag_height,
            color: self.flag_color,
        }
    }
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    logger::init_logger(args.flag_verbose);
    debug!(?args, "parsed arguments");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = rand::thread_rng();
    if let Err(e) = run(&mut rng, &args.options(), &mut stdin.lock(), &mut stdout.lock()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
