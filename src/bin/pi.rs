use std::process;

use docopt::Docopt;
use rand::distributions::Distribution;
use serde::Deserialize;
use tracing::error;

use darts::{dartboard, logger, monte_pi};

const USAGE: &str = "
Usage:
  pi [options] <num-samples>
  pi --help

Options:
  -h --help     Show this screen.
  -v --verbose  Log debug messages.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_num_samples: u64,
    flag_verbose: bool,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    logger::init_logger(args.flag_verbose);

    let board = dartboard();
    let mut rng = rand::thread_rng();

    println!("calculating pi with {} samples ...", args.arg_num_samples);
    match monte_pi(&mut rng, args.arg_num_samples, |rng| board.sample(rng), |_, _| ()) {
        Ok(estimate) => println!("pi = {}", estimate.pi()),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
