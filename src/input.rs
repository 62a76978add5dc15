use std::io::{BufRead, Write};

use crate::error::{DartsError, Result};

/// Writes `prompt`, then reads one line from `input` and parses it as a
/// positive number of darts.
pub fn read_dart_count<R, W>(input: &mut R,
                              output: &mut W,
                              prompt: &str) -> Result<u64> where
    R: BufRead,
    W: Write {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_dart_count(&line)
}

pub fn parse_dart_count(line: &str) -> Result<u64> {
    let trimmed = line.trim();
    let count = trimmed.parse::<u64>().map_err(|_| DartsError::InvalidDartCount {
        input: trimmed.to_owned(),
    })?;
    if count == 0 {
        return Err(DartsError::NoDarts);
    }
    Ok(count)
}
