use std::io::{self, Write};

/// Splits `total` into consecutive chunks of at most `batch_size` items.  A
/// `batch_size` of zero yields everything in a single chunk.
#[derive(Clone, Debug)]
pub struct Batches {
    remaining: u64,
    batch_size: u64,
}

pub fn batches(total: u64, batch_size: u64) -> Batches {
    let batch_size = if batch_size == 0 { total } else { batch_size };
    Batches { remaining: total, batch_size }
}

impl Iterator for Batches {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let n = std::cmp::min(self.batch_size, self.remaining);
        if n == 0 {
            return None;
        }
        self.remaining -= n;
        Some(n)
    }
}

/// Overwrites the current line with `# NNN%`.
pub fn report_progress<W: Write>(out: &mut W, done: u64, total: u64) -> io::Result<()> {
    let percent = if total == 0 { 100 } else { done * 100 / total };
    write!(out, "\r# {:3}%", percent)?;
    out.flush()
}

pub fn finish_progress<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\r#     ")?;
    out.flush()
}
