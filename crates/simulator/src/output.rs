use crate::sweep::SweepRow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One row per objective evaluation, 1-based.
pub fn write_history_csv(path: impl AsRef<Path>, history: &[f64]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "iteration,energy")?;
    for (i, energy) in history.iter().enumerate() {
        writeln!(f, "{},{}", i + 1, energy)?;
    }
    f.flush()
}

pub fn write_sweep_csv(path: impl AsRef<Path>, rows: &[SweepRow]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "g,exact,vqe,delta,evals")?;
    for row in rows {
        writeln!(
            f,
            "{},{},{},{},{}",
            row.g, row.exact, row.vqe, row.delta, row.evals
        )?;
    }
    f.flush()
}
