use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::Result;

/// Writes `tour` as one line of space-separated `<prefix><id>` tokens.
pub fn write_tour<W: Write>(out: &mut W, tour: &[i64], prefix: &str) -> io::Result<()> {
    for (idx, id) in tour.iter().enumerate() {
        if idx > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{prefix}{id}")?;
    }
    writeln!(out)
}

/// Writes the tour to `path`, or stdout when `path` is `None`.
pub fn save_tour(path: Option<&Path>, tour: &[i64], prefix: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_tour(&mut out, tour, prefix)?;
            out.flush()?;
            log::info!("output: wrote n={} path={}", tour.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_tour(&mut out, tour, prefix)?;
            out.flush()?;
        }
    }
    Ok(())
}
