use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use anyhow::{Context, Result};

use super::error::Error;
use super::interpolate::interpolate_x;
use super::model::SignalSet;
use super::parser::parse_signals;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Open `path`, parse it and fill in missing x values.
///
/// The file is closed when this returns, on success or failure.
pub fn load_file(path: &Path) -> Result<SignalSet> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let signals = load_reader(BufReader::new(file))
        .with_context(|| format!("loading signals from {}", path.display()))?;

    log::info!(
        "Loaded {} signals ({} samples) from {}",
        signals.len(),
        signals.total_samples(),
        path.display()
    );
    Ok(signals)
}

/// Parse an already-open seekable stream and interpolate the result.
pub fn load_reader<R: BufRead + Seek>(input: R) -> Result<SignalSet, Error> {
    let mut signals = parse_signals(input)?;
    interpolate_x(&mut signals)?;
    Ok(signals)
}
