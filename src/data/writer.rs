use std::io::{self, Write};

use super::model::{is_missing, SignalSet};
use super::parser::{END_OF_SIGNAL, MISSING_TOKEN};

/// Serialize `signals` in the text format read by
/// [`parse_signals`](super::parser::parse_signals).
///
/// Missing x values are written as `*`. Labels are written verbatim, so a
/// label containing `#` or a line break will not read back the same.
pub fn write_signals<W: Write>(signals: &SignalSet, mut out: W) -> io::Result<()> {
    for (label, signal) in signals.iter() {
        writeln!(out, "{label}")?;
        for (x, y) in signal.samples() {
            if is_missing(x) {
                writeln!(out, "{MISSING_TOKEN} {y}")?;
            } else {
                writeln!(out, "{x} {y}")?;
            }
        }
        writeln!(out, "{END_OF_SIGNAL}")?;
    }
    out.flush()
}
