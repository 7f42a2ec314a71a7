use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use super::model::{Signal, SignalSet};

// ---------------------------------------------------------------------------
// SignalStats – per-signal summary
// ---------------------------------------------------------------------------

/// Sample count, x extent and sampling density of one signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalStats {
    pub label: String,
    /// Number of samples.
    pub count: usize,
    /// `max(x) - min(x)`; zero for empty or single-sample signals.
    pub x_span: f64,
    /// `count / x_span`, or `None` when the span is zero.
    pub sample_rate: Option<f64>,
}

impl SignalStats {
    pub fn from_signal(label: &str, signal: &Signal) -> Self {
        let count = signal.len();
        let x_span = if signal.is_empty() {
            0.0
        } else {
            let min = signal.x().iter().copied().fold(f64::INFINITY, f64::min);
            let max = signal.x().iter().copied().fold(f64::NEG_INFINITY, f64::max);
            max - min
        };
        let rate = count as f64 / x_span;

        SignalStats {
            label: label.to_string(),
            count,
            x_span,
            sample_rate: rate.is_finite().then_some(rate),
        }
    }
}

impl fmt::Display for SignalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "> {}: {} datapoints / {:.6} delta x = ",
            self.label, self.count, self.x_span
        )?;
        match self.sample_rate {
            Some(rate) => write!(f, "{rate:.6}"),
            None => write!(f, "undefined"),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Statistics for every signal, in set order.
pub fn signal_stats(signals: &SignalSet) -> Vec<SignalStats> {
    signals
        .iter()
        .map(|(label, signal)| SignalStats::from_signal(label, signal))
        .collect()
}

/// Write the plain-text report: a `signals:` header and one line per signal.
pub fn write_report<W: Write>(stats: &[SignalStats], mut out: W) -> io::Result<()> {
    writeln!(out, "signals:")?;
    for s in stats {
        writeln!(out, "{s}")?;
    }
    Ok(())
}

/// Write the report as a JSON array.
pub fn write_json<W: Write>(stats: &[SignalStats], mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, stats)?;
    writeln!(out).map_err(serde_json::Error::io)
}
