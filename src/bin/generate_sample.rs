use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use signal_plot::data::model::MISSING;
use signal_plot::data::writer::write_signals;
use signal_plot::data::{Signal, SignalSet};

/// Fraction of x values replaced by `*`.
const MISSING_RATIO: f64 = 0.15;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// A noisy sum of Gaussian peaks sampled at `step` intervals from `start`,
/// with some x values knocked out. The first x is always kept.
fn generate_signal(
    samples: usize,
    start: f64,
    step: f64,
    peaks: &[(f64, f64, f64)],
    rng: &mut SimpleRng,
) -> Signal {
    let mut signal = Signal::with_capacity(samples);
    for i in 0..samples {
        let x = start + i as f64 * step;
        let y: f64 = peaks
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
            .sum::<f64>()
            + rng.gauss(0.0, 0.02);
        let x = if i > 0 && rng.next_f64() < MISSING_RATIO {
            MISSING
        } else {
            x
        };
        signal.push(x, y);
    }
    signal
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("sample_signals.txt"), PathBuf::from);
    let mut rng = SimpleRng(42);

    let mut signals = SignalSet::new();
    signals.insert(
        "Channel A",
        generate_signal(500, 0.0, 0.02, &[(3.0, 0.8, 1.0), (7.0, 0.4, 0.6)], &mut rng),
    );
    signals.insert(
        "Channel B",
        generate_signal(250, 0.0, 0.04, &[(5.0, 1.5, 0.8)], &mut rng),
    );
    signals.insert(
        "Reference",
        generate_signal(100, 1.0, 0.08, &[(4.5, 2.0, 0.5)], &mut rng),
    );

    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "# generated by generate_sample")?;
    writeln!(out, "# '*' marks an x value to be interpolated")?;
    writeln!(out)?;
    write_signals(&signals, &mut out)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} signals ({} samples) to {}",
        signals.len(),
        signals.total_samples(),
        output_path.display()
    );
    Ok(())
}
