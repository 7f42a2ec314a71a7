mod app;
mod cli;
mod color;
mod state;
mod ui;

use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use app::SignalPlotApp;
use cli::Cli;
use signal_plot::data::{loader, stats};
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let signals = loader::load_file(&cli.input)?;
    let report = stats::signal_stats(&signals);

    if cli.json {
        stats::write_json(&report, io::stdout().lock()).context("writing JSON report")?;
    } else {
        stats::write_report(&report, io::stdout().lock()).context("writing report")?;
    }

    if cli.no_gui {
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    let title = format!("Signal Plot – {}", cli.input.display());
    let state = AppState::new(signals, report, cli.mode);

    log::debug!("Opening viewer in {:?} mode", cli.mode);
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SignalPlotApp::new(state)))),
    )
    .map_err(viewer_failed)
}

/// Log a viewer failure and turn it into the process error.
fn viewer_failed(err: eframe::Error) -> anyhow::Error {
    log::error!("viewer failed: {err}");
    anyhow!("viewer failed: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_failure_keeps_the_cause() {
        let err = viewer_failed(eframe::Error::AppCreation("no display".into()));
        let msg = err.to_string();
        assert!(msg.starts_with("viewer failed: "), "{msg}");
        assert!(msg.contains("no display"), "{msg}");
    }
}
