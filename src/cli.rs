use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Plot labeled X/Y signals from a text file, filling in missing x values.
#[derive(Debug, Parser)]
#[command(name = "signal-plot", version, about)]
pub struct Cli {
    /// Signal file to load.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// How samples are drawn. Only `scatter` and `line` are accepted; any
    /// other value is an error rather than a fallback to scatter.
    #[arg(value_enum, default_value_t = PlotMode::Scatter)]
    pub mode: PlotMode,

    /// Print the statistics report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print the report and exit without opening the viewer.
    #[arg(long)]
    pub no_gui: bool,
}

/// Drawing style handed to the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlotMode {
    /// Unconnected points.
    #[default]
    Scatter,
    /// Points joined by lines.
    Line,
}

impl PlotMode {
    pub fn label(self) -> &'static str {
        match self {
            PlotMode::Scatter => "Scatter",
            PlotMode::Line => "Line",
        }
    }
}
