use eframe::egui::Color32;
use signal_plot::data::stats::SignalStats;
use signal_plot::data::SignalSet;

use crate::cli::PlotMode;
use crate::color::signal_palette;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
///
/// `stats`, `colors` and `visible` are indexed like `signals.iter()`.
pub struct AppState {
    /// Parsed and interpolated signals.
    pub signals: SignalSet,

    /// Per-signal statistics shown in the side panel.
    pub stats: Vec<SignalStats>,

    /// Per-signal colour.
    pub colors: Vec<Color32>,

    /// Per-signal visibility toggle.
    pub visible: Vec<bool>,

    /// Scatter or line drawing.
    pub mode: PlotMode,
}

impl AppState {
    pub fn new(signals: SignalSet, stats: Vec<SignalStats>, mode: PlotMode) -> Self {
        let n = signals.len();
        Self {
            colors: signal_palette(n),
            visible: vec![true; n],
            signals,
            stats,
            mode,
        }
    }

    /// Number of signals currently drawn.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Show or hide every signal.
    pub fn set_all_visible(&mut self, visible: bool) {
        self.visible.iter_mut().for_each(|v| *v = visible);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            PlotMode::Scatter => PlotMode::Line,
            PlotMode::Line => PlotMode::Scatter,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_plot::data::stats::signal_stats;
    use signal_plot::data::Signal;

    fn state() -> AppState {
        let mut signals = SignalSet::new();
        signals.insert("a", Signal::from_xy(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap());
        signals.insert("b", Signal::from_xy(vec![2.0], vec![3.0]).unwrap());
        let stats = signal_stats(&signals);
        AppState::new(signals, stats, PlotMode::Scatter)
    }

    #[test]
    fn everything_visible_initially() {
        let s = state();
        assert_eq!(s.colors.len(), 2);
        assert_eq!(s.stats.len(), 2);
        assert_eq!(s.visible_count(), 2);
    }

    #[test]
    fn hide_all_then_show_all() {
        let mut s = state();
        s.set_all_visible(false);
        assert_eq!(s.visible_count(), 0);
        s.visible[1] = true;
        assert_eq!(s.visible_count(), 1);
        s.set_all_visible(true);
        assert_eq!(s.visible_count(), 2);
    }

    #[test]
    fn mode_toggles_back_and_forth() {
        let mut s = state();
        s.toggle_mode();
        assert_eq!(s.mode, PlotMode::Line);
        s.toggle_mode();
        assert_eq!(s.mode, PlotMode::Scatter);
    }
}
