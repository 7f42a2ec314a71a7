use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::cli::PlotMode;
use crate::color::scatter_tint;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal plot (central panel)
// ---------------------------------------------------------------------------

/// Render all visible signals in the central panel.
pub fn signal_plot(ui: &mut Ui, state: &AppState) {
    if state.signals.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The input file contains no signals");
        });
        return;
    }

    Plot::new("signal_plot")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, (label, signal)) in state.signals.iter().enumerate() {
                if !state.visible[idx] {
                    continue;
                }
                let color = state.colors[idx];
                let points: Vec<[f64; 2]> = signal.samples().map(|(x, y)| [x, y]).collect();

                match state.mode {
                    PlotMode::Line => {
                        plot_ui.line(
                            Line::new(PlotPoints::from(points.clone()))
                                .name(label)
                                .color(color)
                                .width(1.5),
                        );
                        plot_ui.points(Points::new(points).name(label).color(color).radius(2.0));
                    }
                    PlotMode::Scatter => {
                        plot_ui.points(
                            Points::new(points)
                                .name(label)
                                .color(scatter_tint(color))
                                .radius(2.0),
                        );
                    }
                }
            }
        });
}
