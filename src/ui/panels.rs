use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::cli::PlotMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – signal list
// ---------------------------------------------------------------------------

/// Render the signal list: visibility toggles and per-signal statistics.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Signals");
    ui.separator();

    if state.signals.is_empty() {
        ui.label("No signals loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.set_all_visible(true);
        }
        if ui.small_button("None").clicked() {
            state.set_all_visible(false);
        }
    });

    let AppState {
        stats,
        colors,
        visible,
        ..
    } = state;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for ((s, color), shown) in stats.iter().zip(colors.iter()).zip(visible.iter_mut()) {
                let text = RichText::new(&s.label).color(*color).strong();
                ui.checkbox(shown, text);

                let rate = s
                    .sample_rate
                    .map_or_else(|| "undefined".to_string(), |r| format!("{r:.4}"));
                ui.label(
                    RichText::new(format!(
                        "{} samples · Δx {:.4} · rate {rate}",
                        s.count, s.x_span
                    ))
                    .small()
                    .weak(),
                );
                ui.add_space(4.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: summary and drawing mode.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} signals loaded, {} visible",
            state.signals.len(),
            state.visible_count()
        ));

        ui.separator();

        for mode in [PlotMode::Scatter, PlotMode::Line] {
            if ui
                .selectable_label(state.mode == mode, mode.label())
                .clicked()
                && state.mode != mode
            {
                state.toggle_mode();
            }
        }
    });
}
