use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Signal colours
// ---------------------------------------------------------------------------

/// One colour per signal: hues evenly spaced around the wheel starting at red.
pub fn signal_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.85, 0.5))
        })
        .collect()
}

/// Translucent variant for scatter points so dense overlaps read brighter.
pub fn scatter_tint(color: Color32) -> Color32 {
    color.gamma_multiply(0.6)
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}
