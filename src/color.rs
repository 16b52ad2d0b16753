use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Label;

// ---------------------------------------------------------------------------
// Label colours
// ---------------------------------------------------------------------------

const MINE_HUE: f32 = 5.0;
const ROCK_HUE: f32 = 210.0;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colour used for a label in the result line and the signal plot.
pub fn label_color(label: Label) -> Color32 {
    match label {
        Label::Mine => hsl_to_color32(MINE_HUE, 0.75, 0.55),
        Label::Rock => hsl_to_color32(ROCK_HUE, 0.75, 0.55),
    }
}

/// Lighter variant for sample curves so the submitted signal stands out.
pub fn sample_color(label: Label) -> Color32 {
    match label {
        Label::Mine => hsl_to_color32(MINE_HUE, 0.45, 0.75),
        Label::Rock => hsl_to_color32(ROCK_HUE, 0.45, 0.75),
    }
}
