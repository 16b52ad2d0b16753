use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::{label_color, sample_color};
use crate::data::model::FeatureVector;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal plot (central panel)
// ---------------------------------------------------------------------------

fn band_points(features: &FeatureVector) -> PlotPoints<'static> {
    let points: Vec<[f64; 2]> = features
        .as_slice()
        .iter()
        .enumerate()
        .map(|(band, &energy)| [band as f64, energy])
        .collect();
    PlotPoints::new(points)
}

/// Plot the sample returns and the last submitted signal as energy per band.
pub fn signal_plot(ui: &mut Ui, state: &AppState) {
    Plot::new("signal_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Frequency band")
        .y_axis_label("Energy")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, sample) in state.samples.iter().enumerate() {
                let Some(values) = sample.values() else {
                    continue;
                };
                let name = format!("sample {} ({})", idx + 1, sample.label);
                plot_ui.line(
                    Line::new(band_points(&values))
                        .name(&name)
                        .color(sample_color(sample.label))
                        .width(1.0),
                );
            }

            if let Some(submitted) = &state.submitted {
                // Coloured by the prediction once it arrives.
                let color = state
                    .prediction
                    .as_ref()
                    .map(|p| label_color(p.label))
                    .unwrap_or(Color32::LIGHT_GRAY);
                plot_ui.line(
                    Line::new(band_points(submitted))
                        .name("submitted")
                        .color(color)
                        .width(2.0),
                );
            }
        });
}
