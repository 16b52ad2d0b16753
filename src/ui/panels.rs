use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::label_color;
use crate::data::parser::ValidationMode;
use crate::state::AppState;

/// Tokens shown in the features column before the text is cut off.
const PREVIEW_TOKENS: usize = 5;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Import samples…").clicked() {
                open_samples_dialog(state);
                ui.close_menu();
            }
            if ui.button("Restore built-in samples").clicked() {
                state.restore_builtin_samples();
                ui.close_menu();
            }
        });

        if ui
            .add_enabled(!state.is_loading(), egui::Button::new("Reset"))
            .clicked()
        {
            state.reset();
        }

        ui.separator();

        let mut strict = state.validation == ValidationMode::Strict;
        if ui
            .checkbox(&mut strict, "Strict validation")
            .on_hover_text("Require exactly 60 values, each between 0 and 1")
            .changed()
        {
            state.validation = ValidationMode::from_strict(strict);
        }

        ui.separator();

        let classifier = state.classifier();
        if classifier.is_placeholder() {
            ui.label(RichText::new(classifier.name()).color(Color32::YELLOW))
                .on_hover_text("Local stand-in for the real model; results are not meaningful");
        } else {
            ui.label(classifier.name());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Prediction form + result
// ---------------------------------------------------------------------------

/// Render the input field, the Predict button and the current outcome.
pub fn prediction_form(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sonar Mine vs Rock Prediction");
    ui.add_space(6.0);

    let loading = state.is_loading();
    let input = ui.add_enabled(
        !loading,
        egui::TextEdit::singleline(&mut state.input)
            .hint_text("Enter features, comma-separated")
            .desired_width(f32::INFINITY),
    );
    let enter_pressed = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let label = if loading { "Submitting…" } else { "Predict" };
    let width = ui.available_width();
    let clicked = ui
        .add_enabled(!loading, egui::Button::new(label).min_size(egui::vec2(width, 0.0)))
        .clicked();

    if clicked || enter_pressed {
        state.submit();
    }

    ui.add_space(6.0);
    result_view(ui, state);
}

fn result_view(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.error {
        ui.label(RichText::new(err).color(Color32::RED));
        return;
    }
    let Some(prediction) = &state.prediction else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Prediction:").strong().size(16.0));
        ui.label(
            RichText::new(prediction.label.to_string())
                .strong()
                .size(16.0)
                .color(label_color(prediction.label)),
        );
    });

    if let Some(confidence) = prediction.confidence {
        ui.add(
            egui::ProgressBar::new(confidence as f32)
                .text(format!("Confidence {:.0}%", confidence * 100.0)),
        );
        if state.classifier().is_placeholder() {
            ui.small("Confidence is fabricated by the demo heuristic.");
        }
    }
}

// ---------------------------------------------------------------------------
// Sample table
// ---------------------------------------------------------------------------

/// Render the example inputs with per-row copy buttons.
pub fn sample_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Test Data");

    let now = Instant::now();
    let mut copy_requested = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Features");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Expected Label");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Description");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Copy");
            });
        })
        .body(|mut body| {
            for (index, sample) in state.samples.iter().enumerate() {
                body.row(22.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(sample.preview(PREVIEW_TOKENS))
                            .on_hover_text(sample.features.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(sample.label.to_string())
                                .color(label_color(sample.label)),
                        );
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(sample.description.as_deref().unwrap_or(""));
                    });
                    row.col(|ui: &mut Ui| {
                        let text = if state.is_copied(index, now) { "Copied!" } else { "Copy" };
                        if ui.small_button(text).clicked() {
                            copy_requested = Some(index);
                        }
                    });
                });
            }
        });

    if let Some(index) = copy_requested {
        if let Some(text) = state.copy_sample(index, now) {
            ui.ctx().copy_text(text);
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_samples_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Import sample set")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.import_samples(&path);
    }
}
