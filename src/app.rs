use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

/// Repaint cadence while waiting on a request or a copy confirmation.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustySonarApp {
    pub state: AppState,
}

impl RustySonarApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config),
        }
    }
}

impl eframe::App for RustySonarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();
        let copies_showing = self.state.expire_copies(Instant::now());
        if self.state.is_loading() || copies_showing {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: form, result and samples ----
        egui::SidePanel::left("prediction_panel")
            .default_width(480.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::prediction_form(ui, &mut self.state);
                ui.separator();
                panels::sample_table(ui, &mut self.state);
            });

        // ---- Central panel: signal plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::signal_plot(ui, &self.state);
        });
    }
}
