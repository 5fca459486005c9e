use eframe::egui;

use crate::state::AppState;
use crate::ui::{grid, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatgridApp {
    pub state: AppState,
}

impl HeatgridApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HeatgridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: heatmap grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.panels.is_empty() {
                grid::empty_hint(ui, &self.state);
            } else {
                grid::heatmap_grid(ui, &mut self.state);
            }
        });
    }
}
