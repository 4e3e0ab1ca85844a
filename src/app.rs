use eframe::egui::{self, Ui};

use crate::config::DashboardConfig;
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    pub config: DashboardConfig,
}

impl DashboardApp {
    pub fn new(state: AppState, config: DashboardConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, tabs, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config.window_title);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(self.config.side_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Overview => overview_tab(ui, &self.state),
            Tab::Detail => detail_tab(ui, &self.state, self.config.chart_height),
        });
    }
}

fn overview_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("Document Count per Country per Update");
    ui.add_space(6.0);
    tables::pivot_table(ui, &state.pivot);
}

fn detail_tab(ui: &mut Ui, state: &AppState, chart_height: f32) {
    ui.heading("Detailed View: Number of Documents Collected per Country per Year");
    ui.add_space(6.0);
    plot::year_chart(
        ui,
        &state.detail.counts,
        &state.countries,
        &state.colors,
        chart_height,
    );

    ui.add_space(10.0);
    ui.heading("Filtered Data");
    tables::document_table(ui, &state.detail.rows);
}
