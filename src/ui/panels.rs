use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::TypeSelection;
use crate::data::model::TypeLevel;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            country_filter(ui, state);
            ui.separator();
            year_filter(ui, state);
            ui.separator();
            for level in [TypeLevel::First, TypeLevel::Second, TypeLevel::Third] {
                type_selector(ui, state, level);
            }
        });
}

fn country_filter(ui: &mut Ui, state: &mut AppState) {
    let header_text = format!(
        "Select Countries  ({}/{})",
        state.selected_countries.len(),
        state.countries.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("countries")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_countries();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_countries();
                }
            });

            // Clone so the toggles can mutate state inside the loop.
            let countries = state.countries.clone();
            for country in &countries {
                let mut checked = state.selected_countries.contains(country);
                let text = RichText::new(country).color(state.colors.color_for(country));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_country(country);
                }
            }
        });
}

fn year_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Year Range");
    let bounds = state.year_bounds;

    let mut from = state.years.min;
    let mut to = state.years.max;
    let from_changed = ui
        .add(egui::Slider::new(&mut from, bounds.min..=bounds.max).text("from"))
        .changed();
    let to_changed = ui
        .add(egui::Slider::new(&mut to, bounds.min..=bounds.max).text("to"))
        .changed();

    if from_changed {
        state.set_year_min(from);
    }
    if to_changed {
        state.set_year_max(to);
    }
}

fn type_selector(ui: &mut Ui, state: &mut AppState, level: TypeLevel) {
    ui.strong(level.label());
    let current = state.types.get(level).clone();
    let options = state.detail.type_options.get(level).to_vec();

    let mut chosen: Option<TypeSelection> = None;
    egui::ComboBox::from_id_salt(level.column_name())
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                if ui
                    .selectable_label(*option == current, option.to_string())
                    .clicked()
                {
                    chosen = Some(option.clone());
                }
            }
        });

    if let Some(selection) = chosen {
        log::debug!("{} -> {selection}", level.column_name());
        state.select_type(level, selection);
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title, tab selector and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, title: &str) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(title);
        ui.separator();

        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.title()).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} documents loaded, {} match filters",
            state.table.len(),
            state.visible_count()
        ));
    });
}
