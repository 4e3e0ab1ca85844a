use std::collections::BTreeSet;
use std::sync::Arc;

use crate::color::SeriesColors;
use crate::data::aggregate::{build_detail_view, DetailView};
use crate::data::filter::{TypeSelection, TypeSelectors};
use crate::data::model::{DocumentTable, TypeLevel, YearRange};
use crate::data::pivot::{build_update_pivot, PivotTable};
use crate::data::update::assign_update;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The two views of the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Detail,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Detail];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview Table",
            Tab::Detail => "Detailed View",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset with update labels. Never mutated.
    pub table: Arc<DocumentTable>,

    /// Country × update counts, built once.
    pub pivot: PivotTable,

    /// Every country in the dataset, in order of first appearance.
    pub countries: Vec<String>,

    /// Observed year bounds; the slider limits.
    pub year_bounds: YearRange,

    /// Countries currently selected.
    pub selected_countries: BTreeSet<String>,

    /// Currently selected inclusive year range.
    pub years: YearRange,

    /// Hierarchical document-type selectors.
    pub types: TypeSelectors,

    /// Result of the filter pipeline for the current selections (cached).
    pub detail: DetailView,

    /// One chart colour per country.
    pub colors: SeriesColors,

    /// Active central-panel view.
    pub tab: Tab,
}

impl AppState {
    /// Derive the update labels and the pivot, and select everything.
    pub fn new(table: &DocumentTable) -> Self {
        let table = Arc::new(assign_update(table));
        let pivot = build_update_pivot(&table);
        let countries = table.countries();
        let year_bounds = table.year_bounds().unwrap_or(YearRange::new(0, 0));
        let selected_countries: BTreeSet<String> = countries.iter().cloned().collect();
        let types = TypeSelectors::default();
        let detail = build_detail_view(&table, &types, &selected_countries, year_bounds);

        log::info!(
            "Dashboard ready: {} documents, {} countries, years {}..={}",
            table.len(),
            countries.len(),
            year_bounds.min,
            year_bounds.max
        );

        Self {
            colors: SeriesColors::new(&countries),
            table,
            pivot,
            countries,
            year_bounds,
            selected_countries,
            years: year_bounds,
            types,
            detail,
            tab: Tab::default(),
        }
    }

    /// Recompute the detail view from scratch after a selection change.
    pub fn refilter(&mut self) {
        self.detail = build_detail_view(
            &self.table,
            &self.types,
            &self.selected_countries,
            self.years,
        );
    }

    /// Toggle a single country in the multi-select.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.selected_countries.remove(country) {
            self.selected_countries.insert(country.to_string());
        }
        self.refilter();
    }

    /// Select every country.
    pub fn select_all_countries(&mut self) {
        self.selected_countries = self.countries.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every country.
    pub fn select_no_countries(&mut self) {
        self.selected_countries.clear();
        self.refilter();
    }

    /// Move the lower bound, clamped to the data and never above the upper.
    pub fn set_year_min(&mut self, year: i64) {
        let year = year.clamp(self.year_bounds.min, self.years.max.min(self.year_bounds.max));
        if year != self.years.min {
            self.years.min = year;
            self.refilter();
        }
    }

    /// Move the upper bound, clamped to the data and never below the lower.
    pub fn set_year_max(&mut self, year: i64) {
        let year = year.clamp(self.years.min.max(self.year_bounds.min), self.year_bounds.max);
        if year != self.years.max {
            self.years.max = year;
            self.refilter();
        }
    }

    /// Change one type selector; the selectors below it go back to `All`.
    pub fn select_type(&mut self, level: TypeLevel, selection: TypeSelection) {
        if self.types.select(level, selection) {
            self.refilter();
        }
    }

    /// Rows matching the current filters.
    pub fn visible_count(&self) -> usize {
        self.detail.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{full_record, record, table, FIRST, SECOND};

    fn state() -> AppState {
        AppState::new(&table(vec![
            full_record("Kenya", 2019, FIRST, [Some("Budget"), Some("Enacted"), Some("Annual")]),
            full_record("Kenya", 2020, SECOND, [Some("Budget"), Some("Proposal"), None]),
            full_record("Ghana", 2021, FIRST, [Some("Audit"), None, None]),
            record("Benin", 2022, "unknown.json"),
        ]))
    }

    #[test]
    fn defaults_select_everything() {
        let s = state();
        assert_eq!(s.countries, vec!["Kenya", "Ghana", "Benin"]);
        assert_eq!(s.selected_countries.len(), 3);
        assert_eq!(s.years, YearRange::new(2019, 2022));
        assert_eq!(s.types, TypeSelectors::default());
        assert_eq!(s.visible_count(), 4);
        assert_eq!(s.pivot.grand_total(), 3);
        assert_eq!(s.tab, Tab::Overview);
    }

    #[test]
    fn country_toggles_refilter() {
        let mut s = state();
        s.toggle_country("Kenya");
        assert_eq!(s.visible_count(), 2);
        s.select_no_countries();
        assert_eq!(s.visible_count(), 0);
        assert!(s.detail.counts.is_empty());
        s.toggle_country("Ghana");
        assert_eq!(s.visible_count(), 1);
        s.select_all_countries();
        assert_eq!(s.visible_count(), 4);
    }

    #[test]
    fn year_bounds_are_clamped_and_ordered() {
        let mut s = state();
        s.set_year_min(1990);
        assert_eq!(s.years.min, 2019);
        s.set_year_max(2020);
        s.set_year_min(2021);
        assert_eq!(s.years, YearRange::new(2020, 2020));
        assert_eq!(s.visible_count(), 1);
        s.set_year_max(2100);
        assert_eq!(s.years.max, 2022);
    }

    #[test]
    fn changing_type_1_resets_dependent_selectors() {
        let mut s = state();
        s.select_type(TypeLevel::First, TypeSelection::Only("Budget".to_string()));
        s.select_type(TypeLevel::Second, TypeSelection::Only("Enacted".to_string()));
        assert_eq!(s.visible_count(), 1);
        assert_eq!(
            s.detail.type_options.type_3,
            vec![TypeSelection::All, TypeSelection::Only("Annual".to_string())]
        );

        s.select_type(TypeLevel::First, TypeSelection::Only("Audit".to_string()));
        assert_eq!(s.types.type_2, TypeSelection::All);
        assert_eq!(s.visible_count(), 1);
        assert_eq!(s.detail.rows.records[0].country, "Ghana");
    }

    #[test]
    fn empty_dataset_does_not_panic() {
        let s = AppState::new(&table(Vec::new()));
        assert_eq!(s.visible_count(), 0);
        assert_eq!(s.pivot.grand_total(), 0);
    }
}
