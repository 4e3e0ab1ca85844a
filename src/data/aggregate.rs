use std::collections::{BTreeMap, BTreeSet};

use super::filter::{filter_by_types, CascadeResult, TypeOptions, TypeSelectors};
use super::model::{DocumentTable, YearRange};

/// One bar of the detail chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCount {
    pub country: String,
    pub year: i64,
    pub document_count: u64,
}

/// Keep rows whose country is selected and whose year lies in `years`.
pub fn filter_by_country_year(
    table: &DocumentTable,
    countries: &BTreeSet<String>,
    years: YearRange,
) -> DocumentTable {
    table.filtered(|rec| countries.contains(&rec.country) && years.contains(rec.year))
}

/// Long-format `(country, year, document_count)` rows sorted by country then
/// year. Combinations without documents are absent, not zero; rows without a
/// year are not counted.
pub fn count_by_country_year(table: &DocumentTable) -> Vec<YearCount> {
    let mut groups: BTreeMap<(&str, i64), u64> = BTreeMap::new();
    for rec in &table.records {
        let Some(year) = rec.year else {
            continue;
        };
        *groups.entry((rec.country.as_str(), year)).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|((country, year), document_count)| YearCount {
            country: country.to_string(),
            year,
            document_count,
        })
        .collect()
}

/// Restrict to the selected countries and the inclusive year range, then count
/// per (country, year).
pub fn filter_and_count(
    table: &DocumentTable,
    countries: &BTreeSet<String>,
    year_min: i64,
    year_max: i64,
) -> Vec<YearCount> {
    count_by_country_year(&filter_by_country_year(
        table,
        countries,
        YearRange::new(year_min, year_max),
    ))
}

// ---------------------------------------------------------------------------
// Detail view: the full filter pipeline behind the second tab
// ---------------------------------------------------------------------------

/// Everything the detail tab shows for one set of selections.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Rows left after every filter.
    pub rows: DocumentTable,
    /// Per (country, year) counts of `rows`.
    pub counts: Vec<YearCount>,
    /// Option lists for the three type selectors.
    pub type_options: TypeOptions,
}

/// Type cascade first, then the country and year restriction, then counting.
pub fn build_detail_view(
    table: &DocumentTable,
    selectors: &TypeSelectors,
    countries: &BTreeSet<String>,
    years: YearRange,
) -> DetailView {
    let CascadeResult {
        table: narrowed,
        options,
    } = filter_by_types(table, selectors);
    let rows = filter_by_country_year(&narrowed, countries, years);
    let counts = filter_and_count(&narrowed, countries, years.min, years.max);
    log::debug!(
        "detail view: {} after type filters, {} after country/year, {} bars",
        narrowed.len(),
        rows.len(),
        counts.len()
    );
    DetailView {
        rows,
        counts,
        type_options: options,
    }
}
