use std::collections::{BTreeMap, BTreeSet};

use super::model::DocumentTable;
use super::update::UpdateBatch;

/// Label of the appended sum row and column.
pub const TOTAL: &str = "Total";

/// Document counts per country (rows) and update batch (columns), with a
/// trailing `Total` column and `Total` row.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    /// Country labels followed by `Total`.
    pub row_labels: Vec<String>,
    /// Update labels followed by `Total`.
    pub column_labels: Vec<String>,
    /// `cells[row][column]`, same shape as the labels.
    pub cells: Vec<Vec<u64>>,
}

impl PivotTable {
    /// The bottom-right cell.
    pub fn grand_total(&self) -> u64 {
        self.cells
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }
}

/// Build the country × update pivot.
///
/// Rows whose update label is absent are left out of every cell. Countries are
/// sorted by name, update columns by batch order; a combination with no rows
/// is 0.
pub fn build_update_pivot(table: &DocumentTable) -> PivotTable {
    let mut groups: BTreeMap<(&str, UpdateBatch), u64> = BTreeMap::new();
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    let mut batches: BTreeSet<UpdateBatch> = BTreeSet::new();

    for rec in &table.records {
        let Some(batch) = rec.update else {
            continue;
        };
        *groups.entry((rec.country.as_str(), batch)).or_insert(0) += 1;
        countries.insert(rec.country.as_str());
        batches.insert(batch);
    }

    let mut cells: Vec<Vec<u64>> = countries
        .iter()
        .map(|country| {
            let mut row: Vec<u64> = batches
                .iter()
                .map(|batch| groups.get(&(*country, *batch)).copied().unwrap_or(0))
                .collect();
            row.push(row.iter().sum());
            row
        })
        .collect();

    // Summed after the Total column exists so the corner is the grand total.
    let width = batches.len() + 1;
    let total_row: Vec<u64> = (0..width)
        .map(|c| cells.iter().map(|row| row[c]).sum())
        .collect();
    cells.push(total_row);

    let row_labels = countries
        .iter()
        .map(|c| c.to_string())
        .chain(std::iter::once(TOTAL.to_string()))
        .collect();
    let column_labels = batches
        .iter()
        .map(|b| b.label().to_string())
        .chain(std::iter::once(TOTAL.to_string()))
        .collect();

    PivotTable {
        row_labels,
        column_labels,
        cells,
    }
}
