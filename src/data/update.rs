use std::fmt;

use super::model::{CellValue, DocumentTable};

/// Name of the derived column appended by [`assign_update`].
pub const UPDATE_COLUMN: &str = "update";

/// Source files produced by each ingestion round.
const UPDATE_MAPPING: [(&str, UpdateBatch); 3] = [
    ("task_2_metadata_1st_dedup.json", UpdateBatch::First),
    ("task_2_metadata_2nd_filtered.json", UpdateBatch::Second),
    ("task_2_metadata_3rd_filtered.json", UpdateBatch::Third),
];

/// One of the three ordinal ingestion rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpdateBatch {
    First,
    Second,
    Third,
}

impl UpdateBatch {
    /// Look up the batch a source file belongs to; unknown files have none.
    pub fn from_source_file(source_file: &str) -> Option<Self> {
        UPDATE_MAPPING
            .iter()
            .find(|(file, _)| *file == source_file)
            .map(|(_, batch)| *batch)
    }

    pub fn label(self) -> &'static str {
        match self {
            UpdateBatch::First => "1st",
            UpdateBatch::Second => "2nd",
            UpdateBatch::Third => "3rd",
        }
    }
}

impl fmt::Display for UpdateBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive the `update` column from each row's `source_file`.
///
/// Rows with an unmapped source file get a null label and are otherwise left
/// untouched. Re-running on a table that already has the column overwrites it.
pub fn assign_update(table: &DocumentTable) -> DocumentTable {
    let mut out = table.clone();
    let existing = out.column_names.iter().position(|c| c == UPDATE_COLUMN);
    if existing.is_none() {
        out.column_names.push(UPDATE_COLUMN.to_string());
    }

    let mut unmapped = 0usize;
    for rec in &mut out.records {
        rec.update = UpdateBatch::from_source_file(&rec.source_file);
        if rec.update.is_none() {
            unmapped += 1;
        }
        let cell = CellValue::from(rec.update.map(UpdateBatch::label));
        match existing {
            Some(idx) if idx < rec.cells.len() => rec.cells[idx] = cell,
            _ => rec.cells.push(cell),
        }
    }

    if unmapped > 0 {
        log::debug!("{unmapped} rows have a source_file outside the update mapping");
    }
    out
}
