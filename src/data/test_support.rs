//! In-memory table builders shared by the unit tests.

use super::loader::{REQUIRED_COLUMNS, TYPE_COLUMNS};
use super::model::{CellValue, DocumentRecord, DocumentTable};

pub const FIRST: &str = "task_2_metadata_1st_dedup.json";
pub const SECOND: &str = "task_2_metadata_2nd_filtered.json";
pub const THIRD: &str = "task_2_metadata_3rd_filtered.json";

pub fn record(country: &str, year: i64, source_file: &str) -> DocumentRecord {
    full_record(country, year, source_file, [None, None, None])
}

/// A row whose year cell was left blank.
pub fn undated_record(country: &str, source_file: &str) -> DocumentRecord {
    let mut rec = record(country, 0, source_file);
    rec.year = None;
    rec.cells[1] = CellValue::Null;
    rec
}

pub fn record_with_types(country: &str, year: i64, types: [Option<&str>; 3]) -> DocumentRecord {
    full_record(country, year, FIRST, types)
}

pub fn full_record(
    country: &str,
    year: i64,
    source_file: &str,
    types: [Option<&str>; 3],
) -> DocumentRecord {
    let [t1, t2, t3] = types;
    DocumentRecord {
        country: country.to_string(),
        year: Some(year),
        source_file: source_file.to_string(),
        document_type_1: t1.map(str::to_string),
        document_type_2: t2.map(str::to_string),
        document_type_3: t3.map(str::to_string),
        update: None,
        cells: vec![
            CellValue::String(country.to_string()),
            CellValue::Integer(year),
            CellValue::String(source_file.to_string()),
            CellValue::from(t1),
            CellValue::from(t2),
            CellValue::from(t3),
        ],
    }
}

pub fn table(records: Vec<DocumentRecord>) -> DocumentTable {
    let column_names = REQUIRED_COLUMNS
        .iter()
        .chain(TYPE_COLUMNS.iter())
        .map(|c| c.to_string())
        .collect();
    DocumentTable::new(column_names, records)
}
