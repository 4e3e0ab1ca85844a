use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};

use super::error::DataError;
use super::model::{is_null_token, CellValue, DocumentRecord, DocumentTable};

/// Fixed location of the merged dataset, relative to the working directory.
pub const DATA_FILE: &str = "merged_metadata.csv";

/// Columns every row must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["country", "year", "source_file"];

/// Optional hierarchical document-type columns.
pub const TYPE_COLUMNS: [&str; 3] = ["document_type_1", "document_type_2", "document_type_3"];

/// Process-wide cache behind [`load`].
static DATASET: DatasetCache = DatasetCache::new();

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the merged dataset from [`DATA_FILE`].
///
/// The first successful call reads the file; every later call returns the same
/// instance without touching the filesystem.
pub fn load() -> Result<&'static DocumentTable, DataError> {
    DATASET.get_or_load(Path::new(DATA_FILE))
}

// ---------------------------------------------------------------------------
// Memoized loader
// ---------------------------------------------------------------------------

/// Load-once holder for a [`DocumentTable`].
///
/// Failed loads are not cached, the next call tries the file again.
pub struct DatasetCache {
    table: OnceLock<DocumentTable>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Result<&DocumentTable, DataError> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = load_csv(path).map_err(|e| DataError::DataUnavailable {
            path: path.to_path_buf(),
            reason: format!("{e:#}"),
        })?;
        log::info!(
            "Loaded {} documents with columns {:?} from {}",
            table.len(),
            table.column_names,
            path.display()
        );
        Ok(self.table.get_or_init(|| table))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a CSV file whose header names at least [`REQUIRED_COLUMNS`].
pub fn load_csv(path: &Path) -> Result<DocumentTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

/// Parse CSV text from any reader.
pub fn read_csv<R: Read>(input: R) -> Result<DocumentTable> {
    // Short rows are padded with nulls rather than rejected.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let [country_idx, year_idx, source_idx] = {
        let mut idx = [0usize; 3];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = column(name).with_context(|| format!("CSV missing '{name}' column"))?;
        }
        idx
    };
    let type_idx: Vec<Option<usize>> = TYPE_COLUMNS.iter().map(|name| column(*name)).collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // 1-based data row, header excluded.
        let row = row_no + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;

        let country = record.get(country_idx).unwrap_or("").to_string();
        if is_null_token(&country) {
            bail!("CSV row {row}: missing 'country'");
        }
        let year = parse_year(record.get(year_idx).unwrap_or(""))
            .with_context(|| format!("CSV row {row}: invalid 'year'"))?;
        let source_file = record.get(source_idx).unwrap_or("").to_string();

        let document_type = |level: usize| {
            type_idx[level]
                .and_then(|idx| record.get(idx))
                .filter(|s| !is_null_token(s))
                .map(str::to_string)
        };

        let cells = (0..headers.len())
            .map(|idx| CellValue::infer(record.get(idx).unwrap_or("")))
            .collect();

        records.push(DocumentRecord {
            country,
            year,
            source_file,
            document_type_1: document_type(0),
            document_type_2: document_type(1),
            document_type_3: document_type(2),
            update: None,
            cells,
        });
    }

    Ok(DocumentTable::new(headers, records))
}

/// Accept `2020` as well as the `2020.0` pandas writes for nullable columns.
/// A blank year is missing, not an error.
fn parse_year(s: &str) -> Result<Option<i64>> {
    let s = s.trim();
    if is_null_token(s) {
        return Ok(None);
    }
    if let Ok(year) = s.parse::<i64>() {
        return Ok(Some(year));
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f.is_finite() => Ok(Some(f as i64)),
        _ => bail!("'{s}' is not an integer year"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
country,year,source_file,document_type_1,document_type_2,document_type_3,title
Kenya,2020,task_2_metadata_1st_dedup.json,Budget,Enacted,,Budget 2020
Ghana,2021.0,task_2_metadata_2nd_filtered.json,,,,
";

    #[test]
    fn parses_typed_fields_and_raw_cells() {
        let table = read_csv(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names.len(), 7);
        assert_eq!(table.column_names[6], "title");

        let kenya = &table.records[0];
        assert_eq!(kenya.country, "Kenya");
        assert_eq!(kenya.year, Some(2020));
        assert_eq!(kenya.document_type_1.as_deref(), Some("Budget"));
        assert_eq!(kenya.document_type_2.as_deref(), Some("Enacted"));
        assert_eq!(kenya.document_type_3, None);
        assert_eq!(kenya.cells[6], CellValue::String("Budget 2020".to_string()));

        let ghana = &table.records[1];
        assert_eq!(ghana.year, Some(2021));
        assert_eq!(ghana.document_type_1, None);
        assert!(ghana.cells[6].is_null());
    }

    #[test]
    fn type_columns_are_optional() {
        let table = read_csv("country,year,source_file\nBenin,2019,x.json\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].document_type_1, None);
        assert_eq!(table.records[0].document_type_3, None);
    }

    #[test]
    fn rejects_missing_required_column() {
        let err = read_csv("country,source_file\nKenya,a.json\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("'year'"));
    }

    #[test]
    fn blank_year_is_missing_not_fatal() {
        let input = "\
country,year,source_file
Kenya,2020.0,task_2_metadata_1st_dedup.json
Ghana,,task_2_metadata_1st_dedup.json
Benin,NaN,task_2_metadata_2nd_filtered.json
";
        let table = read_csv(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].year, Some(2020));
        assert_eq!(table.records[1].year, None);
        assert_eq!(table.records[2].year, None);
        assert!(table.records[1].cells[1].is_null());
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let input = "\
country,year,source_file,document_type_1
Kenya,2020,a.json,Budget
Ghana,2021,b.json
";
        let table = read_csv(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[1].document_type_1, None);
        assert_eq!(table.records[1].cells.len(), table.column_names.len());
        assert!(table.records[1].cells[3].is_null());
    }

    #[test]
    fn missing_value_tokens_are_not_categories() {
        let input = "\
country,year,source_file,document_type_1
Kenya,2020,a.json,NA
Ghana,2021,b.json,Budget
";
        let table = read_csv(input.as_bytes()).unwrap();
        assert_eq!(table.records[0].document_type_1, None);
        assert_eq!(table.records[1].document_type_1.as_deref(), Some("Budget"));
    }

    #[test]
    fn rejects_missing_country() {
        let input = "country,year,source_file\nKenya,2020,a.json\n,2021,b.json\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("'country'"), "{msg}");
    }

    #[test]
    fn rejects_non_integer_year() {
        let err = read_csv("country,year,source_file\nKenya,soon,a.json\n".as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 1"), "{msg}");
        assert!(msg.contains("soon"), "{msg}");
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempdir().unwrap();
        let cache = DatasetCache::new();
        let err = cache.get_or_load(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable { .. }));
    }

    #[test]
    fn cache_returns_same_instance_without_rereading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("merged_metadata.csv");
        fs::write(&path, SAMPLE).unwrap();

        let cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();

        // Later calls must not look at the file again.
        fs::remove_file(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn failed_load_is_retried() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("merged_metadata.csv");
        let cache = DatasetCache::new();

        assert!(cache.get_or_load(&path).is_err());
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(cache.get_or_load(&path).unwrap().len(), 2);
    }
}
