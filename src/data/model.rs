use std::collections::HashSet;
use std::fmt;

use super::update::UpdateBatch;

/// Field values read as missing, the same set pandas' CSV reader treats as NaN.
const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw field stands for a missing value.
pub fn is_null_token(s: &str) -> bool {
    NULL_TOKENS.contains(&s)
}

// ---------------------------------------------------------------------------
// CellValue – a single raw cell as read from the file
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV column can infer to.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer the narrowest type for a raw CSV field.
    pub fn infer(s: &str) -> Self {
        if is_null_token(s) {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "None"),
        }
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(CellValue::Null, |s| CellValue::String(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// DocumentRecord – one row of the merged metadata file
// ---------------------------------------------------------------------------

/// One source document.
///
/// The fields the pipeline filters and groups on are typed; `cells` keeps the
/// whole row in header order for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub country: String,
    /// `None` when the file leaves the year blank.
    pub year: Option<i64>,
    pub source_file: String,
    pub document_type_1: Option<String>,
    pub document_type_2: Option<String>,
    pub document_type_3: Option<String>,
    /// Set by [`assign_update`](super::update::assign_update).
    pub update: Option<UpdateBatch>,
    /// Raw row, aligned with [`DocumentTable::column_names`].
    pub cells: Vec<CellValue>,
}

/// Which of the three hierarchical document-type columns to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLevel {
    First,
    Second,
    Third,
}

impl TypeLevel {
    pub fn column_name(self) -> &'static str {
        match self {
            TypeLevel::First => "document_type_1",
            TypeLevel::Second => "document_type_2",
            TypeLevel::Third => "document_type_3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeLevel::First => "Select Document Type 1",
            TypeLevel::Second => "Select Document Type 2",
            TypeLevel::Third => "Select Document Type 3",
        }
    }
}

impl DocumentRecord {
    pub fn document_type(&self, level: TypeLevel) -> Option<&str> {
        match level {
            TypeLevel::First => self.document_type_1.as_deref(),
            TypeLevel::Second => self.document_type_2.as_deref(),
            TypeLevel::Third => self.document_type_3.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// YearRange – inclusive year interval
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i64,
    pub max: i64,
}

impl YearRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. An inverted range or a missing year contains
    /// nothing.
    pub fn contains(&self, year: Option<i64>) -> bool {
        year.is_some_and(|year| self.min <= year && year <= self.max)
    }
}

// ---------------------------------------------------------------------------
// DocumentTable – the loaded dataset or any filtered view of it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTable {
    /// Column names in file order (plus `update` once assigned).
    pub column_names: Vec<String>,
    pub records: Vec<DocumentRecord>,
}

impl DocumentTable {
    pub fn new(column_names: Vec<String>, records: Vec<DocumentRecord>) -> Self {
        Self {
            column_names,
            records,
        }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A new table with the same columns holding only the matching rows.
    pub fn filtered<F>(&self, predicate: F) -> DocumentTable
    where
        F: Fn(&DocumentRecord) -> bool,
    {
        DocumentTable {
            column_names: self.column_names.clone(),
            records: self
                .records
                .iter()
                .filter(|rec| predicate(rec))
                .cloned()
                .collect(),
        }
    }

    /// Distinct countries in order of first appearance.
    pub fn countries(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|rec| rec.country.as_str()))
    }

    /// Distinct non-null values of a document-type column, in order of first
    /// appearance.
    pub fn document_types(&self, level: TypeLevel) -> Vec<String> {
        distinct_in_order(self.records.iter().filter_map(|rec| rec.document_type(level)))
    }

    /// Observed min/max year over rows that have one, `None` if none do.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let years = || self.records.iter().filter_map(|rec| rec.year);
        Some(YearRange::new(years().min()?, years().max()?))
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
