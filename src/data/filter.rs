use std::fmt;

use super::model::{DocumentTable, TypeLevel};

// ---------------------------------------------------------------------------
// Selector: a single document-type choice
// ---------------------------------------------------------------------------

/// A document-type selector value. `All` disables that stage of the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TypeSelection {
    #[default]
    All,
    Only(String),
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelection::All => f.write_str("All"),
            TypeSelection::Only(value) => f.write_str(value),
        }
    }
}

/// The three hierarchical selectors, applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSelectors {
    pub type_1: TypeSelection,
    pub type_2: TypeSelection,
    pub type_3: TypeSelection,
}

impl TypeSelectors {
    pub fn get(&self, level: TypeLevel) -> &TypeSelection {
        match level {
            TypeLevel::First => &self.type_1,
            TypeLevel::Second => &self.type_2,
            TypeLevel::Third => &self.type_3,
        }
    }

    /// Set one selector and reset every selector below it to `All`.
    ///
    /// Returns whether anything changed.
    pub fn select(&mut self, level: TypeLevel, selection: TypeSelection) -> bool {
        if *self.get(level) == selection {
            return false;
        }
        match level {
            TypeLevel::First => {
                self.type_1 = selection;
                self.type_2 = TypeSelection::All;
                self.type_3 = TypeSelection::All;
            }
            TypeLevel::Second => {
                self.type_2 = selection;
                self.type_3 = TypeSelection::All;
            }
            TypeLevel::Third => self.type_3 = selection,
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

/// Option list each type selector should offer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeOptions {
    /// From the unfiltered input.
    pub type_1: Vec<TypeSelection>,
    /// From the rows left after the type-1 stage.
    pub type_2: Vec<TypeSelection>,
    /// From the rows left after the type-2 stage.
    pub type_3: Vec<TypeSelection>,
}

impl TypeOptions {
    pub fn get(&self, level: TypeLevel) -> &[TypeSelection] {
        match level {
            TypeLevel::First => &self.type_1,
            TypeLevel::Second => &self.type_2,
            TypeLevel::Third => &self.type_3,
        }
    }
}

/// Output of [`filter_by_types`].
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResult {
    pub table: DocumentTable,
    pub options: TypeOptions,
}

/// `All` followed by the distinct non-null values of a type column.
pub fn type_options(table: &DocumentTable, level: TypeLevel) -> Vec<TypeSelection> {
    std::iter::once(TypeSelection::All)
        .chain(table.document_types(level).into_iter().map(TypeSelection::Only))
        .collect()
}

/// Restrict to rows whose type column equals the selection.
///
/// A selection no longer present in `table` yields an empty table.
pub fn apply_type(
    table: &DocumentTable,
    level: TypeLevel,
    selection: &TypeSelection,
) -> DocumentTable {
    match selection {
        TypeSelection::All => table.clone(),
        TypeSelection::Only(value) => {
            table.filtered(|rec| rec.document_type(level) == Some(value.as_str()))
        }
    }
}

/// Apply the three type selectors in order, each stage narrowing the output
/// of the previous one, and compute the dependent option lists on the way.
pub fn filter_by_types(table: &DocumentTable, selectors: &TypeSelectors) -> CascadeResult {
    let type_1_options = type_options(table, TypeLevel::First);
    let after_1 = apply_type(table, TypeLevel::First, &selectors.type_1);

    let type_2_options = type_options(&after_1, TypeLevel::Second);
    let after_2 = apply_type(&after_1, TypeLevel::Second, &selectors.type_2);

    let type_3_options = type_options(&after_2, TypeLevel::Third);
    let after_3 = apply_type(&after_2, TypeLevel::Third, &selectors.type_3);

    CascadeResult {
        table: after_3,
        options: TypeOptions {
            type_1: type_1_options,
            type_2: type_2_options,
            type_3: type_3_options,
        },
    }
}
