/// Data layer: loading, update labels, aggregation and filtering.
///
/// Architecture:
/// ```text
///  merged_metadata.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse once, memoize → DocumentTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  update   │  source_file → 1st / 2nd / 3rd
///   └──────────┘
///        │
///        ├──────────────► pivot      country × update counts + totals
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  type 1 → type 2 → type 3 cascade
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  country / year restriction → per-year counts
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pivot;
pub mod update;

#[cfg(test)]
pub(crate) mod test_support;
