/// Data layer: core types, loading, and column lookups.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ JobDataset │  Vec<JobListing>, distinct values per column
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  listings with a given column value
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
