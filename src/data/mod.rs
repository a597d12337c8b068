/// Data layer: core types, loading, and the two chart queries.
///
/// Architecture:
/// ```text
///  launch records .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site index, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  aggregate / filter_for_scatter → chart inputs
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
