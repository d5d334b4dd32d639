/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  SwizzleSip.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PostTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ PostTable │  Vec<Post>, filter domains, date span
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply sidebar predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  KPIs + grouped chart aggregates
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
