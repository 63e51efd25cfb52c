/// Data layer: table model, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  structured_classified.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, normalize headers → WorkerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (state, industry) equality → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  schema check, Rural/Urban × Main/Marginal sums
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  chart spec, totals, matching rows
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
