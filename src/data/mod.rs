/// Data layer: record model, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  ispa.json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → normalized CaseDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  CaseDataset  │  Vec<CaseRecord>, filter option lists
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate  │  group-sum-sort → (label, count)
///   └──────────┘      └────────────┘
/// ```

pub mod age;
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
