/// Data layer: core types, loading, screening and rendering.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  normalize labels, check required fields,
///   └──────────┘  keep rows meeting the criteria
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  Table → HTML <table>
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
