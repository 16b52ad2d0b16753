/// Data layer: core types, input parsing and sample sets.
///
/// Architecture:
/// ```text
///  user text                 .json / .csv
///      │                          │
///      ▼                          ▼
///   ┌──────────┐             ┌──────────┐
///   │  parser   │             │  loader   │  parse file → Vec<SampleRecord>
///   └──────────┘             └──────────┘
///      │                          │
///      ▼                          ▼
///   ┌──────────────┐         ┌──────────────┐
///   │ FeatureVector │         │ SampleRecord  │  features text, expected label
///   └──────────────┘         └──────────────┘
///      │
///      ▼
///   classifier
/// ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod samples;
