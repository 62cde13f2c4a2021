//! Report dataset: metric records grouped into the all / long-only /
//! short-only views, plus the report currency.

pub mod loader;
pub mod record;

pub use record::{CollectionKind, MetricCollection, MetricRecord, MetricValue, ReportData, STRING_TYPE};
