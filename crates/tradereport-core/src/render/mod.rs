//! Rendering: value formatting, binding plans, the binder and the section
//! toggles.
//!
//! Element naming contract with the report template:
//! - `{id}_A`, `{id}_L`, `{id}_S`: metric value per view
//! - `help_{id}_{suffix}`: tooltip carrier
//! - `1020_A_1` / `1020_A_2`: split display of metric 1020 (all view only)
//! - class `currency`: currency code placeholders
//! - class `toggle-img` + `data-target`: collapsible section controls

pub mod binder;
pub mod format;
pub mod options;
pub mod plan;
pub mod toggle;

pub use binder::{RenderSummary, ReportBinder};
pub use options::BinderOptions;
pub use plan::{BindSummary, Binding, Tooltip, SPLIT_METRIC_ID};
pub use toggle::ToggleListener;
