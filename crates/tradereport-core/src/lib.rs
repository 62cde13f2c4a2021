//! tradereport core: dataset model, value formatting and the report binder.
//!
//! This crate binds a trading-performance dataset (all / long-only /
//! short-only views) into a report document located by element-id naming
//! convention. It knows nothing about a concrete DOM: the host page is reached
//! through the [`dom::Document`] adapter, and [`dom::MemoryDocument`] stands
//! in for it in tests and in the CLI.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed input
//! surfaces as [`ReportError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod data;
pub mod dom;
pub mod error;
pub mod render;

/// Shared result type.
pub use error::{ErrorCode, ReportError, Result};

pub use data::{CollectionKind, MetricCollection, MetricRecord, MetricValue, ReportData};
pub use dom::{Document, Element, MemoryDocument};
pub use render::{BinderOptions, ReportBinder};
