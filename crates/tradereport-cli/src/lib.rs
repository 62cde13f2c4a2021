//! tradereport CLI library entry.
//!
//! Wires config loading, dataset loading and the core binder into a
//! pipeline. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app;
pub mod config;
