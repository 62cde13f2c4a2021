//! JSON test vector loader shared by the format and split tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use tradereport_core::{MetricCollection, MetricRecord, MetricValue, ReportData};

#[derive(Debug, Deserialize)]
pub struct TestVector<E> {
    pub description: String,
    pub value: MetricValue,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub expect: Option<E>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load<E: DeserializeOwned + Default>(name: &str) -> Vec<TestVector<E>> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

/// Dataset holding one record in the `all` view.
pub fn single_record(id: u64, value: MetricValue, kind: Option<String>) -> ReportData {
    let mut record = MetricRecord::new(id, value);
    record.kind = kind;
    ReportData {
        currency: "USD".into(),
        all_trades: MetricCollection::from_iter([record]),
        long_only: MetricCollection::default(),
        short_only: MetricCollection::default(),
    }
}
