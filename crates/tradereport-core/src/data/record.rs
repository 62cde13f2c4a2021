//! Metric records and the three report collections.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::format::js_number_string;

/// Marker stored in a record's `type` field for values shown verbatim.
pub const STRING_TYPE: &str = "string";

/// Raw metric value as shipped by the report pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric coercion. Text is parsed after trimming; non-finite results are
    /// rejected so they never reach the formatter.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            MetricValue::Number(n) => *n,
            MetricValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Verbatim rendering (numbers use the plain number-to-string form).
    pub fn raw_text(&self) -> Cow<'_, str> {
        match self {
            MetricValue::Number(n) => Cow::Owned(js_number_string(*n)),
            MetricValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

/// One labeled statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: u64,
    #[serde(default)]
    pub group: String,
    /// `"undefined"` when the metric has no subgroup.
    #[serde(default)]
    pub subgroup: String,
    #[serde(default)]
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Display type (field name is `type` in JSON).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl MetricRecord {
    pub fn new(id: u64, value: impl Into<MetricValue>) -> Self {
        Self {
            id,
            group: String::new(),
            subgroup: "undefined".into(),
            title: String::new(),
            value: value.into(),
            help: None,
            kind: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is_string_typed(&self) -> bool {
        self.kind.as_deref() == Some(STRING_TYPE)
    }
}

/// Which report view a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    All,
    LongOnly,
    ShortOnly,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::All,
        CollectionKind::LongOnly,
        CollectionKind::ShortOnly,
    ];

    /// Element id suffix used by the template.
    pub fn suffix(self) -> &'static str {
        match self {
            CollectionKind::All => "A",
            CollectionKind::LongOnly => "L",
            CollectionKind::ShortOnly => "S",
        }
    }

    /// Field name in the dataset.
    pub fn field_name(self) -> &'static str {
        match self {
            CollectionKind::All => "all_trades",
            CollectionKind::LongOnly => "long_only",
            CollectionKind::ShortOnly => "short_only",
        }
    }
}

/// Records keyed by their string-encoded numeric id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricCollection(BTreeMap<String, MetricRecord>);

impl MetricCollection {
    pub fn get(&self, key: &str) -> Option<&MetricRecord> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricRecord)> {
        self.0.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert under the record's own id.
    pub fn insert(&mut self, record: MetricRecord) -> Option<MetricRecord> {
        self.0.insert(record.id.to_string(), record)
    }
}

impl FromIterator<MetricRecord> for MetricCollection {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        let mut c = MetricCollection::default();
        for r in iter {
            c.insert(r);
        }
        c
    }
}

/// The full dataset handed to the binder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub currency: String,
    pub all_trades: MetricCollection,
    #[serde(default)]
    pub long_only: MetricCollection,
    #[serde(default)]
    pub short_only: MetricCollection,
}

impl ReportData {
    pub fn collection(&self, kind: CollectionKind) -> &MetricCollection {
        match kind {
            CollectionKind::All => &self.all_trades,
            CollectionKind::LongOnly => &self.long_only,
            CollectionKind::ShortOnly => &self.short_only,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn text_values_coerce_after_trim() {
        assert_eq!(MetricValue::from(" 12.5 ").as_f64(), Some(12.5));
        assert_eq!(MetricValue::from("abc").as_f64(), None);
        assert_eq!(MetricValue::from("inf").as_f64(), None);
    }

    #[test]
    fn raw_text_of_whole_number_has_no_fraction() {
        assert_eq!(MetricValue::from(5050.0).raw_text(), "5050");
        assert_eq!(MetricValue::from("2024-01-02").raw_text(), "2024-01-02");
    }

    #[test]
    fn record_parses_type_field() {
        let r: MetricRecord = serde_json::from_str(
            r#"{"group":"strategy","id":5050,"subgroup":"strategy_period","title":"begin","value":5050,"type":"string"}"#,
        )
        .unwrap();
        assert!(r.is_string_typed());
        assert_eq!(r.value, MetricValue::Number(5050.0));
        assert!(r.help.is_none());
    }
}
