//! Binding plan: the document writes one collection produces, computed
//! without a document so a rejected collection never leaves partial output.

use serde::Serialize;

use crate::data::{CollectionKind, MetricRecord, ReportData};
use crate::dom::Document;
use crate::error::{Result, ReportError};

use super::format::{format_amount, split_whole_fraction};
use super::options::BinderOptions;

/// Metric shown as a whole part plus a two-digit fragment in the `all` view.
pub const SPLIT_METRIC_ID: u64 = 1020;

/// One document write, addressed by element id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Binding {
    /// Value text; the tooltip is only written when the value node exists.
    Text {
        id: String,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        help: Option<Tooltip>,
    },
    /// Written only when both targets exist.
    SplitText {
        ids: [String; 2],
        texts: [String; 2],
    },
}

/// Attribute write on the `help_*` companion of a value node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Outcome of applying a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BindSummary {
    pub written: usize,
    pub skipped: usize,
}

pub fn plan_collection(
    data: &ReportData,
    kind: CollectionKind,
    options: &BinderOptions,
) -> Result<Vec<Binding>> {
    let suffix = kind.suffix();
    let collection = data.collection(kind);
    let mut out = Vec::with_capacity(collection.len());

    for (key, record) in collection.iter() {
        let id = record.id;

        if is_split_metric(kind, record) {
            let (whole, fragment) = split_whole_fraction(numeric(kind, key, record)?);
            out.push(Binding::SplitText {
                ids: [format!("{id}_{suffix}_1"), format!("{id}_{suffix}_2")],
                texts: [whole, fragment],
            });
            continue;
        }

        // Long/short views display the `all` record under the same key: its
        // type and its value. Only the element id and help come from `record`.
        let source = match kind {
            CollectionKind::All => record,
            _ => data.all_trades.get(key).ok_or_else(|| ReportError::MissingCounterpart {
                collection: kind.field_name(),
                key: key.to_string(),
            })?,
        };

        let text = if source.is_string_typed() {
            source.value.raw_text().into_owned()
        } else {
            format_amount(numeric(CollectionKind::All, key, source)?)
        };

        let help = record
            .help
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&options.help_fallback);

        out.push(Binding::Text {
            id: format!("{id}_{suffix}"),
            text,
            help: Some(Tooltip {
                id: format!("help_{id}_{suffix}"),
                name: options.help_attribute.clone(),
                value: help.to_string(),
            }),
        });
    }

    Ok(out)
}

fn is_split_metric(kind: CollectionKind, record: &MetricRecord) -> bool {
    kind == CollectionKind::All && record.id == SPLIT_METRIC_ID
}

fn numeric(kind: CollectionKind, key: &str, record: &MetricRecord) -> Result<f64> {
    record.value.as_f64().ok_or_else(|| ReportError::NonNumeric {
        collection: kind.field_name(),
        key: key.to_string(),
        value: record.value.raw_text().into_owned(),
    })
}

/// Apply a plan; bindings whose target is missing are skipped.
pub fn apply<D: Document + ?Sized>(doc: &mut D, bindings: &[Binding]) -> BindSummary {
    let mut summary = BindSummary::default();
    for binding in bindings {
        let written = match binding {
            Binding::Text { id, text, help } => match doc.element_by_id(id) {
                Some(node) => {
                    doc.set_text(node, text);
                    if let Some(tip) = help {
                        if let Some(help_node) = doc.element_by_id(&tip.id) {
                            doc.set_attribute(help_node, &tip.name, &tip.value);
                        }
                    }
                    true
                }
                None => false,
            },
            Binding::SplitText { ids, texts } => {
                match (doc.element_by_id(&ids[0]), doc.element_by_id(&ids[1])) {
                    (Some(first), Some(second)) => {
                        doc.set_text(first, &texts[0]);
                        doc.set_text(second, &texts[1]);
                        true
                    }
                    _ => false,
                }
            }
        };
        if written {
            summary.written += 1;
        } else {
            summary.skipped += 1;
            tracing::trace!(?binding, "no target node; skipped");
        }
    }
    summary
}
