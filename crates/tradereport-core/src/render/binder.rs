//! ReportBinder: writes a dataset into a report document.

use std::rc::Rc;

use serde::Serialize;

use crate::data::{CollectionKind, ReportData};
use crate::dom::Document;
use crate::error::Result;

use super::options::BinderOptions;
use super::plan::{apply, plan_collection, BindSummary, Binding};
use super::toggle::ToggleListener;

/// Per-render counts, logged by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub currency_nodes: usize,
    pub collections: Vec<(CollectionKind, BindSummary)>,
}

pub struct ReportBinder<'a> {
    data: &'a ReportData,
    options: BinderOptions,
}

impl<'a> ReportBinder<'a> {
    pub fn new(data: &'a ReportData) -> Self {
        Self::with_options(data, BinderOptions::default())
    }

    pub fn with_options(data: &'a ReportData, options: BinderOptions) -> Self {
        Self { data, options }
    }

    pub fn options(&self) -> &BinderOptions {
        &self.options
    }

    /// Write `currency` into every currency placeholder. Returns the number
    /// of nodes written.
    pub fn bind_currency<D: Document + ?Sized>(&self, doc: &mut D, currency: &str) -> usize {
        let nodes = doc.elements_by_class_name(&self.options.currency_class);
        for &node in &nodes {
            doc.set_text(node, currency);
        }
        nodes.len()
    }

    /// Bindings one collection would produce, without touching a document.
    pub fn plan(&self, kind: CollectionKind) -> Result<Vec<Binding>> {
        plan_collection(self.data, kind, &self.options)
    }

    /// Bind one collection. The document is left untouched if any record of
    /// the collection is rejected.
    pub fn bind_collection<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        kind: CollectionKind,
    ) -> Result<BindSummary> {
        let bindings = self.plan(kind)?;
        let summary = apply(doc, &bindings);
        tracing::debug!(
            collection = kind.field_name(),
            written = summary.written,
            skipped = summary.skipped,
            "collection bound"
        );
        Ok(summary)
    }

    /// Currency, then all / long-only / short-only. Every collection is
    /// planned before the first write.
    pub fn render<D: Document + ?Sized>(&self, doc: &mut D) -> Result<RenderSummary> {
        let plans = CollectionKind::ALL
            .into_iter()
            .map(|kind| self.plan(kind).map(|bindings| (kind, bindings)))
            .collect::<Result<Vec<_>>>()?;

        let mut summary = RenderSummary {
            currency_nodes: self.bind_currency(doc, &self.data.currency),
            collections: Vec::with_capacity(plans.len()),
        };
        for (kind, bindings) in plans {
            let s = apply(doc, &bindings);
            tracing::debug!(
                collection = kind.field_name(),
                written = s.written,
                skipped = s.skipped,
                "collection bound"
            );
            summary.collections.push((kind, s));
        }

        tracing::info!(
            currency = %self.data.currency,
            currency_nodes = summary.currency_nodes,
            "report rendered"
        );
        Ok(summary)
    }

    /// Attach the collapse handler to every toggle control. Returns the number
    /// of controls wired.
    pub fn wire_toggles<D: Document + ?Sized>(&self, doc: &mut D) -> usize {
        let listener = Rc::new(ToggleListener::new(
            self.options.target_attribute.clone(),
            self.options.hide_class.clone(),
        ));
        let controls = doc.elements_by_class_name(&self.options.toggle_class);
        for &node in &controls {
            doc.add_click_listener(node, listener.clone());
        }
        tracing::debug!(controls = controls.len(), "toggles wired");
        controls.len()
    }
}
