//! Render pipeline: dataset + template manifest -> bound document (or plan)
//! serialized as JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use tradereport_core::error::{Result, ReportError};
use tradereport_core::{CollectionKind, Element, MemoryDocument, ReportBinder, ReportData};

use crate::config::{OutputMode, ReportConfig};

/// Template manifest: the elements of the report page the binder addresses.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateManifest {
    pub elements: Vec<Element>,
}

impl TemplateManifest {
    pub fn from_path(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .map_err(|e| ReportError::Io(format!("read template {} failed: {e}", path.display())))?;
        serde_yaml::from_str(&s)
            .map_err(|e| ReportError::InvalidData(format!("invalid template manifest: {e}")))
    }

    pub fn into_document(self) -> MemoryDocument {
        MemoryDocument::from_elements(self.elements)
    }
}

pub struct ReportApp {
    cfg: ReportConfig,
    data: ReportData,
}

impl ReportApp {
    /// Load the dataset named by the config.
    pub fn new(cfg: ReportConfig) -> Result<Self> {
        let data = ReportData::from_path(&cfg.input.data)?;
        tracing::info!(
            data = %cfg.input.data.display(),
            all = data.all_trades.len(),
            long = data.long_only.len(),
            short = data.short_only.len(),
            "report data loaded"
        );
        Ok(Self { cfg, data })
    }

    pub fn cfg(&self) -> &ReportConfig {
        &self.cfg
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    fn binder(&self) -> ReportBinder<'_> {
        ReportBinder::with_options(&self.data, self.cfg.binder.clone())
    }

    /// Bind the dataset into the template and wire its toggles.
    pub fn render_document(&self) -> Result<(MemoryDocument, Value)> {
        let template = self.cfg.input.template.as_deref().ok_or_else(|| {
            ReportError::InvalidConfig("input.template is required for document output".into())
        })?;
        let mut doc = TemplateManifest::from_path(template)?.into_document();

        let binder = self.binder();
        let summary = binder.render(&mut doc)?;
        let toggles = binder.wire_toggles(&mut doc);

        let report = json!({
            "currency_nodes": summary.currency_nodes,
            "collections": summary
                .collections
                .iter()
                .map(|(kind, s)| (kind.field_name().to_string(), json!(s)))
                .collect::<Map<String, Value>>(),
            "toggles": toggles,
        });
        Ok((doc, report))
    }

    /// Binding plans for every collection.
    pub fn render_plan(&self) -> Result<Value> {
        let binder = self.binder();
        let mut collections = Map::new();
        for kind in CollectionKind::ALL {
            let plan = binder.plan(kind)?;
            collections.insert(kind.field_name().to_string(), json!(plan));
        }
        Ok(json!({
            "currency": self.data.currency,
            "currency_class": self.cfg.binder.currency_class,
            "collections": collections,
        }))
    }

    /// Run the configured output mode and return pretty JSON.
    pub fn run(&self) -> Result<String> {
        let out = match self.cfg.output.mode {
            OutputMode::Document => {
                let (doc, summary) = self.render_document()?;
                json!({ "summary": summary, "elements": doc.elements() })
            }
            OutputMode::Plan => self.render_plan()?,
        };
        serde_json::to_string_pretty(&out)
            .map_err(|e| ReportError::Io(format!("serialize output failed: {e}")))
    }

    /// Write to `output.path`, or stdout when unset.
    pub fn write_output(&self, rendered: &str) -> Result<()> {
        match &self.cfg.output.path {
            Some(path) => {
                fs::write(path, rendered)
                    .map_err(|e| ReportError::Io(format!("write {} failed: {e}", path.display())))?;
                tracing::info!(path = %path.display(), bytes = rendered.len(), "output written");
            }
            None => println!("{rendered}"),
        }
        Ok(())
    }
}
