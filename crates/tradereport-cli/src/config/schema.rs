use std::path::{Path, PathBuf};

use serde::Deserialize;
use tradereport_core::error::{Result, ReportError};
use tradereport_core::BinderOptions;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub version: u32,

    pub input: InputSection,

    #[serde(default)]
    pub binder: BinderOptions,

    #[serde(default)]
    pub output: OutputSection,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReportError::UnsupportedVersion(self.version));
        }
        self.input.validate()?;
        if self.output.mode == OutputMode::Document && self.input.template.is_none() {
            return Err(ReportError::InvalidConfig(
                "input.template is required when output.mode is document".into(),
            ));
        }
        self.binder.validate()?;
        Ok(())
    }

    /// Resolve relative input/output paths against `base` (the config file's
    /// directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        join(&mut self.input.data);
        if let Some(t) = self.input.template.as_mut() {
            join(t);
        }
        if let Some(o) = self.output.path.as_mut() {
            join(o);
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Dataset: JSON, or the generated `.js` script.
    pub data: PathBuf,

    /// Element manifest (YAML) the in-memory document is built from.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl InputSection {
    pub fn validate(&self) -> Result<()> {
        if self.data.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig("input.data must not be empty".into()));
        }
        if self.template.as_ref().is_some_and(|t| t.as_os_str().is_empty()) {
            return Err(ReportError::InvalidConfig("input.template must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output file; stdout when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub mode: OutputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// The bound document's elements.
    #[default]
    Document,
    /// Binding plans per collection; no template needed.
    Plan,
}
