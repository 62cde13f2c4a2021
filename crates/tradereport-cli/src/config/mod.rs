//! Config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use tradereport_core::error::{Result, ReportError};

pub use schema::{InputSection, OutputMode, OutputSection, ReportConfig};

/// Load, resolve relative paths against the file's directory, validate.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ReportConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| ReportError::Io(format!("read config {} failed: {e}", path.display())))?;
    let mut cfg = parse(&s)?;
    if let Some(base) = path.parent() {
        cfg.resolve_paths(base);
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ReportConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<ReportConfig> {
    serde_yaml::from_str(s).map_err(|e| ReportError::InvalidConfig(format!("invalid yaml: {e}")))
}
