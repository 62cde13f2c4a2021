//! Dataset parsing (JSON or generated `const data = {...};` script) and
//! validation.

use std::fs;
use std::path::Path;

use crate::error::{Result, ReportError};

use super::record::{CollectionKind, ReportData};

const SCRIPT_KEYWORDS: [&str; 3] = ["const", "let", "var"];

impl ReportData {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let data: ReportData = serde_json::from_str(s)
            .map_err(|e| ReportError::InvalidData(format!("invalid json: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    /// Parse the script form emitted by the report pipeline:
    /// `const data = { ... };` (`let`/`var` accepted, semicolon optional).
    pub fn from_script_str(s: &str) -> Result<Self> {
        let body = strip_assignment(s).ok_or_else(|| {
            ReportError::InvalidData("expected `const data = {...}` assignment".into())
        })?;
        Self::from_json_str(body)
    }

    /// Load from disk; `.js` files are read as script, everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| ReportError::Io(format!("read {} failed: {e}", path.display())))?;
        let is_script = path.extension().is_some_and(|ext| ext == "js");
        tracing::debug!(path = %path.display(), is_script, "loading report data");
        if is_script {
            Self::from_script_str(&s)
        } else {
            Self::from_json_str(&s)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(ReportError::InvalidData("currency must not be empty".into()));
        }
        for kind in CollectionKind::ALL {
            for (key, record) in self.collection(kind).iter() {
                let parsed: u64 = key.parse().map_err(|_| {
                    ReportError::InvalidData(format!(
                        "{}: key {key:?} is not a numeric id",
                        kind.field_name()
                    ))
                })?;
                if parsed != record.id {
                    return Err(ReportError::InvalidData(format!(
                        "{}: key {key} does not match record id {}",
                        kind.field_name(),
                        record.id
                    )));
                }
            }
        }
        Ok(())
    }
}

fn strip_assignment(s: &str) -> Option<&str> {
    let mut rest = s.trim();
    for kw in SCRIPT_KEYWORDS {
        if let Some(r) = rest.strip_prefix(kw) {
            if r.starts_with(char::is_whitespace) {
                rest = r.trim_start();
                break;
            }
        }
    }
    let rest = rest.strip_prefix("data")?.trim_start();
    let rest = rest.strip_prefix('=')?.trim();
    Some(rest.strip_suffix(';').unwrap_or(rest).trim_end())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const MIN: &str = r#"{
        "currency": "USD",
        "all_trades": { "1000": { "id": 1000, "title": "Num. Trades", "value": 1000 } },
        "long_only": {},
        "short_only": {}
    }"#;

    #[test]
    fn script_form_is_unwrapped() {
        let script = format!("const data = {MIN};\n");
        let data = ReportData::from_script_str(&script).unwrap();
        assert_eq!(data.currency, "USD");
        assert_eq!(data.all_trades.len(), 1);

        let bare = format!("data={MIN}");
        assert!(ReportData::from_script_str(&bare).is_ok());
    }

    #[test]
    fn script_without_assignment_is_rejected() {
        let err = ReportData::from_script_str("window.report = {}").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidData);
    }

    #[test]
    fn key_must_match_id() {
        let bad = r#"{ "currency": "USD",
            "all_trades": { "1000": { "id": 1001, "value": 1 } } }"#;
        let err = ReportData::from_json_str(bad).unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_DATA");
    }

    #[test]
    fn empty_currency_is_rejected() {
        let bad = r#"{ "currency": " ", "all_trades": {} }"#;
        assert!(ReportData::from_json_str(bad).is_err());
    }
}
