//! Template naming contract. Defaults match the shipped report template;
//! the CLI lets a config override them (strict parsing).

use serde::Deserialize;

use crate::error::{Result, ReportError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinderOptions {
    /// Marker class of nodes that receive the currency code.
    #[serde(default = "default_currency_class")]
    pub currency_class: String,

    /// Marker class of collapsible section controls.
    #[serde(default = "default_toggle_class")]
    pub toggle_class: String,

    /// Attribute on a toggle control naming its target class.
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,

    /// Class flipped on the toggle target.
    #[serde(default = "default_hide_class")]
    pub hide_class: String,

    /// Tooltip attribute set on `help_*` nodes.
    #[serde(default = "default_help_attribute")]
    pub help_attribute: String,

    #[serde(default = "default_help_fallback")]
    pub help_fallback: String,
}

impl Default for BinderOptions {
    fn default() -> Self {
        Self {
            currency_class: default_currency_class(),
            toggle_class: default_toggle_class(),
            target_attribute: default_target_attribute(),
            hide_class: default_hide_class(),
            help_attribute: default_help_attribute(),
            help_fallback: default_help_fallback(),
        }
    }
}

impl BinderOptions {
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("binder.currency_class", &self.currency_class),
            ("binder.toggle_class", &self.toggle_class),
            ("binder.target_attribute", &self.target_attribute),
            ("binder.hide_class", &self.hide_class),
            ("binder.help_attribute", &self.help_attribute),
        ];
        for (field, value) in names {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(ReportError::InvalidConfig(format!(
                    "{field} must be a single non-empty name"
                )));
            }
        }
        Ok(())
    }
}

fn default_currency_class() -> String {
    "currency".into()
}
fn default_toggle_class() -> String {
    "toggle-img".into()
}
fn default_target_attribute() -> String {
    "data-target".into()
}
fn default_hide_class() -> String {
    "hide".into()
}
fn default_help_attribute() -> String {
    "title".into()
}
fn default_help_fallback() -> String {
    "not found".into()
}
