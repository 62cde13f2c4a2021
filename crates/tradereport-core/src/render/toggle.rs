//! Collapsible section controls.
//!
//! A control carries a two-state icon in its `background-image` and names
//! the section it collapses through its target attribute. Clicking swaps the
//! icon state and flips the hide class on the first element bearing the
//! target class. No state is kept outside the document.

use crate::dom::{ClickListener, Document, NodeId};
use crate::error::{Result, ReportError};

pub const BACKGROUND_IMAGE: &str = "background-image";
pub const FIRST_STATE: &str = "toggle1";
pub const SECOND_STATE: &str = "toggle2";

/// Swap the icon state: `toggle1` -> `toggle2` when it appears past the first
/// character, otherwise `toggle2` -> `toggle1`. First occurrence only.
pub fn flip_state(background: &str) -> String {
    match background.find(FIRST_STATE) {
        Some(pos) if pos > 0 => background.replacen(FIRST_STATE, SECOND_STATE, 1),
        _ => background.replacen(SECOND_STATE, FIRST_STATE, 1),
    }
}

#[derive(Debug, Clone)]
pub struct ToggleListener {
    target_attribute: String,
    hide_class: String,
}

impl ToggleListener {
    pub fn new(target_attribute: impl Into<String>, hide_class: impl Into<String>) -> Self {
        Self {
            target_attribute: target_attribute.into(),
            hide_class: hide_class.into(),
        }
    }
}

impl ClickListener for ToggleListener {
    fn on_click(&self, doc: &mut dyn Document, node: NodeId) -> Result<()> {
        let background = doc.style(node, BACKGROUND_IMAGE).unwrap_or_default();
        doc.set_style(node, BACKGROUND_IMAGE, &flip_state(&background));

        let target_class = doc.attribute(node, &self.target_attribute).ok_or_else(|| {
            ReportError::MissingNode(format!(
                "toggle #{node} has no {} attribute",
                self.target_attribute
            ))
        })?;
        let target = doc
            .elements_by_class_name(&target_class)
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::MissingNode(format!("no element with class {target_class:?}")))?;

        let present = doc.toggle_class(target, &self.hide_class);
        tracing::debug!(node, target_class = %target_class, hidden = present, "section toggled");
        Ok(())
    }
}
