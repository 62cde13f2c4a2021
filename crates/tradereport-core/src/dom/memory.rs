//! In-memory document: a flat list of elements addressed by index.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReportError};

use super::{ClickListener, Document, NodeId};

/// One template element. Also the shape of an entry in a template manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    #[serde(default)]
    pub text: String,
}

impl Element {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn style_prop(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Default)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    listeners: HashMap<NodeId, Vec<Rc<dyn ClickListener>>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("elements", &self.elements)
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut seen = HashSet::new();
        for id in elements.iter().filter_map(|e| e.id.as_deref()) {
            if !seen.insert(id) {
                // lookups resolve to the first occurrence
                tracing::warn!(id, "duplicate element id in template");
            }
        }
        Self {
            elements,
            listeners: HashMap::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node)
    }

    /// Text of the element with the given id.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.element_by_id(id)
            .and_then(|n| self.elements.get(n))
            .map(|e| e.text.as_str())
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }

    /// Dispatch a click to every listener registered on `node`, in
    /// registration order.
    pub fn click(&mut self, node: NodeId) -> Result<()> {
        if node >= self.elements.len() {
            return Err(ReportError::MissingNode(format!("node #{node}")));
        }
        let listeners = self.listeners.get(&node).cloned().unwrap_or_default();
        for listener in listeners {
            listener.on_click(self, node)?;
        }
        Ok(())
    }

    /// Click the element with the given id.
    pub fn click_id(&mut self, id: &str) -> Result<()> {
        let node = self
            .element_by_id(id)
            .ok_or_else(|| ReportError::MissingNode(id.to_string()))?;
        self.click(node)
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements.iter().position(|e| e.id.as_deref() == Some(id))
    }

    fn elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_class(class))
            .map(|(n, _)| n)
            .collect()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(e) = self.elements.get_mut(node) {
            e.text = text.to_string();
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.elements.get(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(node) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.elements.get(node)?.style.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(node) {
            e.style.insert(property.to_string(), value.to_string());
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let Some(e) = self.elements.get_mut(node) else {
            return false;
        };
        if e.has_class(class) {
            e.classes.retain(|c| c != class);
            false
        } else {
            e.classes.push(class.to_string());
            true
        }
    }

    fn add_click_listener(&mut self, node: NodeId, listener: Rc<dyn ClickListener>) {
        self.listeners.entry(node).or_default().push(listener);
    }
}
