//! Document adapter.
//!
//! The binder never touches a concrete DOM. Everything it needs from the host
//! page goes through [`Document`]: lookups by id and class name, text and
//! attribute writes, inline style access, class toggling and click listener
//! registration. [`MemoryDocument`] is the in-process implementation used by
//! tests and by the CLI.
//!
//! The trait is object-safe so click listeners can receive `&mut dyn Document`.

pub mod memory;

use std::rc::Rc;

use crate::error::Result;

pub use memory::{Element, MemoryDocument};

/// Opaque handle to a node inside one document.
pub type NodeId = usize;

pub trait Document {
    /// First element whose id equals `id`.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class_name(&self, class: &str) -> Vec<NodeId>;

    fn set_text(&mut self, node: NodeId, text: &str);

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Effective value of a style property (`background-image`, ...).
    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Add `class` if absent, remove it otherwise. Returns whether the class
    /// is present afterwards.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool;

    fn add_click_listener(&mut self, node: NodeId, listener: Rc<dyn ClickListener>);
}

/// Handler invoked when a node is clicked.
pub trait ClickListener {
    fn on_click(&self, doc: &mut dyn Document, node: NodeId) -> Result<()>;
}
