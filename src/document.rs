//! Host document abstraction.
//!
//! The editor operations only need a narrow slice of a rich-text document:
//! the current selection, attribute reads on nodes, node removal, markup
//! insertion, the storage field holding the serialized registry, and a
//! change notification. [`HostDocument`] captures exactly that surface;
//! [`BufferDocument`] is an in-memory implementation used by the CLI and the
//! test suite.

use indexmap::IndexMap;

// ────────────────────────────────────────────────────────────────────────────
// HostDocument
// ────────────────────────────────────────────────────────────────────────────

/// Handle to a node inside a host document.
///
/// Handles stay valid after the node is removed; lookups on a removed node
/// simply yield nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Capabilities the editor operations consume from the hosting rich-text
/// document.
pub trait HostDocument {
    /// The node the editing cursor currently sits on, if any.
    fn selected_node(&self) -> Option<NodeId>;
    /// Read an attribute off a node. Removed or unknown nodes yield `None`.
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;
    /// Remove a node from the document.
    fn remove_node(&mut self, node: NodeId);
    /// Insert markup at the current selection, replacing any selected
    /// content.
    fn insert_at_selection(&mut self, markup: &str);
    /// Current text of the storage field.
    fn storage(&self) -> String;
    /// Overwrite the storage field.
    fn set_storage(&mut self, value: &str);
    /// Tell the host that document content changed.
    fn content_changed(&mut self);
}

// ────────────────────────────────────────────────────────────────────────────
// BufferDocument
// ────────────────────────────────────────────────────────────────────────────

/// A node held by a [`BufferDocument`].
#[derive(Debug, Clone, Default)]
struct BufferNode {
    attrs: IndexMap<String, String>,
    removed: bool,
}

/// In-memory [`HostDocument`] implementation.
///
/// Nodes live in a slab; removal marks them dead without invalidating other
/// handles. Inserted markup is appended to a log so callers (and tests) can
/// observe exactly what the editor produced.
#[derive(Debug, Clone, Default)]
pub struct BufferDocument {
    nodes: Vec<BufferNode>,
    selected: Option<NodeId>,
    storage: String,
    inserted: Vec<String>,
    change_count: u64,
}

impl BufferDocument {
    /// Create an empty document with an empty storage field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose storage field starts with the given text.
    pub fn with_storage(storage: impl Into<String>) -> Self {
        Self {
            storage: storage.into(),
            ..Self::default()
        }
    }

    /// Add a node with the given attributes and return its handle.
    pub fn add_node<'a>(
        &mut self,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> NodeId {
        let attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.nodes.push(BufferNode {
            attrs,
            removed: false,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Move the selection onto a node (or clear it with `None`).
    pub fn select(&mut self, node: Option<NodeId>) {
        self.selected = node;
    }

    /// Returns true if the node has been removed.
    pub fn is_removed(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_none_or(|n| n.removed)
    }

    /// Markup fragments inserted so far, oldest first.
    pub fn inserted_markup(&self) -> &[String] {
        &self.inserted
    }

    /// Number of change notifications received.
    pub fn change_count(&self) -> u64 {
        self.change_count
    }
}

impl HostDocument for BufferDocument {
    fn selected_node(&self) -> Option<NodeId> {
        self.selected
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        let n = self.nodes.get(node.0)?;
        if n.removed {
            return None;
        }
        n.attrs.get(name).cloned()
    }

    fn remove_node(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.removed = true;
        }
        if self.selected == Some(node) {
            self.selected = None;
        }
    }

    fn insert_at_selection(&mut self, markup: &str) {
        // Inserting replaces the selected content, so a selected node is
        // superseded by the new markup.
        if let Some(node) = self.selected {
            self.remove_node(node);
        }
        self.inserted.push(markup.to_string());
    }

    fn storage(&self) -> String {
        self.storage.clone()
    }

    fn set_storage(&mut self, value: &str) {
        self.storage = value.to_string();
    }

    fn content_changed(&mut self) {
        self.change_count += 1;
    }
}
