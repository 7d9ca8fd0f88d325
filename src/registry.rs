//! The code-block registry and its backing-field serialization discipline.
//!
//! [`CodeBlockRegistry`] owns every [`CodeBlock`] in a document. The rendered
//! document only holds back-references (decimal IDs) to registry entries, so
//! the registry is the single source of truth for the raw code text. After
//! every mutation the registry is re-serialized into the backing field: a
//! JSON object keyed by decimal-string IDs, or the empty string when the
//! registry holds no blocks.

use std::collections::BTreeMap;

use crate::model::{BlockDraft, BlockId, CodeBlock};

// ────────────────────────────────────────────────────────────────────────────
// CodeBlockRegistry
// ────────────────────────────────────────────────────────────────────────────

/// Mapping from block ID to code-block record.
///
/// Keys are `u64`, so "highest existing ID" is always a numeric comparison;
/// the backing field still round-trips through decimal-string JSON keys.
///
/// # Example
///
/// ```rust
/// use codekeep::model::BlockDraft;
/// use codekeep::registry::CodeBlockRegistry;
///
/// let mut registry = CodeBlockRegistry::new();
/// let id = registry.commit(BlockDraft::new("python", "print(1)"), None);
/// assert_eq!(id, 1);
/// assert!(registry.backing_field().contains("\"1\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlockRegistry {
    blocks: BTreeMap<BlockId, CodeBlock>,
}

impl CodeBlockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from the backing-field text.
    ///
    /// A missing, empty, or malformed field yields an empty registry; a bad
    /// blob is never a fatal error.
    pub fn from_backing_field(field: &str) -> Self {
        let blocks = serde_json::from_str(field).unwrap_or_default();
        Self { blocks }
    }

    /// Serialize the registry into backing-field text.
    ///
    /// An empty registry serializes to the empty string, not `"{}"`, so an
    /// untouched document keeps an untouched field.
    pub fn backing_field(&self) -> String {
        if self.blocks.is_empty() {
            String::new()
        } else {
            // BTreeMap<u64, _> cannot fail to serialize.
            serde_json::to_string(&self.blocks).unwrap_or_default()
        }
    }

    /// The ID the next inserted block will receive: one greater than the
    /// numerically highest existing ID, or `1` when the registry is empty.
    pub fn next_id(&self) -> BlockId {
        self.blocks.keys().next_back().map_or(1, |max| max + 1)
    }

    /// Look up a block by ID.
    pub fn get(&self, id: BlockId) -> Option<&CodeBlock> {
        self.blocks.get(&id)
    }

    /// Returns true if the registry holds a block with the given ID.
    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.contains_key(&id)
    }

    /// Number of blocks in the registry.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the registry holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over `(id, block)` pairs in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &CodeBlock)> {
        self.blocks.iter().map(|(id, block)| (*id, block))
    }

    /// Commit form values into the registry.
    ///
    /// When `existing_id` names a block that is actually present, that
    /// block's fields are overwritten and its ID is kept. Otherwise a fresh
    /// ID is allocated via [`Self::next_id`]. Returns the ID the block ended
    /// up under.
    pub fn commit(&mut self, draft: BlockDraft, existing_id: Option<BlockId>) -> BlockId {
        let id = match existing_id {
            Some(id) if self.blocks.contains_key(&id) => id,
            _ => self.next_id(),
        };
        self.blocks.insert(id, draft.into());
        id
    }

    /// Remove a block by ID, returning the removed record if it existed.
    ///
    /// Removing an unknown ID is a tolerated no-op, not an error.
    pub fn remove(&mut self, id: BlockId) -> Option<CodeBlock> {
        self.blocks.remove(&id)
    }
}
