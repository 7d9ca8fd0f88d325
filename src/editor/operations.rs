//! Editing operations on the code-block registry.
//!
//! This module provides the three operations the editing surface is built
//! from: prefill an edit form, commit form values, and remove a block. Each
//! operation works directly on a [`CodeBlockRegistry`] plus a
//! [`HostDocument`] and keeps the three views of the data consistent: the
//! in-memory mapping, the storage field, and the rendered markup.
//!
//! # Design
//!
//! Operations are plain functions that mutate in place. Only
//! [`commit_edit`] and [`remove_block`] mutate anything; [`open_editor`] is
//! side-effect free, and an edit form that is dismissed instead of committed
//! leaves every view untouched. The host guarantees the editing surface is
//! modal, so a mutation never interleaves with another operation.

use crate::document::{HostDocument, NodeId};
use crate::editor::language_catalog::{LanguageOption, format_languages};
use crate::model::{BlockDraft, BlockId, CodeBlock};
use crate::registry::CodeBlockRegistry;
use crate::render::{BLOCK_ID_ATTR, render_block};

// ────────────────────────────────────────────────────────────────────────────
// EditorForm
// ────────────────────────────────────────────────────────────────────────────

/// A prefilled edit form, ready for the host to display.
///
/// Committing the form means feeding `draft` (as amended by the user) and
/// `existing_id` back into [`commit_edit`]; dismissing it means doing
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    /// ID of the block being edited, when the selection resolved to a
    /// registered block. `None` means the commit will create a new block.
    pub existing_id: Option<BlockId>,
    /// Field values to prefill.
    pub draft: BlockDraft,
    /// Options for the language selector. Empty when no languages are
    /// enabled, in which case the host omits the selector entirely.
    pub language_options: Vec<LanguageOption>,
}

/// Resolve a node's back-reference into a block ID.
///
/// Yields `None` for nodes without the attribute or with a non-decimal
/// value.
pub fn block_reference(doc: &impl HostDocument, node: NodeId) -> Option<BlockId> {
    doc.attr(node, BLOCK_ID_ATTR)?.parse().ok()
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Build the edit form for the current selection.
///
/// When the selected node back-references a registered block, the record's
/// fields override `defaults`; a missing node, missing attribute, or an ID
/// the registry does not know all fall back to `defaults` and a fresh-block
/// commit. Does not mutate the registry or the document.
pub fn open_editor(
    registry: &CodeBlockRegistry,
    doc: &impl HostDocument,
    enabled_languages: &[String],
    defaults: BlockDraft,
) -> EditorForm {
    let existing = doc
        .selected_node()
        .and_then(|node| block_reference(doc, node))
        .and_then(|id| registry.get(id).map(|block| (id, block)));

    let (existing_id, draft) = match existing {
        Some((id, block)) => (
            Some(id),
            BlockDraft {
                title: block.title.clone(),
                language: block.language.clone(),
                code: block.code.clone(),
            },
        ),
        None => (None, defaults),
    };

    EditorForm {
        existing_id,
        draft,
        language_options: format_languages(enabled_languages),
    }
}

/// Commit form values into the registry and the document.
///
/// Overwrites the existing record when `existing_id` is present and found,
/// otherwise inserts under a freshly allocated ID. The storage field is
/// rewritten, replacement markup is inserted at the selection, and the host
/// is notified. Returns the ID the block ended up under.
pub fn commit_edit(
    registry: &mut CodeBlockRegistry,
    doc: &mut impl HostDocument,
    draft: BlockDraft,
    existing_id: Option<BlockId>,
) -> BlockId {
    let block: CodeBlock = draft.clone().into();
    let id = registry.commit(draft, existing_id);

    doc.set_storage(&registry.backing_field());
    doc.insert_at_selection(&render_block(id, &block));
    doc.content_changed();
    id
}

/// Remove the selected block from the document and the registry.
///
/// The node is removed regardless; the registry entry only if the node
/// carried a resolvable back-reference (an unknown ID is a tolerated
/// no-op on the mapping). The storage field is rewritten afterwards, to the
/// empty string when the registry emptied out. Returns the ID that was
/// dropped from the registry, if any.
pub fn remove_block(
    registry: &mut CodeBlockRegistry,
    doc: &mut impl HostDocument,
) -> Option<BlockId> {
    let node = doc.selected_node()?;
    let reference = block_reference(doc, node);

    doc.remove_node(node);

    let removed = reference.and_then(|id| registry.remove(id).map(|_| id));

    doc.set_storage(&registry.backing_field());
    doc.content_changed();
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BufferDocument;

    #[test]
    fn test_block_reference_ignores_garbage() {
        let mut doc = BufferDocument::new();
        let node = doc.add_node([(BLOCK_ID_ATTR, "not-a-number")]);
        assert_eq!(block_reference(&doc, node), None);
    }

    #[test]
    fn test_open_editor_defaults_for_unregistered_reference() {
        let registry = CodeBlockRegistry::new();
        let mut doc = BufferDocument::new();
        let node = doc.add_node([(BLOCK_ID_ATTR, "5")]);
        doc.select(Some(node));

        let form = open_editor(&registry, &doc, &[], BlockDraft::new("", "default"));
        assert_eq!(form.existing_id, None);
        assert_eq!(form.draft.code, "default");
    }

    #[test]
    fn test_commit_then_open_prefills_record() {
        let mut registry = CodeBlockRegistry::new();
        let mut doc = BufferDocument::new();
        let id = commit_edit(
            &mut registry,
            &mut doc,
            BlockDraft::new("python", "print(1)"),
            None,
        );

        let node = doc.add_node([(BLOCK_ID_ATTR, "1")]);
        doc.select(Some(node));
        let form = open_editor(&registry, &doc, &[], BlockDraft::default());
        assert_eq!(form.existing_id, Some(id));
        assert_eq!(form.draft.language, "python");
        assert_eq!(form.draft.code, "print(1)");
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut registry = CodeBlockRegistry::new();
        registry.commit(BlockDraft::new("go", "package main"), None);
        let mut doc = BufferDocument::new();

        assert_eq!(remove_block(&mut registry, &mut doc), None);
        assert_eq!(registry.len(), 1);
        assert_eq!(doc.change_count(), 0);
    }
}
