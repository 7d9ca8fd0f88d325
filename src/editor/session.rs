//! Per-document editing session.
//!
//! [`EditorSession`] bundles the registry for one document with the
//! enabled-languages setting and delegates to the functions in
//! [`operations`](super::operations). One session is constructed per
//! document being edited; there is no process-wide shared state.

use crate::document::HostDocument;
use crate::model::{BlockDraft, BlockId};
use crate::registry::CodeBlockRegistry;

use super::operations::{self, EditorForm};

/// Editing state for a single host document.
///
/// # Example
///
/// ```rust
/// use codekeep::document::BufferDocument;
/// use codekeep::editor::EditorSession;
/// use codekeep::model::BlockDraft;
///
/// let mut doc = BufferDocument::new();
/// let mut session = EditorSession::load(&doc, vec!["python".to_string()]);
/// let form = session.open_editor(&doc, BlockDraft::default());
/// let id = session.commit_edit(&mut doc, form.draft, form.existing_id);
/// assert_eq!(id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EditorSession {
    registry: CodeBlockRegistry,
    enabled_languages: Vec<String>,
}

impl EditorSession {
    /// Create a session over an empty registry.
    pub fn new(enabled_languages: Vec<String>) -> Self {
        Self {
            registry: CodeBlockRegistry::new(),
            enabled_languages,
        }
    }

    /// Create a session by loading the document's storage field.
    ///
    /// A blank or unparseable field starts the session with an empty
    /// registry.
    pub fn load(doc: &impl HostDocument, enabled_languages: Vec<String>) -> Self {
        Self {
            registry: CodeBlockRegistry::from_backing_field(&doc.storage()),
            enabled_languages,
        }
    }

    /// The registry backing this session.
    pub fn registry(&self) -> &CodeBlockRegistry {
        &self.registry
    }

    /// Identifiers offered in the language selector.
    pub fn enabled_languages(&self) -> &[String] {
        &self.enabled_languages
    }

    /// Build the edit form for the current selection. See
    /// [`operations::open_editor`].
    pub fn open_editor(&self, doc: &impl HostDocument, defaults: BlockDraft) -> EditorForm {
        operations::open_editor(&self.registry, doc, &self.enabled_languages, defaults)
    }

    /// Commit form values. See [`operations::commit_edit`].
    pub fn commit_edit(
        &mut self,
        doc: &mut impl HostDocument,
        draft: BlockDraft,
        existing_id: Option<BlockId>,
    ) -> BlockId {
        operations::commit_edit(&mut self.registry, doc, draft, existing_id)
    }

    /// Remove the selected block. See [`operations::remove_block`].
    pub fn remove_block(&mut self, doc: &mut impl HostDocument) -> Option<BlockId> {
        operations::remove_block(&mut self.registry, doc)
    }
}
