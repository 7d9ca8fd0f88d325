use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// BlockId
// ────────────────────────────────────────────────────────────────────────────

/// Identifier of a code block within a registry.
///
/// IDs are positive integers assigned by the registry, never by the caller.
/// In the backing field they appear as decimal-string JSON keys; ordering is
/// always numeric, so `"10"` comes after `"9"`.
pub type BlockId = u64;

// ────────────────────────────────────────────────────────────────────────────
// CodeBlock
// ────────────────────────────────────────────────────────────────────────────

/// One stored code sample.
///
/// The `code` text is kept raw (unescaped) in memory and in the backing
/// field; HTML entities are produced only at render time. `title` is
/// edit-time metadata and never appears in rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Optional display title shown while editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Highlighter language identifier (e.g. `"python"`). May be empty when
    /// no languages are enabled.
    #[serde(default)]
    pub language: String,
    /// Raw source text of the sample.
    #[serde(default)]
    pub code: String,
}

// ────────────────────────────────────────────────────────────────────────────
// BlockDraft
// ────────────────────────────────────────────────────────────────────────────

/// Form values for a block as submitted from the edit form.
///
/// This is the fixed shape that crosses the editor boundary; anything the
/// host form produces must be converted into a `BlockDraft` before it can
/// reach [`crate::registry::CodeBlockRegistry::commit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDraft {
    pub title: Option<String>,
    pub language: String,
    pub code: String,
}

impl BlockDraft {
    /// Convenience constructor for a language/code pair without a title.
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: None,
            language: language.into(),
            code: code.into(),
        }
    }
}

impl From<BlockDraft> for CodeBlock {
    fn from(draft: BlockDraft) -> Self {
        CodeBlock {
            title: draft.title,
            language: draft.language,
            code: draft.code,
        }
    }
}
