//! Code-block editing surface.
//!
//! This module hosts everything an editing session needs on top of the
//! registry:
//!
//! - **Language catalog**: the fixed table of supported highlighter
//!   languages and its enabled-set presentation filter
//! - **Operations**: form prefill, commit, and removal, each keeping the
//!   registry, the storage field, and the rendered markup in lockstep
//! - **Session**: per-document wrapper bundling registry and settings

pub mod language_catalog;
pub mod operations;
pub mod session;

pub use language_catalog::{
    LanguageEntry, LanguageOption, format_languages, is_known_language, language_catalog,
    language_label,
};
pub use operations::{EditorForm, block_reference, commit_edit, open_editor, remove_block};
pub use session::EditorSession;
