//! Registry-backed code blocks for rich-text documents.
//!
//! Visual editors reformat HTML aggressively, which corrupts embedded code
//! samples. This crate keeps each sample in a [`registry::CodeBlockRegistry`]
//! keyed by auto-incrementing ID, mirrors the registry into a serialized
//! storage field on every mutation, and renders blocks into the document as
//! opaque, highlight-ready markup that only back-references the registry.
//!
//! The binary `codekeep` demonstrates usage against a storage file.

pub mod document;
pub mod editor;
pub mod model;
pub mod registry;
pub mod render;
pub mod settings;
