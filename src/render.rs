//! Markup generation for rendered code blocks.
//!
//! A rendered block is a `<pre>` container carrying a `language-*` class and
//! the back-reference attribute, wrapping a `<code>` element whose text is
//! the HTML-escaped source. Only the ID, the language, and the escaped code
//! are observable in output; the title never leaves the registry.

use std::borrow::Cow;

use crate::model::{BlockId, CodeBlock};

/// Attribute on the rendered container that back-references the registry
/// entry, holding the block ID as a decimal string.
pub const BLOCK_ID_ATTR: &str = "data-code-id";

/// Escape code text for embedding as HTML element content.
///
/// Exactly four entities are produced: `&` → `&amp;`, `<` → `&lt;`,
/// `>` → `&gt;`, `"` → `&quot;`, with the ampersand handled first so that
/// entities produced by later substitutions are never re-encoded. The escape
/// is applied once; feeding already-escaped text back in will double-encode,
/// so callers must always start from the raw code.
pub fn escape_code(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for c in code.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a language identifier for interpolation into class/attribute
/// positions. Catalog identifiers are plain ASCII, but the markup must stay
/// well-formed even for a hand-edited backing field.
fn escape_language(language: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(language)
}

/// Produce the replacement markup for one block.
///
/// The container is marked `contenteditable="false"` so the host editor
/// treats the whole block as a single opaque node.
pub fn render_block(id: BlockId, block: &CodeBlock) -> String {
    let language = escape_language(&block.language);
    format!(
        "<pre class=\"codekeep-block language-{language}\" {BLOCK_ID_ATTR}=\"{id}\" \
         contenteditable=\"false\"><code class=\"language-{language}\">{code}</code></pre>",
        code = escape_code(&block.code),
    )
}
