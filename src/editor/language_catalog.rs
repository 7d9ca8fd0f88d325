//! Language catalog with the full table of supported highlighter languages.
//!
//! The catalog is a fixed, ordered list of `(display label, identifier)`
//! pairs: the generic markup/style/script groups first, then everything else
//! alphabetically by label. It is static for the process lifetime; which
//! subset editors actually see is decided by the enabled-languages setting
//! at presentation time via [`format_languages`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use codekeep::editor::language_catalog::{format_languages, language_catalog};
//!
//! let options = format_languages(&["python".to_string(), "json".to_string()]);
//! // -> blank option, then Python and JSON in catalog order
//! ```

use once_cell::sync::Lazy;

/// A single entry in the language catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable label shown in the language selector.
    pub label: String,
    /// Highlighter class identifier (e.g. `"javascript"`).
    pub identifier: String,
}

/// One option offered by the language selector: the label shown to the
/// editor and the identifier stored on the block. The first option of a
/// non-empty selector is always blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub label: String,
    pub value: String,
}

/// Helper to create a catalog entry concisely.
fn entry(label: &str, identifier: &str) -> LanguageEntry {
    LanguageEntry {
        label: label.to_string(),
        identifier: identifier.to_string(),
    }
}

/// Returns the complete language catalog.
///
/// The catalog is lazily initialized on first access and cached for the
/// lifetime of the process.
pub fn language_catalog() -> &'static [LanguageEntry] {
    static CATALOG: Lazy<Vec<LanguageEntry>> = Lazy::new(build_catalog);
    &CATALOG
}

/// Returns true if the identifier names a catalog language.
pub fn is_known_language(identifier: &str) -> bool {
    language_catalog().iter().any(|e| e.identifier == identifier)
}

/// Look up the display label for an identifier.
pub fn language_label(identifier: &str) -> Option<&'static str> {
    language_catalog()
        .iter()
        .find(|e| e.identifier == identifier)
        .map(|e| e.label.as_str())
}

/// Build the language-selector options for the given enabled identifiers.
///
/// Output follows catalog order regardless of the order of `enabled`; a
/// blank option leads the list so an editor can leave the language unset.
/// When nothing is enabled the result is empty and callers omit the
/// selector entirely.
pub fn format_languages<S: AsRef<str>>(enabled: &[S]) -> Vec<LanguageOption> {
    if enabled.is_empty() {
        return Vec::new();
    }

    let mut options = Vec::with_capacity(enabled.len() + 1);
    options.push(LanguageOption {
        label: String::new(),
        value: String::new(),
    });
    for e in language_catalog() {
        if enabled.iter().any(|id| id.as_ref() == e.identifier) {
            options.push(LanguageOption {
                label: e.label.clone(),
                value: e.identifier.clone(),
            });
        }
    }
    options
}

fn build_catalog() -> Vec<LanguageEntry> {
    let mut c = Vec::with_capacity(128);

    // ── Generic groups ───────────────────────────────────────────────────
    c.push(entry("Markup", "markup"));
    c.push(entry("CSS", "css"));
    c.push(entry("C-like", "clike"));
    c.push(entry("JavaScript", "javascript"));

    // ── Alphabetical by label ────────────────────────────────────────────
    c.push(entry("ABAP", "abap"));
    c.push(entry("ActionScript", "actionscript"));
    c.push(entry("Ada", "ada"));
    c.push(entry("Apache Configuration", "apacheconf"));
    c.push(entry("APL", "apl"));
    c.push(entry("AppleScript", "applescript"));
    c.push(entry("AsciiDoc", "asciidoc"));
    c.push(entry("ASP.NET (C#)", "aspnet"));
    c.push(entry("AutoIt", "autoit"));
    c.push(entry("AutoHotkey", "autohotkey"));
    c.push(entry("Bash", "bash"));
    c.push(entry("BASIC", "basic"));
    c.push(entry("Batch", "batch"));
    c.push(entry("Bison", "bison"));
    c.push(entry("Brainfuck", "brainfuck"));
    c.push(entry("Bro", "bro"));
    c.push(entry("C", "c"));
    c.push(entry("C#", "csharp"));
    c.push(entry("C++", "cpp"));
    c.push(entry("CoffeeScript", "coffeescript"));
    c.push(entry("Crystal", "crystal"));
    c.push(entry("CSS Extras", "css-extras"));
    c.push(entry("D", "d"));
    c.push(entry("Dart", "dart"));
    c.push(entry("Django/Jinja2", "django"));
    c.push(entry("Diff", "diff"));
    c.push(entry("Docker", "docker"));
    c.push(entry("Eiffel", "eiffel"));
    c.push(entry("Elixir", "elixir"));
    c.push(entry("Erlang", "erlang"));
    c.push(entry("F#", "fsharp"));
    c.push(entry("Fortran", "fortran"));
    c.push(entry("Gherkin", "gherkin"));
    c.push(entry("Git", "git"));
    c.push(entry("GLSL", "glsl"));
    c.push(entry("Go", "go"));
    c.push(entry("GraphQL", "graphql"));
    c.push(entry("Groovy", "groovy"));
    c.push(entry("Haml", "haml"));
    c.push(entry("Handlebars", "handlebars"));
    c.push(entry("Haskell", "haskell"));
    c.push(entry("Haxe", "haxe"));
    c.push(entry("HTTP", "http"));
    c.push(entry("Icon", "icon"));
    c.push(entry("Inform 7", "inform7"));
    c.push(entry("Ini", "ini"));
    c.push(entry("J", "j"));
    c.push(entry("Jade", "jade"));
    c.push(entry("Java", "java"));
    c.push(entry("Jolie", "jolie"));
    c.push(entry("JSON", "json"));
    c.push(entry("Julia", "julia"));
    c.push(entry("Keyman", "keyman"));
    c.push(entry("Kotlin", "kotlin"));
    c.push(entry("LaTeX", "latex"));
    c.push(entry("Less", "less"));
    c.push(entry("LiveScript", "livescript"));
    c.push(entry("LOLCODE", "lolcode"));
    c.push(entry("Lua", "lua"));
    c.push(entry("Makefile", "makefile"));
    c.push(entry("Markdown", "markdown"));
    c.push(entry("MATLAB", "matlab"));
    c.push(entry("MEL", "mel"));
    c.push(entry("Mizar", "mizar"));
    c.push(entry("Monkey", "monkey"));
    c.push(entry("NASM", "nasm"));
    c.push(entry("nginx", "nginx"));
    c.push(entry("Nim", "nim"));
    c.push(entry("Nix", "nix"));
    c.push(entry("NSIS", "nsis"));
    c.push(entry("Objective-C", "objectivec"));
    c.push(entry("OCaml", "ocaml"));
    c.push(entry("Oz", "oz"));
    c.push(entry("PARI/GP", "parigp"));
    c.push(entry("Parser", "parser"));
    c.push(entry("Pascal", "pascal"));
    c.push(entry("Perl", "perl"));
    c.push(entry("PHP", "php"));
    c.push(entry("PHP Extras", "php-extras"));
    c.push(entry("PowerShell", "powershell"));
    c.push(entry("Processing", "processing"));
    c.push(entry("Prolog", "prolog"));
    c.push(entry(".properties", "properties"));
    c.push(entry("Protocol Buffers", "protobuf"));
    c.push(entry("Puppet", "puppet"));
    c.push(entry("Pure", "pure"));
    c.push(entry("Python", "python"));
    c.push(entry("Q", "q"));
    c.push(entry("Qore", "qore"));
    c.push(entry("R", "r"));
    c.push(entry("React JSX", "jsx"));
    c.push(entry("Reason", "reason"));
    c.push(entry("reST (reStructuredText)", "rest"));
    c.push(entry("Rip", "rip"));
    c.push(entry("Roboconf", "roboconf"));
    c.push(entry("Ruby", "ruby"));
    c.push(entry("Rust", "rust"));
    c.push(entry("SAS", "sas"));
    c.push(entry("Sass (Sass)", "sass"));
    c.push(entry("Sass (Scss)", "scss"));
    c.push(entry("Scala", "scala"));
    c.push(entry("Scheme", "scheme"));
    c.push(entry("Smalltalk", "smalltalk"));
    c.push(entry("Smarty", "smarty"));
    c.push(entry("SQL", "sql"));
    c.push(entry("Stylus", "stylus"));
    c.push(entry("Swift", "swift"));
    c.push(entry("Tcl", "tcl"));
    c.push(entry("Textile", "textile"));
    c.push(entry("Twig", "twig"));
    c.push(entry("TypeScript", "typescript"));
    c.push(entry("Verilog", "verilog"));
    c.push(entry("VHDL", "vhdl"));
    c.push(entry("vim", "vim"));
    c.push(entry("Wiki markup", "wiki"));
    c.push(entry("Xojo (REALbasic)", "xojo"));
    c.push(entry("YAML", "yaml"));

    c
}
