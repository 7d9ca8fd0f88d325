use codekeep::document::{BufferDocument, HostDocument};
use codekeep::editor::EditorSession;
use codekeep::model::BlockDraft;
use codekeep::render::BLOCK_ID_ATTR;

fn enabled(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn commit_commit_remove_scenario() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&["python", "json"]));

    // Commit a first block with no existing ID.
    let id1 = session.commit_edit(&mut doc, BlockDraft::new("python", "print(1)"), None);
    assert_eq!(id1, 1);
    assert_eq!(session.registry().get(1).unwrap().code, "print(1)");
    let markup = doc.inserted_markup().last().unwrap();
    assert!(markup.contains("data-code-id=\"1\""));
    assert!(markup.contains("print(1)"));

    // A second fresh commit allocates ID 2.
    let id2 = session.commit_edit(&mut doc, BlockDraft::new("json", "{}"), None);
    assert_eq!(id2, 2);
    assert_eq!(session.registry().len(), 2);

    // Remove block 1 via its rendered node.
    let node = doc.add_node([(BLOCK_ID_ATTR, "1")]);
    doc.select(Some(node));
    assert_eq!(session.remove_block(&mut doc), Some(1));
    assert!(doc.is_removed(node));
    assert_eq!(session.registry().len(), 1);

    // The backing field reflects only record 2.
    let storage = doc.storage();
    assert!(storage.contains("\"2\""));
    assert!(!storage.contains("\"1\""));
}

#[test]
fn commit_overwrites_when_editing_existing_block() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&["python"]));
    let id = session.commit_edit(&mut doc, BlockDraft::new("python", "print(1)"), None);

    // Reopen through the rendered node and commit amended values.
    let node = doc.add_node([(BLOCK_ID_ATTR, "1")]);
    doc.select(Some(node));
    let form = session.open_editor(&doc, BlockDraft::default());
    assert_eq!(form.existing_id, Some(id));

    let mut draft = form.draft;
    draft.code = "print(2)".to_string();
    let same = session.commit_edit(&mut doc, draft, form.existing_id);
    assert_eq!(same, id);
    assert_eq!(session.registry().len(), 1);
    assert_eq!(session.registry().get(id).unwrap().code, "print(2)");
}

#[test]
fn open_editor_prefers_record_over_defaults() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&["ruby"]));
    session.commit_edit(&mut doc, BlockDraft::new("ruby", "puts 1"), None);

    let node = doc.add_node([(BLOCK_ID_ATTR, "1")]);
    doc.select(Some(node));
    let form = session.open_editor(&doc, BlockDraft::new("perl", "print 2"));
    assert_eq!(form.draft.language, "ruby");
    assert_eq!(form.draft.code, "puts 1");
}

#[test]
fn open_editor_falls_back_for_unknown_reference() {
    let mut doc = BufferDocument::new();
    let session = EditorSession::load(&doc, enabled(&["perl"]));

    let node = doc.add_node([(BLOCK_ID_ATTR, "40")]);
    doc.select(Some(node));
    let form = session.open_editor(&doc, BlockDraft::new("perl", "print 2"));
    assert_eq!(form.existing_id, None);
    assert_eq!(form.draft.language, "perl");
    assert_eq!(form.draft.code, "print 2");
}

#[test]
fn open_editor_is_side_effect_free() {
    let mut doc = BufferDocument::new();
    let session = EditorSession::load(&doc, enabled(&["python"]));

    let _form = session.open_editor(&doc, BlockDraft::default());
    assert!(session.registry().is_empty());
    assert_eq!(doc.storage(), "");
    assert_eq!(doc.change_count(), 0);
    assert!(doc.inserted_markup().is_empty());
}

#[test]
fn language_selector_omitted_when_nothing_enabled() {
    let doc = BufferDocument::new();
    let session = EditorSession::load(&doc, enabled(&[]));
    let form = session.open_editor(&doc, BlockDraft::default());
    assert!(form.language_options.is_empty());
}

#[test]
fn commit_escapes_code_in_markup_but_not_in_storage() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&["markup"]));
    session.commit_edit(
        &mut doc,
        BlockDraft::new("markup", "<div class=\"x\">&</div>"),
        None,
    );

    let markup = doc.inserted_markup().last().unwrap();
    assert!(markup.contains("&lt;div class=&quot;x&quot;&gt;&amp;&lt;/div&gt;"));

    // The backing field keeps the raw text (JSON-escaped quotes only).
    let storage = doc.storage();
    assert!(storage.contains(r#"<div class=\"x\">&</div>"#));
}

#[test]
fn removing_node_without_reference_keeps_registry() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&[]));
    session.commit_edit(&mut doc, BlockDraft::new("tcl", "puts 1"), None);
    let changes_before = doc.change_count();

    let node = doc.add_node([("class", "plain-paragraph")]);
    doc.select(Some(node));
    assert_eq!(session.remove_block(&mut doc), None);

    // The node is gone but the mapping is untouched, and the host was
    // still notified.
    assert!(doc.is_removed(node));
    assert_eq!(session.registry().len(), 1);
    assert_eq!(doc.change_count(), changes_before + 1);
}

#[test]
fn removing_last_block_empties_storage_field() {
    let mut doc = BufferDocument::new();
    let mut session = EditorSession::load(&doc, enabled(&[]));
    session.commit_edit(&mut doc, BlockDraft::new("ini", "[core]"), None);
    assert!(!doc.storage().is_empty());

    let node = doc.add_node([(BLOCK_ID_ATTR, "1")]);
    doc.select(Some(node));
    session.remove_block(&mut doc);
    assert_eq!(doc.storage(), "");
}

#[test]
fn session_resumes_from_existing_storage() {
    let mut doc = BufferDocument::with_storage(
        r#"{"7":{"language":"haskell","code":"main = pure ()"}}"#,
    );
    let mut session = EditorSession::load(&doc, enabled(&["haskell"]));
    assert_eq!(session.registry().len(), 1);

    // New allocations continue past the stored maximum.
    let id = session.commit_edit(&mut doc, BlockDraft::new("haskell", "x = 1"), None);
    assert_eq!(id, 8);
}
