//! Integration tests for clipboard paste precedence.

use std::fs;

use layout_model::{LayoutFile, PlacedObject};
use layout_persistence::{
    CLIPBOARD_FORMAT, ClipboardSink, MemoryClipboard, copy_to_clipboard, paste_from_clipboard,
    save_layout_file,
};
use tempfile::tempdir;

fn write_layout_file(dir: &std::path::Path, name: &str, identifier: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut layout = LayoutFile::new(vec![PlacedObject::new(identifier)]);
    save_layout_file(&mut layout, &path).unwrap();
    path
}

#[test]
fn dropped_file_beats_tagged_data() {
    let dir = tempdir().unwrap();
    let path = write_layout_file(dir.path(), "dropped.ad", "FromFile");

    let mut clipboard = MemoryClipboard::new();
    copy_to_clipboard(&[PlacedObject::new("FromClipboard")], &mut clipboard).unwrap();
    clipboard.set_text(r#"[{"Identifier": "FromText"}]"#);
    clipboard.set_dropped_files(vec![path]);

    let objects = paste_from_clipboard(&clipboard);
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].identifier, "FromFile");
}

#[test]
fn tagged_data_beats_text() {
    let mut clipboard = MemoryClipboard::new();
    copy_to_clipboard(&[PlacedObject::new("FromClipboard")], &mut clipboard).unwrap();
    clipboard.set_text(r#"[{"Identifier": "FromText"}]"#);

    let objects = paste_from_clipboard(&clipboard);
    assert_eq!(objects[0].identifier, "FromClipboard");
}

#[test]
fn several_dropped_files_are_skipped() {
    let dir = tempdir().unwrap();
    let first = write_layout_file(dir.path(), "a.ad", "A");
    let second = write_layout_file(dir.path(), "b.ad", "B");

    let mut clipboard = MemoryClipboard::new();
    clipboard.set_dropped_files(vec![first, second]);
    clipboard.set_text(r#"[{"Identifier": "FromText"}]"#);

    let objects = paste_from_clipboard(&clipboard);
    assert_eq!(objects[0].identifier, "FromText");
}

#[test]
fn unreadable_sources_fall_through_to_empty() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("notes.txt");
    fs::write(&bogus, "shopping list").unwrap();

    let mut clipboard = MemoryClipboard::new();
    clipboard.set_dropped_files(vec![bogus]);
    clipboard.set_data(CLIPBOARD_FORMAT, b"{\"FileVersion\": 3".to_vec());
    clipboard.set_text("just some words");

    assert!(paste_from_clipboard(&clipboard).is_empty());
}

#[test]
fn old_clipboard_data_is_force_loaded() {
    let mut clipboard = MemoryClipboard::new();
    clipboard.set_data(
        CLIPBOARD_FORMAT,
        br#"{"FileVersion": 2, "Objects": [{"Identifier": "Old"}]}"#.to_vec(),
    );

    let objects = paste_from_clipboard(&clipboard);
    assert_eq!(objects[0].identifier, "Old");
}
