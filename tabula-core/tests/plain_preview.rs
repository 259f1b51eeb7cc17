//! Dry-run previews with color disabled, as when stdout is redirected.
//!
//! Kept in its own test binary: the color override is process-wide.

use std::fs;

use tabula_core::CodeFile;
use tempfile::TempDir;

#[test]
fn test_preview_without_color_marks_edits_in_text() {
    colored::control::set_override(false);
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pet.ts");
    fs::write(&path, "cat").unwrap();

    let mut out = Vec::new();
    CodeFile::new(&path, "cut").preview_to(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(!out.contains('\u{1b}'));
    assert!(out.contains("pet.ts"));
    assert!(out.contains("[-a-]"));
    assert!(out.contains("{+u+}"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "cat");
}
