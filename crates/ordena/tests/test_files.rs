//! File-level orchestration tests

use std::fs;

use pretty_assertions::assert_eq;

use ordena::orchestrator::{check_file, fix_file};

#[test]
fn check_leaves_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ts");
    let source = "import b from 'b';\nimport a from 'a';\n";
    fs::write(&path, source).unwrap();

    assert!(check_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn fix_rewrites_only_when_needed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ts");
    fs::write(&path, "import b from 'b';\nimport a from 'a';\n").unwrap();

    assert!(fix_file(&path).unwrap());
    let fixed = fs::read_to_string(&path).unwrap();
    assert_eq!(fixed, "import a from 'a';\nimport b from 'b';\n");

    // Second run is the fixed point.
    assert!(!fix_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), fixed);
}

#[test]
fn missing_files_surface_their_path() {
    let err = check_file(std::path::Path::new("/no/such/file.ts")).unwrap_err();
    assert!(err.to_string().contains("file.ts"));
}
