use doppler::config::ScanOptions;
use doppler::duplicates::ScanSession;
use doppler::error::InvocationError;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

const TREE1: &str = "tests/fixtures/tree1";
const TREE2: &str = "tests/fixtures/tree2";
const TREE3: &str = "tests/fixtures/tree3";

#[test]
fn test_tree1_same_content_different_names() {
    let report = ScanSession::with_defaults().scan(&[TREE1]);

    assert!(!report.has_errors());
    assert!(report.found_duplicates());
    assert_eq!(report.duplicates().len(), 1);

    let record = report
        .duplicates()
        .get("tests/fixtures/tree1/dir1/file1.txt")
        .unwrap();
    assert!(record.name_duplicates.is_empty());
    assert_eq!(
        record.content_duplicates,
        vec!["tests/fixtures/tree1/dir2/file2.txt"]
    );
}

#[test]
fn test_tree2_same_name_same_content() {
    let report = ScanSession::with_defaults().scan(&[TREE2]);

    assert!(!report.has_errors());
    assert_eq!(report.duplicates().len(), 1);
    for (_, record) in report.duplicates().iter() {
        assert_eq!(record.name_duplicates.len(), 1);
        assert_eq!(record.content_duplicates.len(), 1);
    }
}

#[test]
fn test_tree3_same_name_different_content() {
    let report = ScanSession::with_defaults().scan(&[TREE3]);

    assert!(!report.has_errors());
    assert_eq!(report.duplicates().len(), 1);
    let record = report
        .duplicates()
        .get("tests/fixtures/tree3/dir1/file1.txt")
        .unwrap();
    assert_eq!(
        record.name_duplicates,
        vec!["tests/fixtures/tree3/dir2/file1.txt"]
    );
    assert!(record.content_duplicates.is_empty());
}

#[test]
fn test_skip_hash_on_content_only_tree_finds_nothing() {
    let options = ScanOptions::default().with_check_content(false);
    let report = ScanSession::new(options).unwrap().scan(&[TREE1]);

    assert!(!report.found_duplicates());
    assert!(report.flat_duplicate_paths().is_empty());
}

#[test]
fn test_tree1_flat_list_holds_only_the_later_copy() {
    let report = ScanSession::with_defaults().scan(&[TREE1]);

    assert_eq!(
        report.flat_duplicate_paths(),
        vec!["tests/fixtures/tree1/dir2/file2.txt"]
    );
}

#[test]
fn test_skip_name_on_name_only_tree_finds_nothing() {
    let options = ScanOptions::default().with_check_names(false);
    let report = ScanSession::new(options).unwrap().scan(&[TREE3]);

    assert!(!report.found_duplicates());
}

#[test]
fn test_session_rejects_options_with_nothing_to_check() {
    let options = ScanOptions::default()
        .with_check_names(false)
        .with_check_content(false);

    assert_eq!(
        ScanSession::new(options).err(),
        Some(InvocationError::NothingToCheck)
    );
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let report = ScanSession::with_defaults().scan(&[dir.path()]);

    assert!(!report.found_duplicates());
    assert!(!report.has_errors());
    assert_eq!(report.files_scanned(), 0);
}

#[test]
fn test_first_seen_file_stays_representative() {
    let dir = tempdir().unwrap();
    for sub in ["a", "b", "c", "d"] {
        fs::create_dir(dir.path().join(sub)).unwrap();
        File::create(dir.path().join(sub).join("same.txt"))
            .unwrap()
            .write_all(b"identical")
            .unwrap();
    }

    let report = ScanSession::with_defaults().scan(&[dir.path()]);
    assert_eq!(report.duplicates().len(), 1);

    let (representative, record) = report.duplicates().iter().next().unwrap();
    assert!(representative.ends_with("/a/same.txt"));
    let tails: Vec<_> = record
        .content_duplicates
        .iter()
        .map(|p| &p[p.len() - "x/same.txt".len()..])
        .collect();
    assert_eq!(tails, vec!["b/same.txt", "c/same.txt", "d/same.txt"]);
    assert_eq!(record.name_duplicates, record.content_duplicates);
}

#[test]
fn test_repeated_scans_are_identical() {
    let dir = tempdir().unwrap();
    for i in 0..30 {
        let sub = dir.path().join(format!("d{}", i % 4));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(format!("f{}.txt", i % 9)), format!("v{}", i % 5)).unwrap();
    }

    let first = ScanSession::with_defaults().scan(&[dir.path()]);
    let second = ScanSession::with_defaults().scan(&[dir.path()]);

    assert_eq!(first.flat_duplicate_paths(), second.flat_duplicate_paths());
    let a: Vec<_> = first.duplicates().iter().collect();
    let b: Vec<_> = second.duplicates().iter().collect();
    assert_eq!(a, b);
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("l1/l2/l3/l4");
    fs::create_dir_all(&deep).unwrap();
    fs::write(dir.path().join("top.bin"), b"payload").unwrap();
    fs::write(deep.join("bottom.bin"), b"payload").unwrap();

    let report = ScanSession::with_defaults().scan(&[dir.path()]);

    // "l1" sorts before "top.bin"
    let (representative, _) = report.duplicates().iter().next().unwrap();
    assert!(representative.ends_with("l1/l2/l3/l4/bottom.bin"));
    let flat = report.flat_duplicate_paths();
    assert_eq!(flat.len(), 1);
    assert!(flat[0].ends_with("/top.bin"));
}
