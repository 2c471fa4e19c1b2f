use doppler::config::ScanOptions;
use doppler::duplicates::ScanSession;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_fixture_trees_share_one_identity_space() {
    let report =
        ScanSession::with_defaults().scan(&["tests/fixtures/tree1", "tests/fixtures/tree3"]);

    assert!(!report.has_errors());
    assert_eq!(
        report.flat_duplicate_paths(),
        vec![
            "tests/fixtures/tree3/dir1/file1.txt",
            "tests/fixtures/tree3/dir2/file1.txt",
            "tests/fixtures/tree1/dir2/file2.txt",
        ]
    );

    let record = report
        .duplicates()
        .get("tests/fixtures/tree1/dir1/file1.txt")
        .unwrap();
    assert_eq!(
        record.name_duplicates,
        vec![
            "tests/fixtures/tree3/dir1/file1.txt",
            "tests/fixtures/tree3/dir2/file1.txt",
        ]
    );
    assert_eq!(
        record.content_duplicates,
        vec![
            "tests/fixtures/tree1/dir2/file2.txt",
            "tests/fixtures/tree3/dir1/file1.txt",
        ]
    );
    assert_eq!(report.duplicates().len(), 1);
}

#[test]
fn test_root_order_decides_representative() {
    let report =
        ScanSession::with_defaults().scan(&["tests/fixtures/tree3", "tests/fixtures/tree1"]);

    let (representative, _) = report.duplicates().iter().next().unwrap();
    assert_eq!(representative, "tests/fixtures/tree3/dir1/file1.txt");
}

#[test]
fn test_scan_two_non_overlapping_directories() {
    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();

    File::create(dir1.path().join("a.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();
    File::create(dir2.path().join("b.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();

    let report = ScanSession::with_defaults().scan(&[dir1.path(), dir2.path()]);

    assert_eq!(report.duplicates().len(), 1);
    assert_eq!(
        report.flat_duplicate_paths(),
        vec![dir2.path().join("b.txt").to_string_lossy().into_owned()]
    );
    assert_eq!(report.files_scanned(), 2);
}

#[test]
fn test_overlapping_roots_with_absolute_paths() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("a.txt"), b"content").unwrap();
    fs::write(sub.join("b.txt"), b"content").unwrap();

    let options = ScanOptions::default().with_absolute_paths(true);
    let report = ScanSession::new(options)
        .unwrap()
        .scan(&[dir.path(), sub.as_path()]);

    // sub/b.txt is reached through both roots but classified once
    let flat = report.flat_duplicate_paths();
    assert_eq!(flat.len(), 1);
    assert!(flat[0].ends_with("/sub/b.txt"));
    assert_eq!(report.files_scanned(), 2);

    let (representative, record) = report.duplicates().iter().next().unwrap();
    assert!(representative.ends_with("/a.txt"));
    assert_eq!(record.content_duplicates.len(), 1);
}

#[test]
fn test_missing_root_does_not_stop_later_roots() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.txt"), b"same").unwrap();
    fs::write(dir.path().join("y.txt"), b"same").unwrap();
    let missing = dir.path().join("missing");

    let report = ScanSession::with_defaults().scan(&[missing.as_path(), dir.path()]);

    assert!(report.has_errors());
    assert!(report.found_duplicates());
    assert_eq!(report.flat_duplicate_paths().len(), 1);
}
