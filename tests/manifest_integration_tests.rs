use shipit_cli::manifest::{
    ChecksumArtifact, build_mar_filelist, collect_mar_checksums, generate_mar_manifest,
};
use std::fs;
use tempfile::TempDir;

fn artifact(task_id: &str, path: &str) -> ChecksumArtifact {
    ChecksumArtifact {
        task_id: task_id.to_string(),
        path: path.to_string(),
    }
}

fn place_file(work_dir: &TempDir, task_id: &str, path: &str, contents: &str) {
    let full = work_dir.path().join("cot").join(task_id).join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(&full, contents).unwrap();
}

#[test]
fn test_filelist_preserves_input_order() {
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "foo.sha512", "something\n");
    place_file(&work_dir, "def", "foo.sha512", "something\n");

    let artifacts = vec![artifact("abc", "foo.sha512"), artifact("def", "foo.sha512")];
    let filelist = build_mar_filelist(work_dir.path(), &artifacts).unwrap();

    assert_eq!(filelist.len(), 2);
    assert_eq!(filelist[0].0, "foo.sha512");
    assert_eq!(
        filelist[0].1,
        work_dir.path().join("cot").join("abc").join("foo.sha512")
    );
    assert_eq!(
        filelist[1].1,
        work_dir.path().join("cot").join("def").join("foo.sha512")
    );
}

#[test]
fn test_missing_files_are_reported_in_one_batch() {
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "foo.sha512", "something\n");

    let artifacts = vec![
        artifact("abc", "foo.sha512"),
        artifact("def", "foo.sha512"),
        artifact("ghi", "foo.sha512"),
    ];
    let err = build_mar_filelist(work_dir.path(), &artifacts).unwrap_err();

    assert_eq!(err.missing.len(), 2);
    assert_eq!(
        err.missing[0],
        work_dir.path().join("cot").join("def").join("foo.sha512")
    );
    assert_eq!(
        err.missing[1],
        work_dir.path().join("cot").join("ghi").join("foo.sha512")
    );
}

#[test]
fn test_error_names_the_missing_task_path() {
    // two tasks reference the same relative path, only the first is on disk
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "foo.sha512", "something\n");

    let artifacts = vec![artifact("abc", "foo.sha512"), artifact("def", "foo.sha512")];
    let err = build_mar_filelist(work_dir.path(), &artifacts).unwrap_err();

    let report = err.to_string();
    assert!(report.contains(
        work_dir
            .path()
            .join("cot")
            .join("def")
            .join("foo.sha512")
            .to_str()
            .unwrap()
    ));
    assert!(!report.contains(
        work_dir
            .path()
            .join("cot")
            .join("abc")
            .join("foo.sha512")
            .to_str()
            .unwrap()
    ));
}

#[test]
fn test_duplicate_descriptors_are_not_deduplicated() {
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "foo.sha512", "something\n");

    let artifacts = vec![artifact("abc", "foo.sha512"), artifact("abc", "foo.sha512")];
    let filelist = build_mar_filelist(work_dir.path(), &artifacts).unwrap();

    assert_eq!(filelist.len(), 2);
    assert_eq!(filelist[0], filelist[1]);
}

#[test]
fn test_checksums_are_read_with_trailing_whitespace_stripped() {
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "complete.mar.sha512", "deadbeefcafe  complete.mar\n");

    let artifacts = vec![artifact("abc", "complete.mar.sha512")];
    let filelist = build_mar_filelist(work_dir.path(), &artifacts).unwrap();
    let checksums = collect_mar_checksums(&filelist).unwrap();

    assert_eq!(
        checksums.get("complete.mar.sha512").map(String::as_str),
        Some("deadbeefcafe  complete.mar")
    );
}

#[test]
fn test_manifest_shape() {
    let work_dir = TempDir::new().unwrap();
    place_file(&work_dir, "abc", "partial.mar.sha512", "0123abcd\n");

    let artifacts = vec![artifact("abc", "partial.mar.sha512")];
    let filelist = build_mar_filelist(work_dir.path(), &artifacts).unwrap();
    let checksums = collect_mar_checksums(&filelist).unwrap();
    let manifest = generate_mar_manifest(checksums);

    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "mars": { "partial.mar.sha512": "0123abcd" } })
    );
}

#[test]
fn test_descriptors_parse_from_task_payload_json() {
    let artifacts: Vec<ChecksumArtifact> = serde_json::from_str(
        r#"[{"taskId": "abc", "path": "foo.sha512"}, {"taskId": "def", "path": "foo.sha512"}]"#,
    )
    .unwrap();
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0].task_id, "abc");
    assert_eq!(artifacts[1].path, "foo.sha512");
}
