use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use renex_lib::*;

fn names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect()
}

fn episode_config(dir: &Path, ledger: &Path, apply: bool) -> RenameConfig {
    RenameConfig {
        directory: dir.to_path_buf(),
        pattern: r"^show\.s(?P<season>\d+)e(?P<episode>\d+)\.mkv$".to_string(),
        template: "Show S<season>E<episode>.mkv".to_string(),
        apply,
        ledger: Some(ledger.to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn rename_then_revert_single_episode() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tv");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("show.s01e02.mkv"), "video").unwrap();
    let ledger = tmp.path().join("backup.log");

    let summary = run_rename(&episode_config(&dir, &ledger, true), &|_| {}).unwrap();
    assert_eq!(summary.applied, 1);
    assert_eq!(names(&dir), BTreeSet::from(["Show S01E02.mkv".to_string()]));

    let entries = RenameLedger::open_existing(&ledger)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(
        entries,
        vec![LedgerEntry::new("show.s01e02.mkv", "Show S01E02.mkv")]
    );

    let revert = RevertConfig {
        directory: dir.clone(),
        ledger: ledger.clone(),
        apply: true,
    };
    let summary = run_revert(&revert, &|_| {}).unwrap();
    assert_eq!(summary.applied, 1);
    assert_eq!(names(&dir), BTreeSet::from(["show.s01e02.mkv".to_string()]));
    assert_eq!(fs::read_to_string(dir.join("show.s01e02.mkv")).unwrap(), "video");
}

#[test]
fn rename_then_revert_restores_whole_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("media");
    fs::create_dir(&dir).unwrap();
    for name in [
        "show.s01e01.mkv",
        "show.s01e02.mkv",
        "show.s02e10.mkv",
        "show.s02e11.srt",
        "cover.jpg",
    ] {
        fs::write(dir.join(name), name).unwrap();
    }
    let before = names(&dir);
    let ledger = tmp.path().join("backup.log");

    let summary = run_rename(&episode_config(&dir, &ledger, true), &|_| {}).unwrap();
    assert_eq!(summary.applied, 3);
    assert_eq!(summary.unmatched, 2);
    assert_ne!(names(&dir), before);

    let revert = RevertConfig {
        directory: dir.clone(),
        ledger,
        apply: true,
    };
    let summary = run_revert(&revert, &|_| {}).unwrap();
    assert_eq!(summary.applied, 3);
    assert!(!summary.has_problems());
    assert_eq!(names(&dir), before);
}

#[test]
fn revert_dry_run_leaves_directory_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tv");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("show.s01e02.mkv"), "").unwrap();
    let ledger = tmp.path().join("backup.log");

    run_rename(&episode_config(&dir, &ledger, true), &|_| {}).unwrap();
    let renamed = names(&dir);

    let revert = RevertConfig {
        directory: dir.clone(),
        ledger,
        apply: false,
    };
    let summary = run_revert(&revert, &|_| {}).unwrap();
    assert_eq!(summary.planned, 1);
    assert_eq!(names(&dir), renamed);
}

#[test]
fn phantom_ledger_entry_is_a_warning() {
    // A ledger entry whose rename never happened (crash between log and rename)
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tv");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("kept.txt"), "").unwrap();
    fs::write(dir.join("b.txt"), "").unwrap();
    let ledger = tmp.path().join("backup.log");
    fs::write(&ledger, "kept-orig.txt;kept-new.txt\na.txt;b.txt\n").unwrap();

    let revert = RevertConfig {
        directory: dir.clone(),
        ledger,
        apply: true,
    };
    let summary = run_revert(&revert, &|_| {}).unwrap();
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.problems.len(), 1);
    assert_eq!(
        names(&dir),
        BTreeSet::from(["a.txt".to_string(), "kept.txt".to_string()])
    );
}

#[test]
fn corrupt_ledger_reverts_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tv");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("b.txt"), "").unwrap();
    let ledger = tmp.path().join("backup.log");
    fs::write(&ledger, "a.txt;b.txt\nbroken\n").unwrap();

    let revert = RevertConfig {
        directory: dir.clone(),
        ledger,
        apply: true,
    };
    let err = run_revert(&revert, &|_| {}).unwrap_err();
    assert!(matches!(err, RenexError::LedgerReadCorrupt { .. }));
    assert!(dir.join("b.txt").exists());
}

#[test]
fn second_rename_run_needs_a_new_ledger() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tv");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("show.s01e02.mkv"), "").unwrap();
    let ledger = tmp.path().join("backup.log");

    run_rename(&episode_config(&dir, &ledger, true), &|_| {}).unwrap();
    let err = run_rename(&episode_config(&dir, &ledger, true), &|_| {}).unwrap_err();
    assert!(matches!(err, RenexError::LedgerAlreadyExists(_)));
}
