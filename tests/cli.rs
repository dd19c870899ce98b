use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn achq(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("achq").unwrap();
    cmd.env("ACHQ_HOME", home).env_remove("ACHQ_LOG");
    cmd
}

fn initialized() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    achq(temp_dir.path()).arg("init").assert().success();
    temp_dir
}

#[test]
fn init_seeds_every_screen() {
    let temp_dir = tempfile::tempdir().unwrap();
    achq(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("achievements: 12 record(s) loaded"))
        .stdout(predicate::str::contains("meeting-review"))
        .stdout(predicate::str::contains("track-review"));

    assert!(temp_dir.path().join("achievements.json").exists());

    achq(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn list_pages_filtered_records() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["list", "-t", "patents", "--sort", "name_asc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/1 (2 items)"));

    achq(temp_dir.path())
        .args(["list", "--page-size", "5", "-p", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3/3 (12 items)"));

    achq(temp_dir.path())
        .args(["list", "-q", "graph neural"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph Neural Networks"))
        .stdout(predicate::str::contains("(1 items)"));
}

#[test]
fn list_tolerates_loose_sort_but_rejects_bad_dates() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["list", "--sort", "citations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(12 items)"));

    achq(temp_dir.path())
        .args(["list", "--from", "2023-02-30", "--to", "2023-12-31"])
        .assert()
        .failure();
}

#[test]
fn date_range_excludes_undated_records() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["list", "--from", "2023-01-01", "--to", "2023-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 items)"));
}

#[test]
fn batch_delete_removes_selected_and_clears_selection() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["select", "1", "2"])
        .assert()
        .success();

    achq(temp_dir.path())
        .arg("selection")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph Neural Networks"));

    achq(temp_dir.path())
        .args(["batch", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: 2 selected record(s) deleted"));

    achq(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(10 items)"))
        .stdout(predicate::str::contains("Graph Neural Networks").not());

    achq(temp_dir.path())
        .arg("selection")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing selected."));
}

#[test]
fn batch_rejects_unknown_action() {
    let temp_dir = initialized();
    achq(temp_dir.path()).args(["select", "1"]).assert().success();

    achq(temp_dir.path())
        .args(["batch", "archive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("archive"));

    achq(temp_dir.path())
        .arg("selection")
        .assert()
        .success()
        .stdout(predicate::str::contains("医学影像"));
}

#[test]
fn export_writes_archive() {
    let temp_dir = initialized();
    let out_dir = tempfile::tempdir().unwrap();

    achq(temp_dir.path())
        .args(["select", "--all", "-t", "books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 record(s) selected"));

    achq(temp_dir.path())
        .args(["batch", "export", "--out-dir"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let archives: Vec<_> = std::fs::read_dir(out_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tar.gz"))
        .collect();
    assert_eq!(archives.len(), 1);
}

#[test]
fn delete_waits_for_confirmation() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("achq confirm"));

    achq(temp_dir.path())
        .arg("cancel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept record 2"));

    achq(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .success();

    achq(temp_dir.path())
        .arg("confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    achq(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(11 items)"));

    achq(temp_dir.path())
        .arg("confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("No delete pending."));
}

#[test]
fn delete_unknown_id_fails() {
    let temp_dir = initialized();
    achq(temp_dir.path())
        .args(["delete", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("999"));
}

#[test]
fn screens_keep_separate_selections() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["--screen", "meeting-review", "select", "m1"])
        .assert()
        .success();

    achq(temp_dir.path())
        .arg("selection")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing selected."));

    achq(temp_dir.path())
        .args(["selection", "--screen", "meeting-review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m1"));
}

#[test]
fn config_round_trips_page_size() {
    let temp_dir = initialized();

    achq(temp_dir.path())
        .args(["config", "page-size", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 4"));

    achq(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/3 (12 items)"));

    achq(temp_dir.path())
        .args(["config", "page-size", "0"])
        .assert()
        .failure();
}

#[test]
fn unselect_drops_only_named_ids() {
    let temp_dir = initialized();
    achq(temp_dir.path()).args(["select", "1", "7"]).assert().success();

    achq(temp_dir.path())
        .args(["unselect", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s) selected"));

    achq(temp_dir.path())
        .arg("selection")
        .assert()
        .success()
        .stdout(predicate::str::contains("可折叠式手术器械支架"))
        .stdout(predicate::str::contains("医学影像").not());
}
