use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn coggnify(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coggnify").expect("bin");
    cmd.env("COGGNIFY_DATA_DIR", dir.path())
        .env_remove("COGGNIFY_LOG");
    cmd
}

fn register_owner(dir: &TempDir) {
    coggnify(dir)
        .args([
            "owner",
            "create",
            "--name",
            "Jane Rider",
            "--phone",
            "555-0101",
            "--address",
            "1 Stable Lane",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created owner: Jane Rider"));
}

#[test]
fn owner_create_then_show() {
    let dir = TempDir::new().expect("tempdir");
    register_owner(&dir);

    coggnify(&dir)
        .args(["owner", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: Jane Rider"))
        .stdout(predicate::str::contains("555-0101"))
        .stdout(predicate::str::contains("1 Stable Lane"));
}

#[test]
fn owner_show_without_owner_fails() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir).args(["owner", "show"]).assert().failure();
}

#[test]
fn horse_add_then_list() {
    let dir = TempDir::new().expect("tempdir");
    register_owner(&dir);

    coggnify(&dir)
        .args([
            "horse", "add", "--name", "Thunder", "--breed", "Arabian", "--color", "Bay",
            "--microchip", "985112345678901",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added horse: Thunder"));

    coggnify(&dir)
        .args(["horse", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thunder"))
        .stdout(predicate::str::contains("Arabian"))
        .stdout(predicate::str::contains("985112345678901"));
}

#[test]
fn horse_list_empty() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir)
        .args(["horse", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No horses registered."));
}

#[test]
fn code_prints_six_digits() {
    let dir = TempDir::new().expect("tempdir");

    let output = coggnify(&dir).arg("code").output().expect("run");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    let code = text
        .trim()
        .strip_prefix("Verification Code: ")
        .and_then(|rest| rest.split_whitespace().next())
        .expect("code line");
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn dashboard_explains_missing_registration() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No owner registered yet."));

    register_owner(&dir);
    coggnify(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No horses registered yet."));

    coggnify(&dir)
        .args(["horse", "add", "-n", "Thunder", "-b", "Arabian", "-c", "Bay"])
        .assert()
        .success();
    coggnify(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Horses Registered: 1"))
        .stdout(predicate::str::contains("Verification Code: "));
}

#[test]
fn status_moves_to_dashboard_after_registration() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current step: Step 1: Scan Driver's License"));

    register_owner(&dir);
    coggnify(&dir)
        .args(["horse", "add", "-n", "Thunder", "-b", "Arabian", "-c", "Bay"])
        .assert()
        .success();

    coggnify(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current step: Step 4: Owner Dashboard"))
        .stdout(predicate::str::contains("Horses: 1"));
}

#[test]
fn export_horses_writes_csv() {
    let dir = TempDir::new().expect("tempdir");
    register_owner(&dir);
    coggnify(&dir)
        .args(["horse", "add", "-n", "Thunder", "-b", "Arabian", "-c", "Bay"])
        .assert()
        .success();

    let out = dir.path().join("horses.csv");
    coggnify(&dir)
        .args(["export", "horses"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 horses"));

    let csv = fs::read_to_string(&out).expect("csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Name,Breed,Color,Microchip,Owner ID,Added At")
    );
    assert!(lines.next().expect("row").contains("Thunder"));
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().expect("tempdir");
    register_owner(&dir);

    coggnify(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    coggnify(&dir).args(["owner", "show"]).assert().success();

    coggnify(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset: 1 owner, 0 horses removed."));
    coggnify(&dir).args(["owner", "show"]).assert().failure();
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));

    register_owner(&dir);
    coggnify(&dir)
        .args(["horse", "add", "-n", "Thunder", "-b", "Arabian", "-c", "Bay"])
        .assert()
        .success();
    coggnify(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Owner"))
        .stdout(predicate::str::contains("\"Jane Rider\""))
        .stdout(predicate::str::contains("\"Thunder\" owned by CR-"));
}

#[test]
fn malformed_owner_record_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("data")).expect("data dir");
    fs::write(dir.path().join("data").join("owner.json"), "{ not json").expect("write");

    coggnify(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner.json"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().expect("tempdir");

    coggnify(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"))
        .stdout(predicate::str::contains("Processing delay: 2000 ms"));
    assert!(dir.path().join("config.json").exists());
}
