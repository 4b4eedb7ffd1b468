//! End-to-end tests for the insurabook binary.
//!
//! Uses `assert_cmd` to spawn the real binary against throwaway snapshot
//! files and verifies exit codes, stdout content, and stderr content. Every
//! test passes `--data` explicitly so nothing touches a real snapshot.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper: a Command for the binary pointed at the given snapshot file.
fn insurabook(data: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("insurabook");
    cmd.arg("--data").arg(data);
    cmd.env_remove("INSURA_DATA_FILE");
    cmd.env_remove("INSURA_LOG_LEVEL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Helper: a snapshot file holding an empty book, for clean-slate tests.
fn empty_book(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("book.json");
    fs::write(&path, "{}").unwrap();
    path
}

/// Helper: register the walker-a client on the given snapshot.
fn add_walker(data: &Path) {
    insurabook(data)
        .args([
            "client", "add", "--id", "walker-a", "--name", "Avery Walker",
            "--birthday", "1990-06-15",
        ])
        .assert()
        .success();
}

/// Helper: register the P1 Motor policy type on the given snapshot.
fn add_motor_type(data: &Path) {
    insurabook(data)
        .args([
            "policytype", "add", "--id", "P1", "--name", "Motor", "--premium", "120.00",
        ])
        .assert()
        .success();
}

/// Helper: issue a decade-long policy to walker-a, returning nothing;
/// the first policy on a fresh book is always PO0001.
fn add_walker_policy(data: &Path, limit: &str) {
    insurabook(data)
        .args([
            "policy", "add", "--client", "walker-a", "--type", "P1",
            "--effective", "2020-01-01", "--expiry", "2099-12-31", "--limit", limit,
        ])
        .assert()
        .success();
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    cargo_bin_cmd!("insurabook")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insurance book manager"));
}

#[test]
fn version_exits_0() {
    cargo_bin_cmd!("insurabook")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("insurabook"));
}

// ──────────────────────────────────────────────
// 2. First-run bootstrap
// ──────────────────────────────────────────────

#[test]
fn missing_snapshot_bootstraps_the_sample_book() {
    let dir = TempDir::new().unwrap();
    insurabook(&dir.path().join("absent.json"))
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Garcia"))
        .stdout(predicate::str::contains("Li Chen"))
        .stdout(predicate::str::contains("Sam Okafor"));
}

#[test]
fn reading_does_not_create_the_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    insurabook(&path).args(["client", "list"]).assert().success();
    assert!(!path.exists());
}

// ──────────────────────────────────────────────
// 3. Client commands
// ──────────────────────────────────────────────

#[test]
fn client_add_confirms_and_persists() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);

    insurabook(&data)
        .args([
            "client", "add", "--id", "walker-a", "--name", "Avery Walker",
            "--birthday", "1990-06-15", "--phone", "0295550117",
            "--email", "avery@example.com", "--tag", "vip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added client walker-a"));

    insurabook(&data)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("walker-a  Avery Walker  born 1990-06-15  [vip]"));
}

#[test]
fn duplicate_client_id_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);

    insurabook(&data)
        .args([
            "client", "add", "--id", "walker-a", "--name", "Another Walker",
            "--birthday", "1991-01-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Duplicate client id: walker-a"));
}

#[test]
fn client_show_prints_the_full_record() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);

    insurabook(&data)
        .args([
            "client", "add", "--id", "walker-a", "--name", "Avery Walker",
            "--birthday", "1990-06-15", "--address", "12 Harbor Street",
        ])
        .assert()
        .success();

    insurabook(&data)
        .args(["client", "show", "walker-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client walker-a"))
        .stdout(predicate::str::contains("address   12 Harbor Street"));
}

#[test]
fn client_show_unknown_id_exits_1() {
    let dir = TempDir::new().unwrap();
    insurabook(&empty_book(&dir))
        .args(["client", "show", "nobody"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No client with id: nobody"));
}

#[test]
fn client_find_matches_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);

    insurabook(&data)
        .args(["client", "find", "WALK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Avery Walker"));

    insurabook(&data)
        .args(["client", "find", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn client_delete_removes_the_record() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);

    insurabook(&data)
        .args(["client", "delete", "walker-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted client walker-a"));

    insurabook(&data)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_birthday_format_exits_1() {
    let dir = TempDir::new().unwrap();
    insurabook(&empty_book(&dir))
        .args([
            "client", "add", "--id", "walker-a", "--name", "Avery Walker",
            "--birthday", "15/06/1990",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date"));
}

// ──────────────────────────────────────────────
// 4. Policy type and policy commands
// ──────────────────────────────────────────────

#[test]
fn policytype_add_and_list() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);

    insurabook(&data)
        .args([
            "policytype", "add", "--id", "P1", "--name", "Motor",
            "--premium", "120.00", "--description", "third party and collision",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added policy type P1"));

    insurabook(&data)
        .args(["policytype", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P1  Motor  premium 120.00  third party and collision"));
}

#[test]
fn conflicting_policy_type_name_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_motor_type(&data);

    insurabook(&data)
        .args([
            "policytype", "add", "--id", "P2", "--name", "Motor", "--premium", "99.00",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Policy type conflicts with P1"));
}

#[test]
fn policy_add_mints_sequential_ids_across_processes() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);

    insurabook(&data)
        .args([
            "client", "add", "--id", "chen-l", "--name", "Li Chen",
            "--birthday", "1990-11-05",
        ])
        .assert()
        .success();

    insurabook(&data)
        .args([
            "policy", "add", "--client", "walker-a", "--type", "P1",
            "--effective", "2026-01-01", "--expiry", "2026-12-31", "--limit", "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issued policy PO0001"));

    insurabook(&data)
        .args([
            "policy", "add", "--client", "chen-l", "--type", "P1",
            "--effective", "2026-01-01", "--expiry", "2026-12-31", "--limit", "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issued policy PO0002"));

    // A deleted policy's number is never handed out again.
    insurabook(&data)
        .args(["policy", "delete", "PO0002"])
        .assert()
        .success();
    insurabook(&data)
        .args([
            "policy", "add", "--client", "chen-l", "--type", "P1",
            "--effective", "2027-01-01", "--expiry", "2027-12-31", "--limit", "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issued policy PO0003"));
}

#[test]
fn second_policy_for_the_same_pair_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);
    add_walker_policy(&data, "1000");

    insurabook(&data)
        .args([
            "policy", "add", "--client", "walker-a", "--type", "P1",
            "--effective", "2026-01-01", "--expiry", "2026-12-31", "--limit", "500",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already holds a policy of type P1"));
}

#[test]
fn inverted_coverage_window_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);

    insurabook(&data)
        .args([
            "policy", "add", "--client", "walker-a", "--type", "P1",
            "--effective", "2026-12-31", "--expiry", "2026-01-01", "--limit", "1000",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Coverage window is inverted"));
}

#[test]
fn policy_expiring_lists_only_the_near_window() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);

    let today = chrono::Local::now().date_naive();
    let soon = (today + chrono::Duration::days(2)).format("%Y-%m-%d").to_string();
    insurabook(&data)
        .args([
            "policy", "add", "--client", "walker-a", "--type", "P1",
            "--effective", "2020-01-01", "--expiry", &soon, "--limit", "1000",
        ])
        .assert()
        .success();

    insurabook(&data)
        .args([
            "client", "add", "--id", "chen-l", "--name", "Li Chen",
            "--birthday", "1990-11-05",
        ])
        .assert()
        .success();
    insurabook(&data)
        .args([
            "policy", "add", "--client", "chen-l", "--type", "P1",
            "--effective", "2020-01-01", "--expiry", "2099-12-31", "--limit", "1000",
        ])
        .assert()
        .success();

    insurabook(&data)
        .args(["policy", "expiring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PO0001"))
        .stdout(predicate::str::contains("PO0002").not());
}

// ──────────────────────────────────────────────
// 5. Claim commands
// ──────────────────────────────────────────────

#[test]
fn claim_lifecycle_files_lists_and_deletes() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);
    add_walker_policy(&data, "1000");

    insurabook(&data)
        .args([
            "claim", "add", "--client", "walker-a", "--policy", "PO0001",
            "--amount", "640.00", "--date", "2026-04-02",
            "--description", "rear bumper respray",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filed claim C0001"));

    insurabook(&data)
        .args(["claim", "list", "--policy", "PO0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C0001"))
        .stdout(predicate::str::contains("rear bumper respray"));

    insurabook(&data)
        .args(["claim", "delete", "C0001"])
        .assert()
        .success();
    insurabook(&data)
        .args(["claim", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn claim_over_the_remaining_cover_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);
    add_motor_type(&data);
    add_walker_policy(&data, "1000");

    insurabook(&data)
        .args([
            "claim", "add", "--client", "walker-a", "--policy", "PO0001",
            "--amount", "800", "--date", "2026-04-02",
        ])
        .assert()
        .success();

    insurabook(&data)
        .args([
            "claim", "add", "--client", "walker-a", "--policy", "PO0001",
            "--amount", "250", "--date", "2026-04-03",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the remaining cover"));
}

#[test]
fn claim_against_unknown_policy_exits_1() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);

    insurabook(&data)
        .args([
            "claim", "add", "--client", "walker-a", "--policy", "PO0009",
            "--amount", "10", "--date", "2026-04-02",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown policy: PO0009"));
}

// ──────────────────────────────────────────────
// 6. Output modes and configuration
// ──────────────────────────────────────────────

#[test]
fn json_output_serializes_the_entities() {
    let dir = TempDir::new().unwrap();
    let data = empty_book(&dir);
    add_walker(&data);

    let output = insurabook(&data)
        .args(["client", "list", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let clients: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(clients[0]["id"], "walker-a");
    assert_eq!(clients[0]["name"], "Avery Walker");
}

#[test]
fn quiet_suppresses_the_confirmation_line() {
    let dir = TempDir::new().unwrap();
    insurabook(&empty_book(&dir))
        .args([
            "client", "add", "--id", "walker-a", "--name", "Avery Walker",
            "--birthday", "1990-06-15", "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn data_file_env_var_is_honored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env-book.json");
    fs::write(&path, "{}").unwrap();

    let mut cmd = cargo_bin_cmd!("insurabook");
    cmd.env("INSURA_DATA_FILE", &path);
    cmd.env_remove("RUST_LOG");
    cmd.args([
        "client", "add", "--id", "walker-a", "--name", "Avery Walker",
        "--birthday", "1990-06-15",
    ])
    .assert()
    .success();

    let body = fs::read_to_string(&path).unwrap();
    assert!(body.contains("walker-a"));
}
