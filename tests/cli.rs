use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env("CONTACT_BOOK_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, name: &str, phone: &str, email: &str) {
    contacts(dir)
        .args(["add", name, phone, email])
        .assert()
        .success();
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["add", "ann lee", "5551234567", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added contact: Ann Lee <ann@x.com> (5551234567)",
        ));

    contacts(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Ann Lee | 5551234567 | ann@x.com |"))
        .stdout(predicate::str::contains("1 contact"));

    assert!(dir.path().join("contacts.csv").exists());
}

#[test]
fn list_empty_book() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn search_by_prefix_phone_and_email() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Alice", "5551234567", "alice@x.com");
    add(&dir, "Bob", "5559876543", "bob@y.com");

    contacts(&dir)
        .args(["search", "al"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob").not());

    contacts(&dir)
        .args(["search", "987"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Alice").not());

    contacts(&dir)
        .args(["find", "Y.COM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));

    contacts(&dir)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found for: zzz"));
}

#[test]
fn delete_removes_all_matches() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Sam", "5550000001", "sam1@x.com");
    add(&dir, "sam", "5550000002", "sam2@x.com");
    add(&dir, "Sara", "5550000003", "sara@x.com");

    contacts(&dir)
        .args(["delete", "SAM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sam1@x.com"))
        .stdout(predicate::str::contains("sam2@x.com"));

    contacts(&dir)
        .args(["search", "sa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sara"))
        .stdout(predicate::str::contains("1 contact"));
}

#[test]
fn delete_unknown_fails() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["rm", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found: nobody"));
}

#[test]
fn invalid_phone_is_rejected() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["add", "Ann", "12345", "ann@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone '12345'"));

    contacts(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn invalid_email_is_rejected() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .args(["add", "Ann", "5551234567", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "5551234567", "ann@x.com");

    contacts(&dir)
        .args(["delete", "ann"])
        .assert()
        .success();

    contacts(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Ann"))
        .stdout(predicate::str::contains("DELETE Ann"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("contacts.csv").exists());

    contacts(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search debounce:   1000 ms"));
}

#[test]
fn dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    contacts(&env_dir)
        .arg("--dir")
        .arg(flag_dir.path())
        .args(["add", "Ann", "5551234567", "ann@x.com"])
        .assert()
        .success();

    assert!(flag_dir.path().join("contacts.csv").exists());
    assert!(!env_dir.path().join("contacts.csv").exists());
}

#[test]
fn menu_reads_stdin() {
    let dir = TempDir::new().unwrap();

    contacts(&dir)
        .arg("menu")
        .write_stdin("2\nbo diddley\n5551112222\nbo@d.com\n4\nbo\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Bo Diddley"))
        .stdout(predicate::str::contains("| Bo Diddley | 5551112222 | bo@d.com |"))
        .stdout(predicate::str::contains("Exiting..."));
}
