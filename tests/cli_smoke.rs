use assert_cmd::prelude::*;
use chrono::{Duration, Local, NaiveTime};
use githeat::git::GixHistory;
use githeat::model::Today;
use githeat::stats::aggregate;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "user.email", "a@x.com"]);
    git(dir, &["config", "user.name", "A"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Commit at noon local time `days_ago` days before today, authored by `email`.
fn commit_on(dir: &Path, email: &str, days_ago: i64) {
    let day = Local::now().date_naive() - Duration::days(days_ago);
    let noon = day
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .and_local_timezone(Local)
        .earliest()
        .unwrap()
        .to_rfc3339();

    assert!(Command::new("git")
        .args(["commit", "--allow-empty", "-m", &format!("{days_ago} days ago")])
        .env("GIT_AUTHOR_EMAIL", email)
        .env("GIT_AUTHOR_DATE", &noon)
        .env("GIT_COMMITTER_DATE", &noon)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn store_lines(store: &Path) -> Vec<String> {
    fs::read_to_string(store)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn scan_registers_repositories_once() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let root = dir.path().canonicalize().unwrap().join("src");
    init_git_repo(&root.join("alpha"));
    init_git_repo(&root.join("nested/beta"));
    init_git_repo(&root.join("node_modules/dep"));
    init_git_repo(&root.join("beta-vendor/vendor/lib"));
    let store = dir.path().join("repos");

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("githeat").unwrap();
        cmd.arg("--folder")
            .arg(&root)
            .arg("--store")
            .arg(&store);
        cmd.assert().success();
    }

    let expected: Vec<String> = ["alpha", "nested/beta"]
        .iter()
        .map(|p| root.join(p).to_string_lossy().into_owned())
        .collect();
    assert_eq!(store_lines(&store), expected);
}

#[test]
fn scan_keeps_previously_known_paths() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let root = dir.path().canonicalize().unwrap().join("src");
    init_git_repo(&root.join("alpha"));
    let store = dir.path().join("repos");
    fs::write(&store, "/elsewhere/old").unwrap();

    let mut cmd = Command::cargo_bin("githeat").unwrap();
    cmd.arg("--folder").arg(&root).arg("--store").arg(&store);
    cmd.assert().success();

    assert_eq!(
        store_lines(&store),
        vec![
            "/elsewhere/old".to_string(),
            root.join("alpha").to_string_lossy().into_owned()
        ]
    );
}

#[test]
fn stats_prints_counts_for_email() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let root = dir.path().canonicalize().unwrap().join("src");
    let repo = root.join("alpha");
    init_git_repo(&repo);
    commit_on(&repo, "a@x.com", 0);
    commit_on(&repo, "a@x.com", 0);
    commit_on(&repo, "other@x.com", 0);
    let store = dir.path().join("repos");

    let mut cmd = Command::cargo_bin("githeat").unwrap();
    cmd.arg("--folder")
        .arg(&root)
        .arg("--email")
        .arg("a@x.com")
        .arg("--store")
        .arg(&store);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("  2 "), "{text}");
    assert!(!text.contains("  3 "), "{text}");
}

#[test]
fn no_flags_renders_empty_grid() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("repos");

    let mut cmd = Command::cargo_bin("githeat").unwrap();
    cmd.arg("--store").arg(&store);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows.len(), 7);
    for row in rows {
        assert_eq!(row[5..].matches("  - ").count(), 28, "{row}");
    }
    assert!(!store.exists());
}

#[test]
fn rust_log_directives_do_not_stop_the_run() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("repos");

    for directive in ["githeat=debug", "info,gix=off", "not a filter=="] {
        let mut cmd = Command::cargo_bin("githeat").unwrap();
        cmd.env("RUST_LOG", directive).arg("--store").arg(&store);
        let out = cmd.assert().success().get_output().stdout.clone();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().skip(1).count(), 7, "RUST_LOG={directive}");
    }
}

#[test]
fn broken_repository_in_store_is_skipped() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("alpha");
    init_git_repo(&repo);
    commit_on(&repo, "a@x.com", 3);
    let store = dir.path().join("repos");
    fs::write(
        &store,
        format!("{}\n{}", dir.path().join("gone").display(), repo.display()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("githeat").unwrap();
    cmd.arg("--email").arg("a@x.com").arg("--store").arg(&store);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  1 "), "{text}");
}

#[test]
fn aggregates_today_yesterday_and_old_commits() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("alpha");
    init_git_repo(&repo);
    commit_on(&repo, "a@x.com", 200);
    commit_on(&repo, "a@x.com", 1);
    commit_on(&repo, "a@x.com", 0);

    let repositories: Vec<PathBuf> = vec![repo];
    let counts = aggregate("a@x.com", &repositories, &GixHistory, Today::now());

    assert_eq!(counts.get(0), Some(1));
    assert_eq!(counts.get(1), Some(1));
    assert_eq!(counts.total(), 2);
}

#[test]
fn unborn_head_contributes_nothing() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("empty");
    init_git_repo(&repo);

    let counts = aggregate("a@x.com", &[repo], &GixHistory, Today::now());
    assert_eq!(counts.total(), 0);
}
