#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rgl() -> Command {
    cargo_bin_cmd!("rgallery")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rgallery.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Activity log path next to the test DB, removed beforehand
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rgallery_activity.log", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command preloaded with `--db` and `--activity-log`
pub fn rgl_with(db_path: &str, log_path: &str) -> Command {
    let mut cmd = rgl();
    cmd.args(["--db", db_path, "--activity-log", log_path]);
    cmd
}

pub fn add_artwork(db_path: &str, log_path: &str, title: &str, artist: &str, year: &str, price: &str) {
    rgl_with(db_path, log_path)
        .args([
            "add", "--title", title, "--artist", artist, "--year", year, "--style", "Oil",
            "--price", price,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str, log_path: &str) {
    rgl_with(db_path, log_path)
        .args(["--test", "init"])
        .assert()
        .success();

    add_artwork(db_path, log_path, "Picture 1", "Artist 1", "2000", "1000");
    add_artwork(db_path, log_path, "Picture 2", "Artist 2", "2001", "2000");
    add_artwork(db_path, log_path, "Picture 3", "Artist 3", "2002", "3000");
}
