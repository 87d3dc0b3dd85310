#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn utl() -> Command {
    cargo_bin_cmd!("utimeline")
}

/// Create a unique records directory inside the system temp dir and
/// remove any leftover from a previous run
pub fn setup_records_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_utimeline_records", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create records dir");
    path
}

/// Write a CSV data file with the standard header into `dir`
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from("id,user_name,begin_date,end_date\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small mixed dataset: two equipment groups, one open-ended loan
pub fn sample_rows() -> Vec<&'static str> {
    vec![
        "E2,carol,2024-01-05,2024-01-06",
        "E1,alice,2024-01-02,2024-01-03",
        "E1,bob,2024-01-01,",
    ]
}
