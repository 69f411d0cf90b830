//! End-to-end tests for the `pfm` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

fn write_rgb(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut bytes = b"PF\n2 1\n-1.0\n".to_vec();
    for v in [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

fn pfm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pfm"))
        .args(args)
        .output()
        .expect("failed to run pfm")
}

#[test]
fn info_lists_channels() {
    let dir = TempDir::new().unwrap();
    let path = write_rgb(dir.path(), "rgb.pfm");

    let out = pfm(&["info", path.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Resolution: 2x1"));
    assert!(stdout.contains("Channels:   R, G, B"));
}

#[test]
fn info_with_selector_and_stats() {
    let dir = TempDir::new().unwrap();
    let path = write_rgb(dir.path(), "rgb.pfm");

    let out = pfm(&["-j", "1", "info", path.to_str().unwrap(), "-c", "b,r", "--stats"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Channels:   B, R"));
    assert!(stdout.contains("max 6.000000"));
}

#[test]
fn info_json() {
    let dir = TempDir::new().unwrap();
    let path = write_rgb(dir.path(), "rgb.pfm");

    let out = pfm(&["info", path.to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"little_endian\": true"));
    assert!(stdout.contains("{\"name\": \"G\"}"));
}

#[test]
fn truncated_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"PF4\n4 4\n1.0\n\0\0\0\0").unwrap();

    let out = pfm(&["info", file.path().to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("truncated data: read 4 of 256 bytes"));
}

#[test]
fn probe_rejects_other_formats() {
    let dir = TempDir::new().unwrap();
    let good = write_rgb(dir.path(), "good.pfm");
    let bad = dir.path().join("bad.ppm");
    std::fs::write(&bad, b"P6\n1 1\n255\n\0\0\0").unwrap();

    let out = pfm(&["probe", good.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("good.pfm: PFM"));

    let out = pfm(&["probe", good.to_str().unwrap(), bad.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("bad.ppm: not PFM"));
}
