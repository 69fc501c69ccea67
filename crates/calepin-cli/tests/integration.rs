//! Integration tests for calepin CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to the calepin binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates
    path.pop(); // workspace root

    // Try release first, then debug
    let release = path.join("target/release/calepin");
    if release.exists() {
        return release;
    }
    path.join("target/debug/calepin")
}

/// Write a plan JSON into the temp dir and return its path.
fn write_plan(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("calepin-test-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write plan file");
    path
}

/// 4m x 3m rectangle at 80 px/m, 100x60 cm tiles, no joint, start top-left.
const RECT_PLAN: &str = r#"{
    "points": [0, 0, 320, 0, 320, 240, 0, 240, 0, 0],
    "tileW": 100,
    "tileH": 60,
    "spacing": 0,
    "pattern": "straight",
    "orientation": 0,
    "startPoint": {"x": 0, "y": 0},
    "scale": 80
}"#;

#[test]
fn area_command_measures_rectangle() {
    let plan = write_plan("area.json", RECT_PLAN);
    let output = Command::new(binary_path())
        .args(["area", plan.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "12.00 m2");
}

#[test]
fn stats_command_counts_exact_grid() {
    let plan = write_plan("stats.json", RECT_PLAN);
    let output = Command::new(binary_path())
        .args(["stats", plan.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\"full\":20"), "got {}", stdout);
    assert!(stdout.contains("\"partial\":0"), "got {}", stdout);
    assert!(stdout.contains("\"total\":20"), "got {}", stdout);
}

#[test]
fn layout_command_produces_text_summary() {
    let plan = write_plan("text.json", RECT_PLAN);
    let output = Command::new(binary_path())
        .args(["layout", plan.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Area: 12.00 m2"), "got {}", stdout);
    assert!(stdout.contains("Full tiles: 20"), "got {}", stdout);
    assert!(stdout.contains("Start corner: top-left"), "got {}", stdout);
}

#[test]
fn layout_command_produces_svg() {
    let plan = write_plan("svg.json", RECT_PLAN);
    let output = Command::new(binary_path())
        .args(["layout", plan.to_str().unwrap(), "-f", "svg"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<rect"), "Should have tile rects");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn layout_command_produces_json() {
    let plan = write_plan("json.json", RECT_PLAN);
    let output = Command::new(binary_path())
        .args(["layout", plan.to_str().unwrap(), "-f", "json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\"area_m2\""), "got {}", stdout);
    assert!(stdout.contains("\"tiles\""), "got {}", stdout);
    assert!(stdout.contains("\"full\""), "got {}", stdout);
}

#[test]
fn layout_without_start_point_is_empty() {
    let plan = write_plan(
        "nostart.json",
        r#"{"points": [0, 0, 320, 0, 320, 240, 0, 240, 0, 0], "scale": 80}"#,
    );
    let output = Command::new(binary_path())
        .args(["stats", plan.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\"full\":0"), "got {}", stdout);
    assert!(stdout.contains("\"total\":0"), "got {}", stdout);
}

#[test]
fn malformed_plan_fails_with_message() {
    let plan = write_plan("bad.json", "this is not json");
    let output = Command::new(binary_path())
        .args(["layout", plan.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("plan parse error"), "got {}", stderr);
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(binary_path())
        .arg("frobnicate")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown command"), "got {}", stderr);
}

#[test]
fn no_args_prints_usage() {
    let output = Command::new(binary_path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "got {}", stdout);
}
