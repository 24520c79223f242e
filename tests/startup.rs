use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const VERTEX: &str = include_str!("../test_vs.glsl");
const FRAGMENT: &str = include_str!("../test_fs.glsl");

/// Runs the binary inside `dir`, with no config file reachable.
fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello-triangle"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .output()
        .expect("failed to spawn hello-triangle")
}

/// Returns the captured stderr, or `None` when the window or GL context
/// could not be created on this machine, so the shader files were never read.
fn shader_stage_stderr(output: &Output) -> Option<String> {
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if stderr.contains("SDL2") || stderr.contains("OpenGL:") {
        eprintln!("skipping: no usable display for an OpenGL window\n{stderr}");
        return None;
    }
    Some(stderr)
}

#[test]
fn test_exits_with_one_without_shader_files() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    let Some(stderr) = shader_stage_stderr(&output) else {
        return;
    };
    assert!(stderr.contains("test_vs.glsl"), "{stderr}");
}

#[test]
fn test_exits_with_one_when_second_fragment_is_missing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("test_vs.glsl"), VERTEX).unwrap();
    std::fs::write(dir.path().join("test_fs.glsl"), FRAGMENT).unwrap();
    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    let Some(stderr) = shader_stage_stderr(&output) else {
        return;
    };
    assert!(stderr.contains("test_fs2.glsl"), "{stderr}");
}

#[test]
fn test_exits_with_one_when_vertex_shader_is_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("test_vs.glsl"), "").unwrap();
    std::fs::write(dir.path().join("test_fs.glsl"), FRAGMENT).unwrap();
    std::fs::write(dir.path().join("test_fs2.glsl"), FRAGMENT).unwrap();
    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    let Some(stderr) = shader_stage_stderr(&output) else {
        return;
    };
    assert!(stderr.contains("test_vs.glsl"), "{stderr}");
    assert!(stderr.contains("file is empty"), "{stderr}");
}

#[test]
fn test_exits_with_one_on_invalid_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("hello_triangle.json"), "{ not json").unwrap();
    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config"), "{stderr}");
    assert!(stderr.contains("hello_triangle.json"), "{stderr}");
}
