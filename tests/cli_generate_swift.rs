//! SWIFT scenarios: compilation options gate the .swift-*-linux files.

use std::process::Command;

#[test]
fn test_swift_bound_service_writes_build_and_test_files() {
    let bin = env!("CARGO_BIN_EXE_dockgen");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .args([
            "generate", "--name", "Server", "--platform", "SWIFT", "--bind", "cloudant", "--dest",
        ])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let build = std::fs::read_to_string(dir.path().join(".swift-build-linux")).unwrap();
    assert!(build.contains("-DGENERATE_CLOUDANT"));
    let test = std::fs::read_to_string(dir.path().join(".swift-test-linux")).unwrap();
    assert!(test.contains("-DGENERATE_CLOUDANT"));
}

#[test]
fn test_swift_without_binding_suppresses_build_and_test_files() {
    let bin = env!("CARGO_BIN_EXE_dockgen");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .args(["generate", "--name", "Server", "--platform", "SWIFT", "--dest"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    assert!(!dir.path().join(".swift-build-linux").exists());
    assert!(!dir.path().join(".swift-test-linux").exists());
    assert!(dir.path().join("Dockerfile").exists());
}

#[test]
fn test_swift_fixed_port_and_raw_executable_name() {
    let bin = env!("CARGO_BIN_EXE_dockgen");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .args(["generate", "--name", "My Server", "--platform", "SWIFT", "--dest"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let cli_config = std::fs::read_to_string(dir.path().join("cli-config.yml")).unwrap();
    assert!(cli_config.contains("8080:8080"));
    assert!(cli_config.contains("myserver-swift-run"));

    // Executable name keeps the raw project name
    let dockerfile = std::fs::read_to_string(dir.path().join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("My Server"));
}
