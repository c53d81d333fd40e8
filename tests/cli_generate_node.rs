//! NODE scenario: no services, no port override.

use std::process::Command;

#[test]
fn test_node_defaults_write_dockerfile_entry_points() {
    let bin = env!("CARGO_BIN_EXE_dockgen");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .args(["generate", "--name", "Sample", "--platform", "NODE", "--dest"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for file in ["cli-config.yml", "Dockerfile", "Dockerfile-tools", ".dockerignore"] {
        assert!(dir.path().join(file).exists(), "{file} should exist");
    }
    assert!(!dir.path().join("docker-compose.yml").exists());
    assert!(!dir.path().join("docker-compose-tools.yml").exists());

    // Default port baked into the Dockerfile
    let dockerfile = std::fs::read_to_string(dir.path().join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("3000"));

    let cli_config = std::fs::read_to_string(dir.path().join("cli-config.yml")).unwrap();
    assert!(cli_config.contains("sample-express-run"));
    assert!(cli_config.contains("dockerfile-run: \"Dockerfile\""));
}

#[test]
fn test_node_port_override_is_used_verbatim() {
    let bin = env!("CARGO_BIN_EXE_dockgen");
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(bin)
        .args([
            "generate", "--name", "Sample", "--platform", "NODE", "--port", "4500", "--dest",
        ])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let dockerfile = std::fs::read_to_string(dir.path().join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("4500"));
    let cli_config = std::fs::read_to_string(dir.path().join("cli-config.yml")).unwrap();
    assert!(cli_config.contains("4500:4500"));
}
