//! Integration tests for the rigup CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

/// A command with the CI selector environment scrubbed, so assertions don't
/// depend on where the tests themselves run.
fn rigup() -> Command {
    let mut cmd = Command::new(cargo_bin("rigup"));
    cmd.env_remove("TRAVIS_OS_NAME");
    cmd.env_remove("TRAVIS_PYTHON_VERSION");
    cmd.env_remove("RUST_LOG");
    cmd.env("CI", "true");
    cmd
}

#[test]
fn cli_shows_help() {
    rigup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CI dependency provisioning"));
}

#[test]
fn cli_shows_version() {
    rigup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn plan_linux_legacy_includes_coverage_tools() {
    rigup()
        .args(["plan", "--os", "linux", "--python", "2.7", "--no-sudo"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("add-apt-repository -y ppa:gift/dev")
                .and(predicate::str::contains("python-coverage"))
                .and(predicate::str::contains("libewf-python "))
                .and(predicate::str::contains("python-mock")),
        );
}

#[test]
fn plan_linux_current_excludes_coverage_tools() {
    rigup()
        .args(["plan", "--os", "linux", "--python", "3.8", "--no-sudo"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("libewf-python3")
                .and(predicate::str::contains("python-coverage").not()),
        );
}

#[test]
fn plan_macos_shows_mount_install_unmount_triads() {
    rigup()
        .args(["plan", "--os", "osx", "--no-sudo"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("git clone --branch dev")
                .and(predicate::str::contains("hdiutil attach"))
                .and(predicate::str::contains("installer -target /"))
                .and(predicate::str::contains("hdiutil detach")),
        );
}

#[test]
fn plan_json_is_machine_readable() {
    let output = rigup()
        .args(["plan", "--os", "linux", "--python", "2.7", "--json", "--no-sudo"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["platform"], "linux");
    assert_eq!(plan["python"], "python2");
    let commands = plan["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 4);
    assert!(commands[3]["command"]
        .as_str()
        .unwrap()
        .contains("apt-get install -y"));
}

#[test]
fn plan_respects_binaries_overrides() {
    rigup()
        .args([
            "plan",
            "--os",
            "osx",
            "--no-sudo",
            "--binaries-repo",
            "https://example.com/bundles.git",
            "--binaries-branch",
            "stable",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://example.com/bundles.git")
                .and(predicate::str::contains("--branch stable")),
        );
}

#[test]
fn provision_unknown_os_warns_and_exits_zero() {
    rigup()
        .args(["provision", "--os", "freebsd"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No provisioning procedure"));
}

#[test]
fn provision_unknown_os_fails_in_strict_mode() {
    rigup()
        .args(["provision", "--os", "freebsd", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported platform: freebsd"));
}

#[test]
fn provision_dry_run_prints_without_executing() {
    rigup()
        .args([
            "provision",
            "--os",
            "linux",
            "--python",
            "3.8",
            "--dry-run",
            "--no-sudo",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("dry-run mode")
                .and(predicate::str::contains("apt-get install -y")),
        );
}

#[test]
fn default_command_is_provision() {
    // No subcommand, unknown OS from the environment: the default dispatch
    // path resolves to provision and no-ops.
    rigup()
        .env("TRAVIS_OS_NAME", "freebsd")
        .assert()
        .success()
        .stderr(predicate::str::contains("No provisioning procedure"));
}

#[test]
fn selector_environment_variables_are_honored() {
    rigup()
        .env("TRAVIS_OS_NAME", "osx")
        .args(["plan", "--no-sudo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hdiutil attach"));
}

#[test]
fn quiet_mode_suppresses_the_noop_warning() {
    rigup()
        .args(["--quiet", "provision", "--os", "freebsd"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_shows_resolved_sets() {
    rigup()
        .args(["list", "--os", "linux", "--python", "2.7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("coverage")
                .and(predicate::str::contains("python2-runtime"))
                .and(predicate::str::contains("libqcow-python")),
        );
}

#[test]
fn list_json_round_trips() {
    let output = rigup()
        .args(["list", "--os", "linux", "--python", "3.8", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let sets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sets = sets.as_array().unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["name"], "python3-runtime");
    assert_eq!(sets[0]["category"], "runtime");
}

#[test]
fn completions_generates_a_script() {
    rigup()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rigup"));
}
