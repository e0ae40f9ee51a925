use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MISSING_PROGRAM: &str = "wlankey-test-missing-netsh";

fn wlankey() -> Command {
    let mut cmd = Command::cargo_bin("wlankey").unwrap();
    cmd.env_remove("WLANKEY_TIMEOUT_SECS")
        .env_remove("WLANKEY_LOG")
        .env("WLANKEY_NETSH", MISSING_PROGRAM);
    cmd
}

#[test]
fn missing_utility_prints_empty_plain_report() {
    wlankey()
        .assert()
        .success()
        .stdout(":: Stored Wi-Fi Passwords ::\n\nNo Wi-Fi profiles found.\n");
}

#[test]
fn missing_utility_prints_empty_json_report() {
    let output = wlankey()
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["entries"], serde_json::json!([]));
}

#[test]
fn output_file_defaults_to_block_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wifi.txt");

    wlankey()
        .args(["show", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "```\nStored Wi-Fi Profiles:\n\nNo Wi-Fi profiles found.\n```\n"
    );
}

#[test]
fn metadata_header_in_block_format() {
    wlankey()
        .args(["show", "--format", "block", "--with-metadata", "--note", "own laptop"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("```\nWi-Fi Profile Report\nTimestamp: "))
        .stdout(predicate::str::contains("Note: own laptop\n"));
}

#[test]
fn note_requires_metadata_flag() {
    wlankey()
        .args(["show", "--note", "x"])
        .assert()
        .failure();
}

#[test]
fn unknown_format_is_rejected() {
    wlankey()
        .args(["show", "--format", "webhook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("webhook"));
}

#[test]
fn list_with_missing_utility_reports_on_stderr() {
    wlankey()
        .arg("list")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No Wi-Fi profiles found."));
}

#[test]
fn invalid_timeout_environment_fails() {
    wlankey()
        .env("WLANKEY_TIMEOUT_SECS", "later")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WLANKEY_TIMEOUT_SECS"));
}

#[cfg(unix)]
mod with_fake_utility {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    const SCRIPT: &str = r#"#!/bin/sh
if [ "$3" = "profiles" ]; then
  printf 'Profiles on interface Wi-Fi:\n\nUser profiles\n-------------\n'
  printf '    All User Profile     : HomeWifi\n'
  printf '    All User Profile     : CafeOpen\n'
  printf '    All User Profile     : Gone\n'
  exit 0
fi
case "$4" in
  name=HomeWifi)
    printf '    Authentication         : WPA2-Personal\n'
    printf '    Security key           : Present\n'
    printf '    Key Content            : s3cr3t\n'
    ;;
  name=CafeOpen)
    printf '    Authentication         : Open\n'
    printf '    Security key           : Absent\n'
    ;;
  *)
    echo 'Profile "Gone" is not found on the system.'
    exit 1
    ;;
esac
"#;

    fn fake_netsh(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("fake-netsh");
        fs::write(&path, SCRIPT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn full_report_keeps_enumeration_order() {
        let temp_dir = TempDir::new().unwrap();
        let netsh = fake_netsh(&temp_dir);

        wlankey()
            .arg("--netsh")
            .arg(&netsh)
            .assert()
            .success()
            .stdout(
                ":: Stored Wi-Fi Passwords ::\n\
                 \n\
                 Wi-Fi Profile: HomeWifi\n\
                 Password: s3cr3t\n\
                 \n\
                 Wi-Fi Profile: CafeOpen\n\
                 Password: Open network - no password\n\
                 \n\
                 Wi-Fi Profile: Gone\n\
                 Password: Access denied - run as administrator\n",
            );
    }

    #[test]
    fn block_report_embeds_failure_detail_and_authentication() {
        let temp_dir = TempDir::new().unwrap();
        let netsh = fake_netsh(&temp_dir);

        wlankey()
            .env("WLANKEY_NETSH", &netsh)
            .args(["show", "--format", "block", "--auth"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Profile: HomeWifi\nPassword: s3cr3t\nAuthentication: WPA2-Personal\n",
            ))
            .stdout(predicate::str::contains(
                "Profile: Gone\nPassword: Access denied: command",
            ))
            .stdout(predicate::str::contains("is not found on the system."));
    }

    #[test]
    fn profile_filter_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let netsh = fake_netsh(&temp_dir);

        wlankey()
            .env("WLANKEY_NETSH", &netsh)
            .args(["show", "--profile", "CafeOpen"])
            .assert()
            .success()
            .stdout(
                ":: Stored Wi-Fi Passwords ::\n\nWi-Fi Profile: CafeOpen\nPassword: Open network - no password\n",
            );

        wlankey()
            .env("WLANKEY_NETSH", &netsh)
            .arg("list")
            .assert()
            .success()
            .stdout("HomeWifi\nCafeOpen\nGone\n");
    }
}
