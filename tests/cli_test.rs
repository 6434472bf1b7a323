// file: tests/cli_test.rs
// version: 1.0.0
// guid: 4b8e2f60-1c9d-4a73-8e25-b7f03d6a91c4

//! End-to-end tests for the aoe-volumes binary in fake mode

use assert_cmd::Command;
use predicates::prelude::*;

fn aoe_volumes() -> Command {
    let mut cmd = Command::cargo_bin("aoe-volumes").unwrap();
    cmd.env_remove("AOE_RECOVERY_DELAY_SECS")
        .env_remove("AOE_VOLUME_GROUP")
        .env_remove("AOE_ETH_DEV")
        .env_remove("AOE_ROOT_HELPER")
        .env_remove("AOE_VOLUMES_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .env("HOME", "/nonexistent");
    cmd
}

#[test]
fn test_fake_create_volume() {
    aoe_volumes()
        .args(["--fake", "create-volume", "v1", "--size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAKE AOE: vgs nova-volumes"))
        .stdout(predicate::str::contains(
            "FAKE AOE: sudo lvcreate -L 5G -n v1 nova-volumes",
        ));
}

#[test]
fn test_fake_flags_override_defaults() {
    aoe_volumes()
        .args([
            "--fake",
            "--volume-group",
            "vg0",
            "--aoe-eth-dev",
            "eth1",
            "--root-helper",
            "",
            "create-export",
            "data",
            "--shelf",
            "2",
            "--blade",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "FAKE AOE: vblade-persist setup 2 3 eth1 /dev/vg0/data",
        ));
}

#[test]
fn test_fake_ensure_exports() {
    aoe_volumes()
        .args(["--fake", "ensure-exports"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "FAKE AOE: sleep 2\nFAKE AOE: sudo vblade-persist auto all\nFAKE AOE: sudo vblade-persist start all",
        ));
}

#[test]
fn test_invalid_volume_name_fails() {
    aoe_volumes()
        .args(["--fake", "delete-volume", "v1;reboot"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAKE AOE").not())
        .stderr(predicate::str::contains("Validation error").count(1));
}

#[test]
fn test_show_config_json() {
    aoe_volumes()
        .env("AOE_VOLUME_GROUP", "vg-env")
        .args(["show-config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"volume_group\": \"vg-env\""))
        .stdout(predicate::str::contains("\"aoe_eth_dev\": \"eth0\""));
}

#[test]
fn test_missing_subcommand_fails() {
    aoe_volumes().assert().failure();
}
