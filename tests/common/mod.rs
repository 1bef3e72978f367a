#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn notekeep_cmd(data_dir: &Path) -> Command {
    let mut cmd = bare_cmd();
    cmd.env("NOTEKEEP_DIR", data_dir);
    cmd
}

pub fn bare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notekeep").unwrap();
    cmd.env_remove("NOTEKEEP_DIR");
    cmd.env_remove("NOTEKEEP_LOG");
    // Never pick up the developer's own config file
    cmd.env("NOTEKEEP_CONFIG", "/nonexistent/notekeep/config.toml");
    cmd
}
