//! Shared helpers for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use chipchip_testing::TestWorld;

/// A `chipchip --demo` command pointed at `world`.
pub fn demo_cmd(world: &TestWorld) -> Command {
    let mut cmd = cargo_bin_cmd!("chipchip");
    world.configure_command(&mut cmd);
    cmd.arg("--demo");
    cmd
}

/// Address that refuses connections, for exercising network failures.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api/v1";

pub fn long_chirp(len: usize) -> String {
    "x".repeat(len)
}
