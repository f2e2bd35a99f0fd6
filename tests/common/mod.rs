//! Shared test utilities and fixtures
//!
//! Helpers for running the built `bazinga` binary in isolation from the
//! caller's environment and home directory config.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Write a config file into a fresh temporary directory.
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

/// Build a command for the binary with overrides cleared and an explicit config.
pub fn bazinga(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bazinga"));
    cmd.env_remove("BAZINGA_VOWELS")
        .env_remove("BAZINGA_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

/// Build a command that resolves its config under `home` instead of the real home.
pub fn bazinga_with_home(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bazinga"));
    cmd.env_remove("BAZINGA_VOWELS")
        .env_remove("BAZINGA_LOG")
        .env("HOME", home);
    cmd
}

/// Run `cmd` with `stdin` piped in and collect its output.
pub fn run_with_stdin(mut cmd: Command, stdin: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bazinga");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for bazinga")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
