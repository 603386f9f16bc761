use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

pub fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_boothshell")
}

/// Feeds `input` to the shell on stdin and collects everything it printed.
pub fn run_shell(input: &str, cwd: &Path) -> Output {
    run_shell_bytes(input.as_bytes(), cwd)
}

pub fn run_shell_bytes(input: &[u8], cwd: &Path) -> Output {
    let mut child = Command::new(binary_path())
        .arg("--no-clear")
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start shell");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for shell")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
