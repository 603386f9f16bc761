mod common;

use common::*;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use tempfile::TempDir;

fn scratch() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_banner_and_prompt() {
    let dir = scratch();
    let output = run_shell("exit\n", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Welcome to Booth Shell.\n"));
    assert!(stdout.ends_with("> "));
}

#[test]
fn test_external_command_runs_and_loop_continues() {
    let dir = scratch();
    let output = run_shell("echo hello\nfalse\necho again\nexit\n", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("hello\n"));
    assert!(stdout.contains("again\n"));
}

#[test]
fn test_exit_stops_before_later_lines() {
    let dir = scratch();
    let output = run_shell("exit\necho after\n", dir.path());
    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("after"));
}

#[test]
fn test_quit_stops_before_later_lines() {
    let dir = scratch();
    let output = run_shell("quit\necho after\n", dir.path());
    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("after"));
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_end_of_input_discards_pending_line() {
    let dir = scratch();
    let output = run_shell("echo first\necho pending", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("first\n"));
    assert!(!stdout.contains("pending"));
}

#[test]
fn test_blank_lines_only_reprompt() {
    let dir = scratch();
    let output = run_shell("\n   \n\t\n", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("> ").count(), 4);
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_cd_changes_directory() {
    let dir = scratch();
    let target = scratch();
    let target_path = target.path().canonicalize().unwrap();
    let input = format!("cd {}\npwd\nexit\n", target_path.display());
    let output = run_shell(&input, dir.path());
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(&format!("{}\n", target_path.display())));
}

#[test]
fn test_cd_without_argument_prints_usage() {
    let dir = scratch();
    let start = dir.path().canonicalize().unwrap();
    let output = run_shell("cd\npwd\n", dir.path());
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("Use \"cd\" to change directories"));
    assert!(stdout_of(&output).contains(&format!("{}\n", start.display())));
}

#[test]
fn test_cd_to_missing_directory_reports_error() {
    let dir = scratch();
    let start = dir.path().canonicalize().unwrap();
    let output = run_shell("cd /nonexistent/booth\npwd\n", dir.path());
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("boothshell: "));
    assert!(stdout_of(&output).contains(&format!("{}\n", start.display())));
}

#[test]
fn test_help_lists_builtins() {
    let dir = scratch();
    let output = run_shell("help\n", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("The following are built in:"));
    assert!(stdout.contains("  cd\n  help\n  quit\n  exit\n"));
}

#[test]
fn test_unknown_program_reports_and_continues() {
    let dir = scratch();
    let output = run_shell("booth-shell-no-such-program\necho still here\n", dir.path());
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("boothshell: "));
    assert!(stdout_of(&output).contains("still here\n"));
}

#[test]
fn test_line_longer_than_buffer_increment() {
    let dir = scratch();
    let long = "x".repeat(3000);
    let output = run_shell(&format!("echo {} tail\n", long), dir.path());
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(&format!("{} tail\n", long)));
}

#[test]
fn test_many_arguments() {
    let dir = scratch();
    let args: Vec<String> = (0..200).map(|i| i.to_string()).collect();
    let output = run_shell(&format!("echo {}\n", args.join("  ")), dir.path());
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(&format!("{}\n", args.join(" "))));
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_external_program_gets_default_sigpipe() {
    let dir = scratch();
    let output = run_shell("grep SigIgn /proc/self/status\n", dir.path());
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let mask = stdout
        .lines()
        .find_map(|l| l.strip_prefix("SigIgn:"))
        .map(|m| u64::from_str_radix(m.trim(), 16).unwrap())
        .expect("grep printed the SigIgn line");
    // SIGPIPE is signal 13, bit 12 of the mask
    assert_eq!(mask & (1 << 12), 0, "SIGPIPE ignored in child: {:x}", mask);
}

#[test]
fn test_non_utf8_arguments_reach_program_unchanged() {
    let dir = scratch();
    let output = run_shell_bytes(b"printf %s \xff\xfe\n", dir.path());
    assert!(output.status.success());
    assert!(contains_bytes(&output.stdout, b"\xff\xfe"));
    assert!(!contains_bytes(&output.stdout, "\u{FFFD}".as_bytes()));
}

#[test]
fn test_cd_into_non_utf8_directory() {
    let dir = scratch();
    let name: &[u8] = b"booth\xff";
    std::fs::create_dir(dir.path().join(OsStr::from_bytes(name))).unwrap();
    let start = dir.path().canonicalize().unwrap();

    let mut input = b"cd ".to_vec();
    input.extend_from_slice(name);
    input.extend_from_slice(b"\npwd\n");
    let output = run_shell_bytes(&input, dir.path());

    assert!(output.status.success());
    assert!(stderr_of(&output).is_empty());
    let mut expected = start.as_os_str().as_bytes().to_vec();
    expected.push(b'/');
    expected.extend_from_slice(name);
    expected.push(b'\n');
    assert!(contains_bytes(&output.stdout, &expected));
}
