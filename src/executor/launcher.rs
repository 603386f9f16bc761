use std::ffi::{CString, c_char};
use std::ptr;

use nix::errno::Errno;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};

use super::executor::ExecOutcome;

/// Runs external programs in a forked child and waits for them.
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// `argv[0]` is looked up on `PATH`. The child's exit status never
    /// stops the shell.
    pub fn launch(&self, argv: &[&[u8]]) -> ExecOutcome {
        if argv.is_empty() {
            return ExecOutcome::Continue;
        }

        let c_args = match argv.iter().map(|arg| CString::new(*arg)).collect::<Result<Vec<_>, _>>() {
            Ok(args) => args,
            Err(e) => {
                eprintln!("boothshell: {}", e);
                return ExecOutcome::Continue;
            }
        };
        // Everything the child touches is allocated here, before fork.
        let c_argv: Vec<*const c_char> = c_args
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();

        // SAFETY: the child does not allocate or take locks. It only calls
        // signal, execvp, write and _exit on memory prepared above.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => exec_child(&c_argv),
            Ok(ForkResult::Parent { child }) => {
                log::debug!("spawned {} as pid {}", String::from_utf8_lossy(argv[0]), child);
                match wait_for_exit(child) {
                    Ok(status) => log::debug!("child finished: {:?}", status),
                    Err(errno) => eprintln!("boothshell: {}", errno.desc()),
                }
            }
            Err(errno) => eprintln!("boothshell: {}", errno.desc()),
        }

        ExecOutcome::Continue
    }
}

/// Replaces the forked child with the program. `c_argv` is NULL terminated.
fn exec_child(c_argv: &[*const c_char]) -> ! {
    // The Rust runtime ignores SIGPIPE; programs expect the default.
    // SAFETY: resetting to SIG_DFL installs no handler.
    let _ = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) };

    // SAFETY: c_argv[0] and the array stay alive in this process image
    // until execvp replaces it or we _exit.
    unsafe { libc::execvp(c_argv[0], c_argv.as_ptr()) };

    let reason = Errno::last().desc();
    write_stderr(b"boothshell: ");
    write_stderr(reason.as_bytes());
    write_stderr(b"\n");
    // SAFETY: _exit skips atexit handlers and stdio flushing.
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

fn write_stderr(bytes: &[u8]) {
    // SAFETY: write(2) on a borrowed buffer; a short or failed write is ignored.
    unsafe {
        libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
    }
}

/// Blocks until the child exits or is killed. Stopped or continued
/// children are not finished, so waiting goes on.
fn wait_for_exit(child: Pid) -> Result<WaitStatus, Errno> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(status @ (WaitStatus::Exited(..) | WaitStatus::Signaled(..))) => return Ok(status),
            Ok(other) => log::debug!("pid {} not finished yet: {:?}", child, other),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(errno),
        }
    }
}
