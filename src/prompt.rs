use std::io::{self, IsTerminal, Write};
use std::process::Command;

const WELCOME: &str = "\
Welcome to Booth Shell.

Booth Shell is a very simplistic and lightweight shell.
Booth Shell does not contain many features you may be used to.
But it is very portable. Enjoy!
";

pub struct ShellPrompt {
    text: String,
    clear_screen: bool,
}

impl ShellPrompt {
    pub fn new(text: &str, clear_screen: bool) -> Self {
        ShellPrompt {
            text: text.to_string(),
            clear_screen,
        }
    }

    pub fn show_prompt(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self.text)?;
        stdout.flush()
    }

    pub fn show_banner(&self) -> io::Result<()> {
        self.clear();
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", WELCOME)?;
        stdout.flush()
    }

    /// Runs `tput clear`. Skipped when disabled or stdout is not a terminal.
    pub fn clear(&self) {
        if !self.clear_screen || !io::stdout().is_terminal() {
            return;
        }
        match Command::new("tput").arg("clear").status() {
            Ok(status) if !status.success() => log::debug!("tput clear exited with {}", status),
            Ok(_) => {}
            Err(e) => log::debug!("could not run tput: {}", e),
        }
    }
}
