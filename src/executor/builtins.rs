use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::config::ShellConfig;
use crate::prompt::ShellPrompt;
use super::executor::ExecOutcome;

/// Builtin names in lookup and `help` order.
pub const BUILTIN_NAMES: [&str; 4] = ["cd", "help", "quit", "exit"];

pub trait BuiltinCommand {
    /// `args` excludes the command name.
    fn run(&self, args: &[&[u8]]) -> ExecOutcome;
}

struct BuiltinEntry {
    name: &'static str,
    command: Box<dyn BuiltinCommand>,
}

/// Fixed, ordered registry. Built once before the main loop and never changed.
pub struct BuiltinManager {
    commands: Vec<BuiltinEntry>,
}

impl BuiltinManager {
    pub fn new(config: &ShellConfig) -> Self {
        let commands = BUILTIN_NAMES
            .iter()
            .map(|&name| BuiltinEntry {
                name,
                command: Self::command_for(name, config),
            })
            .collect();
        BuiltinManager { commands }
    }

    fn command_for(name: &str, config: &ShellConfig) -> Box<dyn BuiltinCommand> {
        match name {
            "cd" => Box::new(CdCommand),
            "help" => Box::new(HelpCommand {
                prompt: ShellPrompt::new(&config.prompt, config.clear_screen),
            }),
            // `quit` shares `exit`'s action
            _ => Box::new(ExitCommand),
        }
    }

    /// Linear scan, exact match, first hit wins.
    pub fn find(&self, name: &[u8]) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|entry| entry.name.as_bytes() == name)
            .map(|entry| entry.command.as_ref())
    }

    #[cfg(test)]
    fn is_builtin(&self, name: &str) -> bool {
        self.find(name.as_bytes()).is_some()
    }

    #[cfg(test)]
    fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|entry| entry.name)
    }
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn run(&self, args: &[&[u8]]) -> ExecOutcome {
        match args.first() {
            None => {
                eprintln!("Booth Shell: Use \"cd\" to change directories, such as \"cd /usr/bin\"");
            }
            Some(target) => {
                if let Err(e) = std::env::set_current_dir(OsStr::from_bytes(target)) {
                    eprintln!("boothshell: {}", e);
                }
            }
        }
        ExecOutcome::Continue
    }
}

pub struct HelpCommand {
    prompt: ShellPrompt,
}

impl HelpCommand {
    fn write_help(out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Booth Shell")?;
        writeln!(out)?;
        writeln!(out, "Type program names and arguments, and hit enter.")?;
        writeln!(out)?;
        writeln!(out, "The following are built in:")?;
        writeln!(out)?;
        for name in BUILTIN_NAMES {
            writeln!(out, "  {}", name)?;
        }
        writeln!(out)?;
        writeln!(out, "Use the man command for information on other programs.")?;
        out.flush()
    }
}

impl BuiltinCommand for HelpCommand {
    fn run(&self, _args: &[&[u8]]) -> ExecOutcome {
        self.prompt.clear();
        if let Err(e) = Self::write_help(&mut io::stdout().lock()) {
            log::warn!("failed to print help: {}", e);
        }
        ExecOutcome::Continue
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn run(&self, _args: &[&[u8]]) -> ExecOutcome {
        ExecOutcome::Exit
    }
}
