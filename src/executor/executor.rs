use crate::config::ShellConfig;
use crate::tokenizer::TokenList;
use super::builtins::BuiltinManager;
use super::launcher::ProcessLauncher;

/// Continuation flag handed back to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    Continue,
    Exit,
}

pub trait Executor {
    fn exec(&mut self, tokens: &TokenList<'_>) -> ExecOutcome;
}

/// Builtins first, then an external program.
pub struct DefaultExecutor {
    builtins: BuiltinManager,
    launcher: ProcessLauncher,
}

impl DefaultExecutor {
    pub fn new(config: &ShellConfig) -> Self {
        DefaultExecutor {
            builtins: BuiltinManager::new(config),
            launcher: ProcessLauncher,
        }
    }
}

impl Executor for DefaultExecutor {
    fn exec(&mut self, tokens: &TokenList<'_>) -> ExecOutcome {
        let Some(name) = tokens.command() else {
            return ExecOutcome::Continue;
        };

        if let Some(builtin) = self.builtins.find(name) {
            log::debug!("running builtin {}", String::from_utf8_lossy(name));
            return builtin.run(tokens.args());
        }

        log::debug!("launching external program {}", String::from_utf8_lossy(name));
        self.launcher.launch(tokens.as_slice())
    }
}
