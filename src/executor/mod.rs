mod executor;
mod builtins;
mod launcher;

pub use executor::{Executor, ExecOutcome, DefaultExecutor};
pub use builtins::{BuiltinCommand, BuiltinManager, BUILTIN_NAMES};
pub use launcher::ProcessLauncher;
