use std::process::ExitCode;

use clap::Parser;

use booth_shell::config::{Args, ShellConfig};
use booth_shell::error::ShellError;
use booth_shell::executor::DefaultExecutor;
use booth_shell::prompt::ShellPrompt;
use booth_shell::repl::Repl;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = ShellConfig::from_args(&args);
    let prompt = ShellPrompt::new(&config.prompt, config.clear_screen);
    if let Err(e) = prompt.show_banner() {
        eprintln!("{}", ShellError::from(e));
        return ExitCode::FAILURE;
    }

    let executor = DefaultExecutor::new(&config);
    let mut repl = Repl::new(std::io::stdin().lock(), prompt, executor);

    match repl.run() {
        Ok(reason) => {
            log::debug!("shell finished: {:?}", reason);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let ShellError::Allocation { buffer } = &e {
                log::error!("could not grow the {} buffer", buffer);
            }
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
