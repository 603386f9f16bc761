use std::io::BufRead;

use crate::error::ShellError;
use crate::executor::{ExecOutcome, Executor};
use crate::io::{InputHandler, ReadOutcome};
use crate::prompt::ShellPrompt;
use crate::tokenizer;

/// Why the loop ended. Both are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    Stopped,
    EndOfInput,
}

pub struct Repl<R, E> {
    input: InputHandler<R>,
    prompt: ShellPrompt,
    executor: E,
}

impl<R: BufRead, E: Executor> Repl<R, E> {
    pub fn new(input: R, prompt: ShellPrompt, executor: E) -> Self {
        Repl {
            input: InputHandler::new(input),
            prompt,
            executor,
        }
    }

    /// prompt, read, tokenize, dispatch; until a builtin asks to stop or
    /// input runs out.
    pub fn run(&mut self) -> Result<ReplExit, ShellError> {
        loop {
            self.prompt.show_prompt()?;

            let line = match self.input.read_line()? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::EndOfInput => {
                    log::debug!("end of input");
                    return Ok(ReplExit::EndOfInput);
                }
            };

            let tokens = tokenizer::tokenize(&line)?;
            if self.executor.exec(&tokens) == ExecOutcome::Exit {
                return Ok(ReplExit::Stopped);
            }
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}
