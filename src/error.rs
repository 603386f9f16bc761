use std::io;
use thiserror::Error;

/// Failures that end the shell. Anything a user can recover from is
/// reported where it happens and never reaches this type.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Booth Shell: allocation error")]
    Allocation { buffer: &'static str },
    #[error("Booth Shell: {0}")]
    Io(#[from] io::Error),
}
