pub mod buffer;
pub mod config;
pub mod error;
pub mod executor;
pub mod io;
pub mod prompt;
pub mod repl;
pub mod tokenizer;
