pub mod input;

pub use input::{InputHandler, ReadOutcome};
