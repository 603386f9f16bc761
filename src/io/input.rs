use std::io::{self, BufRead};

use crate::buffer::GrowableBuffer;
use crate::error::ShellError;

pub const LINE_BUFFER_INCREMENT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Raw bytes of one line, without its trailing newline.
    Line(Vec<u8>),
    /// The stream closed. Any unterminated text is dropped.
    EndOfInput,
}

pub struct InputHandler<R> {
    reader: R,
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        InputHandler { reader }
    }

    pub fn read_line(&mut self) -> Result<ReadOutcome, ShellError> {
        let mut buffer = GrowableBuffer::with_increment(LINE_BUFFER_INCREMENT, "line")?;

        loop {
            let byte = match self.next_byte() {
                Ok(Some(b)) => b,
                Ok(None) => return Ok(ReadOutcome::EndOfInput),
                Err(e) => {
                    log::warn!("reading input failed, treating as end of input: {}", e);
                    return Ok(ReadOutcome::EndOfInput);
                }
            };
            if byte == b'\n' {
                return Ok(ReadOutcome::Line(buffer.into_vec()));
            }
            buffer.push(byte)?;
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let Some(&byte) = available.first() else {
                return Ok(None);
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}
