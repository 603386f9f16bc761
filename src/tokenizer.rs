use crate::buffer::GrowableBuffer;
use crate::error::ShellError;

pub const TOKEN_BUFFER_INCREMENT: usize = 64;

/// Space, tab, carriage return, newline and bell.
pub const TOKEN_DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// Words of one input line, as raw bytes. The first word is the command name.
#[derive(Debug)]
pub struct TokenList<'a> {
    tokens: GrowableBuffer<&'a [u8]>,
}

impl<'a> TokenList<'a> {
    /// `None` when the line held no words at all.
    pub fn command(&self) -> Option<&'a [u8]> {
        self.tokens.as_slice().first().copied()
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[&'a [u8]] {
        self.tokens.as_slice().get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[&'a [u8]] {
        self.tokens.as_slice()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Splits a line on runs of delimiters. No quoting or escaping, and no
/// decoding: bytes pass through untouched.
pub fn tokenize(line: &[u8]) -> Result<TokenList<'_>, ShellError> {
    let mut tokens = GrowableBuffer::with_increment(TOKEN_BUFFER_INCREMENT, "token")?;
    for word in line
        .split(|b| TOKEN_DELIMITERS.contains(b))
        .filter(|w| !w.is_empty())
    {
        tokens.push(word)?;
    }
    Ok(TokenList { tokens })
}
