//! Console prompt helpers.
//!
//! All user input is parsed here; the core only ever sees typed values.
//! Generic over reader and writer so scripted tests can drive a session
//! through in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print a full line.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` when input has ended.
    pub fn try_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Prompt and read one trimmed line, treating end of input as an error.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        self.try_line(prompt)?.context("input ended unexpectedly")
    }

    /// Prompt until the user enters a valid unsigned integer.
    pub fn read_u32(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let entry = self.line(prompt)?;
            match entry.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Prompt until the user enters a valid number.
    pub fn read_f64(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let entry = self.line(prompt)?;
            match entry.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn line_trims_whitespace() {
        let mut c = console("  hello  \n");
        assert_eq!(c.line("> ").unwrap(), "hello");
    }

    #[test]
    fn try_line_returns_none_at_eof() {
        let mut c = console("");
        assert_eq!(c.try_line("> ").unwrap(), None);
    }

    #[test]
    fn read_u32_reprompts_until_valid() {
        let mut c = console("abc\n-3\n42\n");
        assert_eq!(c.read_u32("Age: ").unwrap(), 42);
        let output = String::from_utf8(c.writer).unwrap();
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn read_f64_accepts_decimals() {
        let mut c = console("83.5\n");
        assert_eq!(c.read_f64("Grade: ").unwrap(), 83.5);
    }
}
