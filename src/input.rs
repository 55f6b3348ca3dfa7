//! Line-based console input.
//!
//! Reads menu choices from any `BufRead` and writes prompts to any `Write`, so
//! the interactive loop can be driven from tests with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

pub const INVALID_CHOICE_MESSAGE: &str = "Invalid option, try again.";

/// Parses a menu choice, `None` if it is not a number in `range`.
pub fn parse_choice(input: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|choice| range.contains(choice))
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Writes `text` without a newline and flushes.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Asks until the answer is a number in `range`. `None` at end of input.
    pub fn read_choice(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_choice(&line, &range) {
                Some(choice) => return Ok(Some(choice)),
                None => self.say(INVALID_CHOICE_MESSAGE)?,
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
