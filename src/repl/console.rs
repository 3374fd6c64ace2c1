use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use super::input::InputError;

/// Line oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one full line.
    pub fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Prints `label` and reads the answer.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    /// Prompts until `parse` accepts the answer, reporting each rejection.
    pub fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        while let Some(line) = self.prompt(label)? {
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(e)?,
            }
        }

        Ok(None)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
