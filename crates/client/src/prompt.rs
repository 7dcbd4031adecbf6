//! Line-oriented user interaction.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Where the session reads answers from and writes narration to.
pub trait Prompter {
    /// Prints one line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Prints `question` without a newline and reads one answer, trimmed.
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// [`Prompter`] over any reader/writer pair.
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl StdioPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_owned()))
    }
}
