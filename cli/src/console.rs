use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, StdoutLock, Write};

/// Line-based text I/O with the person at the keyboard.
pub trait Console {
    /// Reads one line without its line terminator. Returns `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;
}

pub struct StdConsole {
    stdin: StdinLock<'static>,
    stdout: StdoutLock<'static>,
    // A re-usable buffer for reading.
    // Should always be empty before and after read_line().
    buf: String,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin().lock(),
            stdout: std::io::stdout().lock(),
            buf: String::new(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.buf.clear(); // because stdin.read_line() appends to the buffer
        let num_bytes_read = self.stdin.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF
            return Ok(None);
        }
        let line = String::from(self.buf.trim_end_matches(['\r', '\n']));
        self.buf.clear();
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.stdout, "{}", line)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// A console that replays fixed input lines and records everything written to it.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// How many input lines have not been read yet.
    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        // Multi-line writes are stored line by line
        self.output.extend(line.split('\n').map(String::from));
        Ok(())
    }
}
