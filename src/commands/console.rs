//! Line-oriented console I/O
//!
//! Wraps any `BufRead`/`Write` pair so rounds can be played against stdin/stdout or
//! against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Prompting console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line
    ///
    /// Returns `None` once the input stream is exhausted. The trailing newline is removed and
    /// invalid UTF-8 is replaced rather than reported.
    ///
    /// # Errors
    ///
    /// Returns any error from reading input or flushing output.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        // Malformed bytes become U+FFFD and fail word validation like any other bad guess
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Release the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_lines_then_none() {
        let mut console = Console::new(Cursor::new("eagle\r\ny\n"), Vec::new());

        assert_eq!(console.prompt("Guess").unwrap().as_deref(), Some("eagle"));
        assert_eq!(console.prompt("Sure").unwrap().as_deref(), Some("y"));
        assert_eq!(console.prompt("Guess").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Guess: Sure: Guess: \n");
    }

    #[test]
    fn prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nnext\n".to_vec()), Vec::new());

        assert_eq!(
            console.prompt("Guess").unwrap().as_deref(),
            Some("\u{fffd}\u{fffd}")
        );
        assert_eq!(console.prompt("Guess").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  a b  \n"), Vec::new());
        assert_eq!(console.prompt("x").unwrap().as_deref(), Some("  a b  "));
    }
}
