//! Line-oriented terminal I/O used by the session.

use std::io::{self, BufRead, Write};

/// Blocking text I/O with the user.
pub trait Terminal {
    /// Print one line of text.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input. Invalid UTF-8 is replaced with
    /// U+FFFD rather than failing.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Read everything until end of input, replacing invalid UTF-8.
    fn read_to_end(&mut self) -> io::Result<String>;
}

/// Terminal over any buffered reader and writer.
pub struct IoTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl IoTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for IoTerminal<R, W> {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut bytes = Vec::new();
        self.input.read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Scripted terminal for session tests.
///
/// Each queued input answers exactly one `read_line` or `read_to_end` call.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: std::collections::VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn prompted(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }
}

#[cfg(test)]
impl Terminal for ScriptedTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        Ok(self.inputs.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminator_and_shows_prompt() {
        let mut out = Vec::new();
        let mut term = IoTerminal::new(Cursor::new("first\r\nsecond\n"), &mut out);

        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(term.read_line("> ").unwrap(), None);
        drop(term);

        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut term = IoTerminal::new(Cursor::new("  spaced  \n"), Vec::new());
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_read_to_end_consumes_rest() {
        let mut term = IoTerminal::new(Cursor::new("a\nline one\nline two\n"), Vec::new());

        assert_eq!(term.read_line("").unwrap().as_deref(), Some("a"));
        assert_eq!(term.read_to_end().unwrap(), "line one\nline two\n");
        assert_eq!(term.read_line("").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let input: &[u8] = b"a\xff\n\xff\xfe bad\n";
        let mut term = IoTerminal::new(Cursor::new(input), Vec::new());

        assert_eq!(term.read_line("").unwrap().as_deref(), Some("a\u{fffd}"));
        assert_eq!(term.read_to_end().unwrap(), "\u{fffd}\u{fffd} bad\n");
    }

    #[test]
    fn test_print_line_appends_newline() {
        let mut out = Vec::new();
        IoTerminal::new(Cursor::new(""), &mut out)
            .print_line("hello")
            .unwrap();
        assert_eq!(out, b"hello\n");
    }
}
