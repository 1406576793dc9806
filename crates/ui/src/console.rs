use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O.
///
/// Generic over reader and writer so sessions can be driven by a script in
/// tests. Every prompt returns `None` once input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// The trailing line break is stripped; other whitespace is kept.
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line still
    /// reaches the caller as text.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying reader or writer.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the writer.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the writer.
    pub fn say_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the writer.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_break_and_reports_eof() {
        let mut console = Console::new(Cursor::new("  Ana \r\n"), Vec::new());
        assert_eq!(console.prompt("Name: ").unwrap().as_deref(), Some("  Ana "));
        assert_eq!(console.prompt("Again: ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Name: Again: ");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
        let line = console.prompt("> ").unwrap().unwrap();
        assert_eq!(line, "\u{fffd}\u{fffd}");
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(""));
    }
}
