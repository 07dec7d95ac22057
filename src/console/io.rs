use std::io::{self, BufRead, Write};

/// Source of player input, one line at a time.
pub trait LineInput {
    /// Block until a full line is available. Returns `None` at end of input.
    /// The trailing newline is stripped.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for everything shown to the players.
pub trait LineOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if BufRead::read_line(self, &mut buf)? == 0 {
            return Ok(None);
        }
        let len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }
}

impl<W: Write> LineOutput for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")?;
        self.flush()
    }
}
