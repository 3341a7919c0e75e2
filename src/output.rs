//! Report output
//!
//! Renders frequency groups as text, highest frequency first, one line per
//! frequency:
//!
//! ```text
//! "The,cat" word(s) has occured 2 times in the text
//! ```

use crate::transpose::FrequencyGroups;
use std::io::{self, BufWriter, Write};

/// Default buffer size for report writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Render a single report line, without the trailing newline
pub fn format_line<S: AsRef<str>>(words: &[S], frequency: u64) -> String {
    let joined = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(",");
    format!("\"{}\" word(s) has occured {} times in the text", joined, frequency)
}

/// Buffered report writer
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub fn with_capacity(buffer_size: usize, inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Write every group, highest frequency first
    pub fn write_groups(&mut self, groups: &FrequencyGroups) -> io::Result<()> {
        for (frequency, words) in groups.iter_descending() {
            self.write_line(&format_line(words, frequency))?;
        }
        Ok(())
    }

    /// Flush the buffer to the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

/// Write the whole report to `out` and flush it
pub fn write_report<W: Write>(groups: &FrequencyGroups, out: W) -> io::Result<u64> {
    let mut writer = ReportWriter::new(out);
    writer.write_groups(groups)?;
    writer.flush()?;
    Ok(writer.lines_written())
}
