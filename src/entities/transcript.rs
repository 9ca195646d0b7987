use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Every line read from or written to the console, in the order it happened.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Records `text` as it appears once printed with a trailing newline: one
    /// entry per line, including empty lines produced by embedded newlines.
    pub fn record_text(&mut self, text: &str) {
        for line in text.split('\n') {
            self.record(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn record_text_splits_lines() {
        let mut transcript = Transcript::new();
        transcript.record_text("The card has been removed.\n");
        transcript.record_text("Which card?");
        assert_eq!(
            transcript.lines(),
            ["The card has been removed.", "", "Which card?"]
        );
    }

    #[test]
    fn save_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut transcript = Transcript::new();
        transcript.record("Testing for Output logging.");
        transcript.record("Testing for Input logging.");
        transcript.save(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Testing for Output logging.\nTesting for Input logging.\n"
        );
    }
}
