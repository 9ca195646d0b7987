use crate::entities::transcript::Transcript;
use crate::error::SessionError;
use std::io::{BufRead, Write};

/// Line-oriented console that tees everything it reads and writes into a
/// [`Transcript`].
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Prints `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), SessionError> {
        let text = text.as_ref();
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        self.transcript.record_text(text);
        Ok(())
    }

    /// Reads one line without its line terminator. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD. Fails with
    /// [`SessionError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        let line = String::from_utf8_lossy(&bytes).into_owned();
        self.transcript.record(line.clone());
        Ok(line)
    }

    pub fn prompt(&mut self, question: &str) -> Result<String, SessionError> {
        self.say(question)?;
        self.read_line()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
pub mod testing {
    use super::Console;
    use std::io::Cursor;

    pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    /// A console whose input is `lines`, one per line.
    pub fn scripted(lines: &[&str]) -> ScriptedConsole {
        let mut input = lines.join("\n");
        if !lines.is_empty() {
            input.push('\n');
        }
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    /// A console reading `input` verbatim, for byte sequences `scripted`
    /// cannot express.
    pub fn from_bytes(input: &[u8]) -> ScriptedConsole {
        Console::new(Cursor::new(input.to_vec()), Vec::new())
    }

    pub fn printed(console: &ScriptedConsole) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }
}
