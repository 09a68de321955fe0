use std::io::{self, BufRead, Write};

use crate::error::{Result, SaveError};

/// Line-oriented user interaction over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line. Output failures are logged, not fatal.
    pub fn say(&mut self, text: impl AsRef<str>) {
        if let Err(e) = writeln!(self.output, "{}", text.as_ref()) {
            log::warn!("console write failed: {}", e);
        }
    }

    /// Show `prompt` on the current line and read back one trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)
            .and_then(|_| self.output.flush())
            .map_err(|e| SaveError::io("<stdout>", e))?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|e| SaveError::io("<stdin>", e))?;
        if n == 0 {
            return Err(SaveError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
