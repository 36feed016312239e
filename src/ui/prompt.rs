//! Interactive prompt service.
//!
//! [`Terminal`] is the seam between the session and the console: the session
//! only asks questions and prints text, so tests can drive it with scripted
//! input and capture everything it writes.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub const YES_NO: [&str; 2] = ["yes", "no"];

pub trait Terminal {
    /// Show `message` and read one line of input, without its line break.
    fn ask(&mut self, message: &str) -> AppResult<String>;

    /// Print `text` followed by a line break.
    fn say(&mut self, text: &str) -> AppResult<()>;

    /// Ask until the answer matches one of `valid` (case-insensitive, blanks
    /// trimmed), echo the accepted entry and return it lowercased.
    fn choose(&mut self, message: &str, valid: &[&str]) -> AppResult<String> {
        loop {
            let answer = self.ask(message)?.trim().to_lowercase();
            if valid.contains(&answer.as_str()) {
                self.say(&format!("Great! The chosen entry is: {answer}\n"))?;
                return Ok(answer);
            }
            self.say("Sorry... it seems like you're not typing a correct entry.")?;
            self.say("Let's try again!")?;
        }
    }

    /// Yes/no question.
    fn confirm(&mut self, message: &str) -> AppResult<bool> {
        Ok(self.choose(message, &YES_NO)? == "yes")
    }
}

/// Terminal over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process' standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn ask(&mut self, message: &str) -> AppResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
