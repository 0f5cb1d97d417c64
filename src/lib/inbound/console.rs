/*
   Module `console` drives the setup flow from a terminal, or from anything else that
   looks like one.
*/

use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};

use crate::domain::setup::ports::{PromptError, Prompter};

/// [Prompter] over a line-oriented reader and a writer.
#[derive(Debug)]
pub struct ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    reader: R,
    writer: W,
    // Read secrets from the controlling terminal with echo switched off.
    hide_secrets: bool,
}

impl<R, W> ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            hide_secrets: false,
        }
    }
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process' stdin and stdout.
    ///
    /// When stdin is a terminal, secrets are read through `rpassword` so they are not echoed.
    /// Piped input is read line by line like any other answer.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            reader: stdin.lock(),
            writer: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R, W> Prompter for ConsolePrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        if !self.hide_secrets {
            return self.read_line(prompt);
        }

        self.writer.flush()?;
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
