/*
   Module `ports` specifies the API by which the setup flow talks to the outside world.

   The flow is strictly sequential and runs on a single thread, so none of these traits
   carry `Send`/`Sync` bounds and all calls block.
*/

use thiserror::Error;

use crate::domain::setup::models::params::{DotenvEntry, SetupError};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
}

/// `Prompter` asks the operator one question at a time.
pub trait Prompter {
    /// Show `prompt` and read a single answer with its line terminator removed.
    ///
    /// Returns `Ok(None)` once the input has been exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError>;

    /// Like [Prompter::read_line], but the answer must not be echoed back to the operator.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError>;

    /// Show an informational line, e.g. why an answer was rejected.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        (**self).read_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        (**self).read_secret(prompt)
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        (**self).notify(message)
    }
}

/// `DotenvRepository` is where finished settings end up.
pub trait DotenvRepository {
    /// Append `entries` after whatever the store already holds.
    ///
    /// # Errors:
    ///
    /// - [SetupError::Unknown] wrapping the underlying failure. The caller treats it as fatal.
    fn append(&self, entries: &[DotenvEntry]) -> Result<(), SetupError>;
}

/// `UserLookup` resolves environment variables for the username fallback.
pub trait UserLookup {
    /// Value of `var`, or `None` when it is unset or empty.
    fn lookup(&self, var: &str) -> Option<String>;
}
