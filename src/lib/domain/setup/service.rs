/*!
   Module `service` runs the interactive setup: it asks for each connection parameter in
   turn, assembles [ConnectionParams] and hands the resulting lines to a [DotenvRepository].
*/

use crate::domain::setup::models::config::SetupConfig;
use crate::domain::setup::models::params::{ConnectionParams, Field, SetupError};
use crate::domain::setup::models::value_objects::{DatabaseName, Host, Password, Port, Username};
use crate::domain::setup::ports::{DotenvRepository, Prompter, UserLookup};

const USERNAME_PROMPT: &str =
    "Please enter your username for database or press enter to get your current username: ";
const PASSWORD_PROMPT: &str = "Please enter password for your user: ";
const DB_NAME_PROMPT: &str = "Please enter name of database: ";

// Whether the operator's answer may be shown on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Echo {
    Visible,
    Hidden,
}

#[derive(Debug)]
pub struct Service<P, R, U>
where
    P: Prompter,
    R: DotenvRepository,
    U: UserLookup,
{
    prompter: P,
    repo: R,
    users: U,
    config: SetupConfig,
}

impl<P, R, U> Service<P, R, U>
where
    P: Prompter,
    R: DotenvRepository,
    U: UserLookup,
{
    pub fn new(prompter: P, repo: R, users: U, config: SetupConfig) -> Self {
        Self {
            prompter,
            repo,
            users,
            config,
        }
    }

    /// Ask every question in order, then append the result to the repository.
    ///
    /// # Errors:
    ///
    /// - Whatever the individual prompts return; nothing is written in that case.
    /// - Propagates any [SetupError] returned by the [DotenvRepository].
    pub fn run(&mut self) -> Result<ConnectionParams, SetupError> {
        let user = self.get_username()?;
        let password = self.ask_password()?;
        let host = self.ask_host()?;
        let dbname = self.ask_db_name()?;
        let port = self.ask_db_port()?;

        let params = ConnectionParams::new(user, password, host, dbname, port);
        self.write_to_file(&params)?;
        Ok(params)
    }

    /// Username from the prompt, or from the first configured environment variable
    /// that is set when the prompt is left blank.
    ///
    /// # Errors:
    ///
    /// - [SetupError::MissingUsername] if neither source yields a name.
    pub fn get_username(&mut self) -> Result<Username, SetupError> {
        let input = self.read(Field::Username, USERNAME_PROMPT, Echo::Visible)?;
        if let Ok(name) = Username::new(&input) {
            return Ok(name);
        }

        for var in &self.config.user_vars {
            if let Some(name) = self.users.lookup(var).and_then(|v| Username::new(&v).ok()) {
                tracing::debug!(var = %var, "username taken from environment");
                return Ok(name);
            }
        }

        Err(SetupError::MissingUsername {
            vars: self.config.user_vars.clone(),
        })
    }

    pub fn ask_password(&mut self) -> Result<Password, SetupError> {
        self.ask_until(Field::Password, PASSWORD_PROMPT, Echo::Hidden, Password::new)
    }

    pub fn ask_host(&mut self) -> Result<Host, SetupError> {
        let prompt = format!("Please enter database host({} default): ", self.config.default_host);
        let input = self.read(Field::Host, &prompt, Echo::Visible)?;
        let host = Host::new(&input, &self.config.default_host);
        tracing::debug!(%host, "host collected");
        Ok(host)
    }

    pub fn ask_db_name(&mut self) -> Result<DatabaseName, SetupError> {
        self.ask_until(Field::DatabaseName, DB_NAME_PROMPT, Echo::Visible, DatabaseName::new)
    }

    /// Port according to the configured [PortPolicy](crate::domain::setup::models::config::PortPolicy).
    pub fn ask_db_port(&mut self) -> Result<Port, SetupError> {
        let default = Port::from(self.config.default_port);
        let policy = self.config.port_policy;
        let prompt = format!("Please enter db port({}): ", default);

        let port = self.ask_until(Field::Port, &prompt, Echo::Visible, move |input| {
            Port::parse(input, &default, policy)
        })?;
        tracing::debug!(%port, ?policy, "port collected");
        Ok(port)
    }

    /// Append the `PATH_TO_DB` and `PORT` lines for `params`.
    pub fn write_to_file(&self, params: &ConnectionParams) -> Result<(), SetupError> {
        self.repo.append(&params.dotenv_entries())?;
        tracing::info!(
            host = %params.get_host(),
            port = %params.get_port(),
            dbname = %params.get_dbname(),
            "connection settings written"
        );
        Ok(())
    }

    fn read(&mut self, field: Field, prompt: &str, echo: Echo) -> Result<String, SetupError> {
        let answer = match echo {
            Echo::Visible => self.prompter.read_line(prompt)?,
            Echo::Hidden => self.prompter.read_secret(prompt)?,
        };
        answer.ok_or(SetupError::InputClosed { field })
    }

    /// Re-prompt until `parse` accepts the answer, at most `max_attempts` times.
    fn ask_until<T, E, F>(
        &mut self,
        field: Field,
        prompt: &str,
        echo: Echo,
        parse: F,
    ) -> Result<T, SetupError>
    where
        E: std::fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        let attempts = self.config.max_attempts.max(1);
        for attempt in 1..=attempts {
            let input = self.read(field, prompt, echo)?;
            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(%field, attempt, "rejected answer: {}", e);
                    self.prompter.notify(&e.to_string())?;
                }
            }
        }

        Err(SetupError::TooManyAttempts { field, attempts })
    }
}
