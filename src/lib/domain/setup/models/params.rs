use derive_more::From;
use lombok::{AllArgsConstructor, Getter};
use thiserror::Error;

use super::value_objects::{DatabaseName, Host, Password, Port, Username};
use crate::domain::setup::ports::PromptError;

/// Key of the line holding the connection URL. Consumers read it under this exact name.
pub const PATH_TO_DB_KEY: &str = "PATH_TO_DB";
pub const PORT_KEY: &str = "PORT";

#[derive(Getter, AllArgsConstructor, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    user: Username,
    password: Password,
    host: Host,
    dbname: DatabaseName,
    port: Port,
}

impl ConnectionParams {
    pub fn connect_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose(),
            self.host,
            self.port,
            self.dbname
        )
    }

    /// Lines appended to the env file, in order.
    pub fn dotenv_entries(&self) -> Vec<DotenvEntry> {
        vec![
            DotenvEntry::from((PATH_TO_DB_KEY.to_string(), self.connect_string())),
            DotenvEntry::from((PORT_KEY.to_string(), self.port.to_string())),
        ]
    }
}

impl std::fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("user", &self.user)
            .field("password", &self.password)
            .field("host", &self.host)
            .field("dbname", &self.dbname)
            .field("port", &self.port)
            .finish()
    }
}

/// One `KEY = value` line of an env file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct DotenvEntry {
    pub key: String,
    pub value: String,
}

impl std::fmt::Display for DotenvEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// The value a prompt is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    Host,
    DatabaseName,
    Port,
}

impl Field {
    pub fn to_str(&self) -> &str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Host => "host",
            Field::DatabaseName => "database name",
            Field::Port => "port",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no username given and none of {vars:?} is set")]
    MissingUsername { vars: Vec<String> },
    #[error("no valid {field} after {attempts} attempts")]
    TooManyAttempts { field: Field, attempts: usize },
    #[error("input closed while waiting for {field}")]
    InputClosed { field: Field },
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}
