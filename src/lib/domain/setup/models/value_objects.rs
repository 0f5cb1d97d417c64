use derive_more::Display;
use thiserror::Error;

use crate::domain::setup::models::config::PortPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Username(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username cannot be empty")]
    Empty,
}

impl Username {
    pub fn new(name: &str) -> Result<Self, UsernameError> {
        if name.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(name.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Database password. Deliberately has no `Display`; use [Password::expose].
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be set")]
    Empty,
}

impl Password {
    pub fn new(password: &str) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct DatabaseName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseNameError {
    #[error("Database name must be set")]
    Empty,
}

impl DatabaseName {
    pub fn new(name: &str) -> Result<Self, DatabaseNameError> {
        if name.is_empty() {
            return Err(DatabaseNameError::Empty);
        }
        Ok(Self(name.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Host(String);

impl Host {
    /// A blank answer falls back to `default`; anything else is kept verbatim.
    pub fn new(host: &str, default: &str) -> Self {
        if host.is_empty() {
            return Self(default.to_string());
        }
        Self(host.to_string())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Port exactly as it will be written to the connection string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Port(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("port {input:?} is not a number between 1 and 65535")]
    OutOfRange { input: String },
}

impl Port {
    pub fn parse(input: &str, default: &Port, policy: PortPolicy) -> Result<Self, PortError> {
        match policy {
            PortPolicy::Numeric => {
                if input.is_empty() {
                    return Ok(default.clone());
                }
                match input.parse::<u16>() {
                    Ok(port) if port > 0 => Ok(Self::from(port)),
                    _ => Err(PortError::OutOfRange { input: input.to_string() }),
                }
            }
            PortPolicy::LegacyLength => {
                if input.chars().count() == 4 {
                    Ok(Self(input.to_string()))
                } else {
                    Ok(default.clone())
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self(port.to_string())
    }
}
