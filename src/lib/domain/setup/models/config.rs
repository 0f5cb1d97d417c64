use std::path::PathBuf;

/// How the port prompt decides whether an answer is usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortPolicy {
    /// Blank means the default port, anything else must be a number in `1..=65535`.
    Numeric,
    /// Any answer exactly four characters long is taken verbatim, everything else
    /// silently becomes the default port. Kept for scripts that relied on it.
    LegacyLength,
}

impl Default for PortPolicy {
    fn default() -> PortPolicy {
        Self::Numeric
    }
}

/// Defaults and limits for one setup run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    /// File the connection settings are appended to.
    pub env_path: PathBuf,
    pub default_host: String,
    pub default_port: u16,
    /// Environment variables consulted, in order, when the username prompt is left blank.
    pub user_vars: Vec<String>,
    /// Upper bound on prompts for a field that keeps getting rejected.
    pub max_attempts: usize,
    pub port_policy: PortPolicy,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            env_path: PathBuf::from(".env"),
            default_host: "localhost".to_string(),
            default_port: 5432,
            user_vars: vec!["USERNAME".to_string(), "USER".to_string()],
            max_attempts: 5,
            port_policy: PortPolicy::default(),
        }
    }
}
