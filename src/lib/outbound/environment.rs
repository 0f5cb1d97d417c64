use crate::domain::setup::ports::UserLookup;

/// [UserLookup] backed by the variables of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl UserLookup for ProcessEnvironment {
    fn lookup(&self, var: &str) -> Option<String> {
        std::env::var(var).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_set_variable() {
        std::env::set_var("DBENV_SETUP_TEST_LOOKUP_SET", "bob");

        assert_eq!(ProcessEnvironment.lookup("DBENV_SETUP_TEST_LOOKUP_SET"), Some("bob".to_string()));
    }

    #[test]
    fn test_lookup_empty_variable() {
        std::env::set_var("DBENV_SETUP_TEST_LOOKUP_EMPTY", "");

        assert_eq!(ProcessEnvironment.lookup("DBENV_SETUP_TEST_LOOKUP_EMPTY"), None);
    }

    #[test]
    fn test_lookup_unset_variable() {
        assert_eq!(ProcessEnvironment.lookup("DBENV_SETUP_TEST_LOOKUP_UNSET"), None);
    }
}
