// src/domain/credential.rs
use crate::constants::{ENV_PASSWORD, ENV_PASSWORD_FALLBACK, ENV_USERNAME, ENV_USERNAME_FALLBACK};
use crate::domain::DomainError;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the credential from `GOZEPPELIN_USERNAME` / `GOZEPPELIN_PASSWORD`,
    /// falling back to `ZEPPELIN_USERNAME` / `ZEPPELIN_PASSWORD`.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Both values are required; an empty value counts as missing. A missing
    /// value is reported under its primary variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let read = |primary: &'static str, fallback: &str| {
            present(primary)
                .or_else(|| present(fallback))
                .ok_or(DomainError::MissingCredential(primary))
        };

        Ok(Self {
            username: read(ENV_USERNAME, ENV_USERNAME_FALLBACK)?,
            password: read(ENV_PASSWORD, ENV_PASSWORD_FALLBACK)?,
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn given_both_variables_when_reading_then_returns_credential() {
        let lookup = lookup_from(&[(ENV_USERNAME, "alice"), (ENV_PASSWORD, "secret")]);

        let credential = Credential::from_lookup(lookup).unwrap();

        assert_eq!(credential, Credential::new("alice", "secret"));
    }

    #[test]
    fn given_missing_password_when_reading_then_names_the_variable() {
        let lookup = lookup_from(&[(ENV_USERNAME, "alice")]);

        let result = Credential::from_lookup(lookup);

        match result {
            Err(DomainError::MissingCredential(key)) => assert_eq!(key, ENV_PASSWORD),
            other => panic!("Expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn given_empty_username_when_reading_then_treats_as_missing() {
        let lookup = lookup_from(&[(ENV_USERNAME, ""), (ENV_PASSWORD, "secret")]);

        let result = Credential::from_lookup(lookup);

        assert!(matches!(
            result,
            Err(DomainError::MissingCredential(ENV_USERNAME))
        ));
    }

    #[test]
    fn given_only_fallback_variables_when_reading_then_uses_them() {
        let lookup = lookup_from(&[
            (ENV_USERNAME_FALLBACK, "bob"),
            (ENV_PASSWORD_FALLBACK, "pw"),
        ]);

        let credential = Credential::from_lookup(lookup).unwrap();

        assert_eq!(credential, Credential::new("bob", "pw"));
    }

    #[test]
    fn given_both_variable_sets_when_reading_then_primary_wins() {
        let lookup = lookup_from(&[
            (ENV_USERNAME, "alice"),
            (ENV_PASSWORD, "secret"),
            (ENV_USERNAME_FALLBACK, "bob"),
            (ENV_PASSWORD_FALLBACK, "pw"),
        ]);

        let credential = Credential::from_lookup(lookup).unwrap();

        assert_eq!(credential, Credential::new("alice", "secret"));
    }

    #[test]
    fn given_empty_primary_when_reading_then_falls_back() {
        let lookup = lookup_from(&[
            (ENV_USERNAME, ""),
            (ENV_USERNAME_FALLBACK, "bob"),
            (ENV_PASSWORD, "secret"),
        ]);

        let credential = Credential::from_lookup(lookup).unwrap();

        assert_eq!(credential.username, "bob");
        assert_eq!(credential.password, "secret");
    }

    #[test]
    fn given_credential_when_debug_formatting_then_password_is_redacted() {
        let credential = Credential::new("alice", "hunter2");

        let rendered = format!("{:?}", credential);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
