// src/infrastructure/session.rs
use crate::domain::{ClientError, Credential};
use crate::infrastructure::ZeppelinClient;

/// Builds a fresh Zeppelin session per credential.
///
/// Holds nothing but the target host; no session is shared between calls.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    hostname: String,
}

impl SessionFactory {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn open(&self, credential: Credential) -> Result<ZeppelinClient, ClientError> {
        session_for(&self.hostname, credential)
    }
}

pub fn session_for(hostname: &str, credential: Credential) -> Result<ZeppelinClient, ClientError> {
    ZeppelinClient::new(hostname, credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_factory_when_opening_sessions_then_each_targets_configured_host() {
        let factory = SessionFactory::new("zeppelin.local:8080");

        let first = factory.open(Credential::new("alice", "a")).unwrap();
        let second = factory.open(Credential::new("bob", "b")).unwrap();

        assert_eq!(first.base_url(), "http://zeppelin.local:8080");
        assert_eq!(second.base_url(), first.base_url());
        assert_eq!(factory.hostname(), "zeppelin.local:8080");
    }
}
